use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::debug;

use crate::{
    category::models::{CategoryListResponse, CategoryQuestionsResponse},
    common::{app_state::AppState, server_error::ServerError},
};

pub fn category_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(list_category_questions))
        .with_state(state)
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let categories = state.get_store().list_categories().await?;
    Ok((StatusCode::OK, Json(CategoryListResponse::new(categories))))
}

async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Path(category_id) = path?;
    let store = state.get_store();

    let Some(category) = store
        .get_category(category_id)
        .await
        .map_err(ServerError::unprocessable)?
    else {
        return Err(ServerError::NotFound(format!(
            "Category with id {} does not exist",
            category_id
        )));
    };

    let questions = store
        .questions_by_category(category_id)
        .await
        .map_err(ServerError::unprocessable)?;

    debug!(
        "Found {} questions in category {}",
        questions.len(),
        category.kind
    );

    Ok((
        StatusCode::OK,
        Json(CategoryQuestionsResponse::new(category, questions)),
    ))
}
