use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use tracing::info;

use crate::{
    common::{app_state::AppState, server_error::ServerError},
    question::models::{
        CreateQuestionRequest, CreatedResponse, DeletedResponse, QuestionPageQuery,
        QuestionPageResponse, SearchRequest, SearchResponse,
    },
};

pub fn question_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/questions", get(get_question_page).post(create_question))
        .route("/questions/{question_id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}

async fn get_question_page(
    State(state): State<Arc<AppState>>,
    query: Result<Query<QuestionPageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Query(query) = query?;
    let page = query.page_num()?;
    let page_size = i64::from(state.get_page_size());
    let store = state.get_store();

    let questions = store
        .questions_page((page - 1).saturating_mul(page_size), page_size)
        .await?;
    let total_questions = store.count_questions().await?;
    let categories = store.list_categories().await?;

    Ok((
        StatusCode::OK,
        Json(QuestionPageResponse::new(
            questions,
            total_questions,
            categories,
        )),
    ))
}

async fn create_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(request) = body?;
    let new_question = request.validate()?;
    let store = state.get_store();

    let category = store
        .get_category(new_question.category)
        .await
        .map_err(ServerError::unprocessable)?;

    if category.is_none() {
        return Err(ServerError::Unprocessable(format!(
            "Category with id {} does not exist",
            new_question.category
        )));
    }

    let created = store
        .insert_question(&new_question)
        .await
        .map_err(ServerError::unprocessable)?;

    info!("Created question with id {}", created);
    Ok((
        StatusCode::OK,
        Json(CreatedResponse {
            success: true,
            created,
        }),
    ))
}

async fn delete_question(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Path(question_id) = path?;
    let store = state.get_store();

    let question = store
        .get_question(question_id)
        .await
        .map_err(ServerError::unprocessable)?;

    if question.is_none() {
        return Err(ServerError::NotFound(format!(
            "Question with id {} does not exist",
            question_id
        )));
    }

    // A concurrent delete can win between the lookup and this call
    let deleted = store
        .delete_question(question_id)
        .await
        .map_err(ServerError::unprocessable)?;

    if !deleted {
        return Err(ServerError::NotFound(format!(
            "Question with id {} was already deleted",
            question_id
        )));
    }

    info!("Deleted question with id {}", question_id);
    Ok((
        StatusCode::OK,
        Json(DeletedResponse {
            success: true,
            deleted: question_id,
        }),
    ))
}

async fn search_questions(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(request) = body?;

    let Some(term) = request.search_term.filter(|t| !t.is_empty()) else {
        return Err(ServerError::BadRequest("Search term is required".into()));
    };

    let questions = state
        .get_store()
        .search_questions(&term)
        .await
        .map_err(ServerError::unprocessable)?;

    Ok((StatusCode::OK, Json(SearchResponse::new(questions))))
}
