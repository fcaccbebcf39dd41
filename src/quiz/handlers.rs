use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use tracing::debug;

use crate::{
    common::{app_state::AppState, server_error::ServerError},
    quiz::{
        models::{QuizRequest, QuizResponse},
        selector::{UniformChooser, next_question},
    },
};

pub fn quiz_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/quizzes", post(get_quiz_question))
        .with_state(state)
}

async fn get_quiz_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(request) = body?;

    let mut chooser = UniformChooser::from_os_rng();
    let question = next_question(state.get_store(), &request, &mut chooser).await?;

    if question.is_none() {
        debug!("No unseen quiz questions remain");
    }

    Ok((StatusCode::OK, Json(QuizResponse::new(question))))
}
