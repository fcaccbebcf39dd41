use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use crate::{common::store::StoreError, quiz::selector::QuizError};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Store failures on write and filtered-read endpoints surface as 422,
    /// listing endpoints keep the default 500.
    pub fn unprocessable(e: StoreError) -> Self {
        ServerError::Unprocessable(e.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ServerError::BadRequest(msg) | ServerError::NotFound(msg) => {
                warn!("{}", self);
                msg.clone()
            }
            ServerError::MethodNotAllowed => "Method not allowed.".to_string(),
            ServerError::Unprocessable(_) => {
                error!("{}", self);
                "Unprocessable entity.".to_string()
            }
            ServerError::Store(_) => {
                error!("{}", self);
                "Internal server error.".to_string()
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

impl From<QuizError> for ServerError {
    fn from(e: QuizError) -> Self {
        match e {
            QuizError::CategoryNotFound(id) => {
                ServerError::NotFound(format!("Category with id {} does not exist", id))
            }
            QuizError::Unavailable(e) => ServerError::Unprocessable(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        ServerError::NotFound(format!("Invalid resource path: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}
