use async_trait::async_trait;

use crate::{
    category::models::Category,
    question::models::{NewQuestion, Question},
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read and write access to the `questions` and `categories` tables.
///
/// Handlers only ever see this trait, so the server runs against Postgres
/// while tests run against an in-memory store.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_category(&self, category_id: i32) -> Result<Option<Category>, StoreError>;

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Questions ordered by id, skipping `offset` and returning at most `limit`.
    async fn questions_page(&self, offset: i64, limit: i64) -> Result<Vec<Question>, StoreError>;

    async fn count_questions(&self) -> Result<i64, StoreError>;

    async fn questions_by_category(&self, category_id: i32) -> Result<Vec<Question>, StoreError>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn get_question(&self, question_id: i32) -> Result<Option<Question>, StoreError>;

    async fn insert_question(&self, question: &NewQuestion) -> Result<i32, StoreError>;

    /// Returns `false` when no row had the given id.
    async fn delete_question(&self, question_id: i32) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
