use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    category::{self, models::Category},
    common::store::{StoreError, TriviaStore},
    health,
    question::{
        self,
        models::{NewQuestion, Question},
    },
};

pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub async fn connect(connection_string: &str) -> Result<Self, StoreError> {
        let pool = Pool::<Postgres>::connect(connection_string)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to database: {}", e)))?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(category::db::list_categories(&self.pool).await?)
    }

    async fn get_category(&self, category_id: i32) -> Result<Option<Category>, StoreError> {
        Ok(category::db::get_category_by_id(&self.pool, category_id).await?)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(question::db::list_questions(&self.pool).await?)
    }

    async fn questions_page(&self, offset: i64, limit: i64) -> Result<Vec<Question>, StoreError> {
        Ok(question::db::get_question_page(&self.pool, offset, limit).await?)
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        Ok(question::db::count_questions(&self.pool).await?)
    }

    async fn questions_by_category(&self, category_id: i32) -> Result<Vec<Question>, StoreError> {
        Ok(question::db::list_questions_by_category(&self.pool, category_id).await?)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        Ok(question::db::search_questions(&self.pool, term).await?)
    }

    async fn get_question(&self, question_id: i32) -> Result<Option<Question>, StoreError> {
        Ok(question::db::get_question_by_id(&self.pool, question_id).await?)
    }

    async fn insert_question(&self, new_question: &NewQuestion) -> Result<i32, StoreError> {
        Ok(question::db::create_question(&self.pool, new_question).await?)
    }

    async fn delete_question(&self, question_id: i32) -> Result<bool, StoreError> {
        Ok(question::db::delete_question_by_id(&self.pool, question_id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(health::db::health_check(&self.pool).await?)
    }
}
