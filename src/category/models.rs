use serde::{Deserialize, Serialize};

use crate::question::models::Question;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

impl CategoryListResponse {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

impl CategoryQuestionsResponse {
    pub fn new(category: Category, questions: Vec<Question>) -> Self {
        Self {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category: category.kind,
        }
    }
}
