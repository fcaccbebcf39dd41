use serde::{Deserialize, Serialize};

use crate::{
    category::models::Category,
    common::{models::lenient_i32_opt, server_error::ServerError},
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// A validated question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32_opt")]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32_opt")]
    pub difficulty: Option<i32>,
}

impl CreateQuestionRequest {
    pub fn validate(self) -> Result<NewQuestion, ServerError> {
        let question = non_blank(self.question)
            .ok_or_else(|| ServerError::BadRequest("Question text is required".into()))?;
        let answer = non_blank(self.answer)
            .ok_or_else(|| ServerError::BadRequest("Answer text is required".into()))?;

        let category = self
            .category
            .filter(|c| *c > 0)
            .ok_or_else(|| ServerError::BadRequest("Category must be a positive integer".into()))?;
        let difficulty = self
            .difficulty
            .filter(|d| *d > 0)
            .ok_or_else(|| {
                ServerError::BadRequest("Difficulty must be a positive integer".into())
            })?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct QuestionPageQuery {
    pub page: Option<String>,
}

impl QuestionPageQuery {
    /// Non-numeric page values fall back to the first page. Numeric values
    /// too large for an `i64` are rejected.
    pub fn page_num(&self) -> Result<i64, ServerError> {
        let Some(raw) = self.page.as_deref().map(str::trim) else {
            return Ok(1);
        };

        let page = match raw.parse::<i64>() {
            Ok(page) => page,
            Err(_) if is_integer_text(raw) => {
                return Err(ServerError::BadRequest(format!(
                    "Page {} is out of range",
                    raw
                )));
            }
            Err(_) => 1,
        };

        if page < 1 {
            return Err(ServerError::BadRequest(format!(
                "Page must be 1 or greater, got {}",
                page
            )));
        }

        Ok(page)
    }
}

fn is_integer_text(value: &str) -> bool {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
    pub current_category: Option<String>,
}

impl QuestionPageResponse {
    pub fn new(questions: Vec<Question>, total_questions: i64, categories: Vec<Category>) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            categories,
            current_category: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

impl SearchResponse {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}
