use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{common::models::lenient_i32_opt, question::models::Question};

#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// The web client sends `{"type": ..., "id": ...}`; only the id matters here.
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "lenient_i32_opt")]
    pub id: Option<i32>,
}

impl QuizRequest {
    /// A category object without an id is treated like a missing one.
    pub fn category_id(&self) -> Option<i32> {
        self.quiz_category.as_ref().and_then(|c| c.id)
    }

    pub fn previously_asked(&self) -> HashSet<i32> {
        self.previous_questions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .copied()
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

impl QuizResponse {
    pub fn new(question: Option<Question>) -> Self {
        Self {
            success: true,
            question,
        }
    }
}
