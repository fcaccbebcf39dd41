use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{
    common::store::{StoreError, TriviaStore},
    question::models::Question,
    quiz::models::QuizRequest,
};

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Category with id {0} does not exist")]
    CategoryNotFound(i32),

    #[error("Failed to load quiz candidates: {0}")]
    Unavailable(#[from] StoreError),
}

/// Picks an index in `0..len`. Callers never pass `len == 0`.
pub trait Chooser {
    fn choose_index(&mut self, len: usize) -> usize;
}

pub struct UniformChooser {
    rng: ChaCha8Rng,
}

impl UniformChooser {
    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    pub fn from_os_rng() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }
}

impl Chooser for UniformChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

pub fn remaining_questions(candidates: Vec<Question>, excluded: &HashSet<i32>) -> Vec<Question> {
    candidates
        .into_iter()
        .filter(|q| !excluded.contains(&q.id))
        .collect()
}

/// Drops every excluded candidate and picks one of the rest, or `None` when
/// nothing is left.
pub fn select_question<C>(
    candidates: Vec<Question>,
    excluded: &HashSet<i32>,
    chooser: &mut C,
) -> Option<Question>
where
    C: Chooser + ?Sized,
{
    let mut remaining = remaining_questions(candidates, excluded);
    if remaining.is_empty() {
        return None;
    }

    let idx = chooser.choose_index(remaining.len()).min(remaining.len() - 1);
    Some(remaining.swap_remove(idx))
}

pub async fn next_question<C>(
    store: &dyn TriviaStore,
    request: &QuizRequest,
    chooser: &mut C,
) -> Result<Option<Question>, QuizError>
where
    C: Chooser + Send + ?Sized,
{
    let candidates = match request.category_id() {
        Some(category_id) => {
            if store.get_category(category_id).await?.is_none() {
                return Err(QuizError::CategoryNotFound(category_id));
            }
            store.questions_by_category(category_id).await?
        }
        None => store.list_questions().await?,
    };

    let excluded = request.previously_asked();
    debug!(
        "Selecting quiz question from {} candidates, {} previously asked",
        candidates.len(),
        excluded.len()
    );

    Ok(select_question(candidates, &excluded, chooser))
}
