//! Uniform sampling without replacement.
//!
//! Every draw picks uniformly among the identifiers still in the pool and
//! removes the chosen one, so a full run of draws reveals a uniformly random
//! permutation one element at a time.

use crate::error::{QuizError, Result};
use crate::model::QuestionId;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::HashSet;

pub struct Sampler<R = ThreadRng> {
    pool: Vec<QuestionId>,
    rng: R,
}

impl Sampler<ThreadRng> {
    pub fn new(ids: impl IntoIterator<Item = QuestionId>) -> Self {
        Self::with_rng(ids, rand::rng())
    }
}

impl<R: Rng> Sampler<R> {
    /// Builds a pool from `ids`; repeated identifiers are kept once.
    pub fn with_rng(ids: impl IntoIterator<Item = QuestionId>, rng: R) -> Self {
        let mut seen = HashSet::new();
        let pool: Vec<QuestionId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        Self { pool, rng }
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn draw_one(&mut self) -> Result<QuestionId> {
        if self.pool.is_empty() {
            return Err(QuizError::EmptyPool);
        }
        let index = self.rng.random_range(0..self.pool.len());
        // Pool order carries no meaning, so swap_remove keeps draws O(1).
        Ok(self.pool.swap_remove(index))
    }
}
