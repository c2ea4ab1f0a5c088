//! # Storage Layer
//!
//! The [`QuestionStore`] trait is everything the rest of quizzer knows about
//! persistence. Commands and the play session only ever list, look up, create,
//! update and delete questions through it.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, a single `quizzes.json` file
//!   holding every question plus the next id to hand out.
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! Ids are assigned by the store, start at 1 and are never reused, even after
//! the question holding them is deleted.

use crate::error::Result;
use crate::model::{Question, QuestionDraft, QuestionId};

pub mod fs;
pub mod memory;

pub trait QuestionStore {
    /// Every stored question, ordered by id.
    fn list_all(&self) -> Result<Vec<Question>>;

    fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>>;

    /// Store a new question and return it with its assigned id.
    fn create(&mut self, draft: QuestionDraft) -> Result<Question>;

    /// Overwrite an existing question. Fails with `NotFound` if its id is unknown.
    fn update(&mut self, question: &Question) -> Result<()>;

    /// Remove a question. Fails with `NotFound` if its id is unknown.
    fn delete(&mut self, id: QuestionId) -> Result<()>;
}
