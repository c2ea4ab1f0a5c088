use super::QuestionStore;
use crate::error::{QuizError, Result};
use crate::model::{Question, QuestionDraft, QuestionId};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    questions: BTreeMap<QuestionId, Question>,
    next_id: QuestionId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            questions: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionStore for InMemoryStore {
    fn list_all(&self) -> Result<Vec<Question>> {
        Ok(self.questions.values().cloned().collect())
    }

    fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>> {
        Ok(self.questions.get(&id).cloned())
    }

    fn create(&mut self, draft: QuestionDraft) -> Result<Question> {
        let question = Question::new(self.next_id, draft);
        self.next_id += 1;
        self.questions.insert(question.id, question.clone());
        Ok(question)
    }

    fn update(&mut self, question: &Question) -> Result<()> {
        match self.questions.get_mut(&question.id) {
            Some(slot) => {
                *slot = question.clone();
                Ok(())
            }
            None => Err(QuizError::NotFound(question.id)),
        }
    }

    fn delete(&mut self, id: QuestionId) -> Result<()> {
        if self.questions.remove(&id).is_none() {
            return Err(QuizError::NotFound(id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_question(mut self, question: &str, answer: &str) -> Self {
            self.store
                .create(QuestionDraft::new(question, answer))
                .unwrap();
            self
        }

        pub fn with_questions(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = QuestionDraft::new(format!("Question {}", i + 1), format!("{}", i + 1));
                self.store.create(draft).unwrap();
            }
            self
        }

        /// The two-question pool used throughout the session tests.
        pub fn arithmetic_and_capital(self) -> Self {
            self.with_question("2+2", "4")
                .with_question("capital of France", "París")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn assigns_increasing_ids() {
        let store = StoreFixture::new().with_questions(3).store;
        let ids: Vec<_> = store.list_all().unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = StoreFixture::new().with_questions(2).store;
        store.delete(2).unwrap();
        let created = store.create(QuestionDraft::new("Again", "yes")).unwrap();
        assert_eq!(created.id, 3);
    }

    #[test]
    fn find_missing_returns_none() {
        let store = InMemoryStore::new();
        assert!(store.find_by_id(42).unwrap().is_none());
    }

    #[test]
    fn update_replaces_content() {
        let mut store = StoreFixture::new().with_question("Old", "a").store;
        let mut q = store.find_by_id(1).unwrap().unwrap();
        q.apply(QuestionDraft::new("New", "b"));
        store.update(&q).unwrap();

        let saved = store.find_by_id(1).unwrap().unwrap();
        assert_eq!(saved.question, "New");
        assert_eq!(saved.answer, "b");
    }

    #[test]
    fn update_and_delete_unknown_ids_fail() {
        let mut store = InMemoryStore::new();
        let ghost = Question::new(9, QuestionDraft::new("q", "a"));
        assert!(matches!(store.update(&ghost), Err(QuizError::NotFound(9))));
        assert!(matches!(store.delete(9), Err(QuizError::NotFound(9))));
    }
}
