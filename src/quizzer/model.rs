use crate::error::{QuizError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type QuestionId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    pub fn new(id: QuestionId, draft: QuestionDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            question: draft.question,
            answer: draft.answer,
            created_at: now,
            updated_at: now,
        }
    }

    /// The text shown to the user when this question is asked.
    pub fn prompt(&self) -> String {
        format!("{} ? ", self.question)
    }

    pub fn apply(&mut self, draft: QuestionDraft) {
        self.question = draft.question;
        self.answer = draft.answer;
        self.updated_at = Utc::now();
    }
}

/// An unsaved question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub answer: String,
}

impl QuestionDraft {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Trims both fields and rejects empty ones, reporting every problem at once.
    pub fn validate(self) -> Result<Self> {
        let question = self.question.trim().to_string();
        let answer = self.answer.trim().to_string();

        let mut problems = Vec::new();
        if question.is_empty() {
            problems.push("question must not be empty".to_string());
        }
        if answer.is_empty() {
            problems.push("answer must not be empty".to_string());
        }
        if !problems.is_empty() {
            return Err(QuizError::Validation(problems));
        }

        Ok(Self { question, answer })
    }
}
