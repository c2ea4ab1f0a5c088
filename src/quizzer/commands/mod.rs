use crate::config::QuizConfig;
use crate::model::Question;
use crate::session::SessionStatus;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod play;
pub mod show;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Result of testing a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub score: u32,
    pub status: SessionStatus,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_questions: Vec<Question>,
    pub verdict: Option<Verdict>,
    pub outcome: Option<PlayOutcome>,
    pub config: Option<QuizConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_questions(mut self, questions: Vec<Question>) -> Self {
        self.listed_questions = questions;
        self
    }

    pub fn with_verdict(mut self, verdict: Verdict) -> Self {
        self.verdict = Some(verdict);
        self
    }

    pub fn with_outcome(mut self, outcome: PlayOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = Some(config);
        self
    }
}
