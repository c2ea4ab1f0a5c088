//! The interactive seams of the library.
//!
//! Commands that need the user (adding, editing, testing and playing) never
//! touch the terminal directly. They ask a [`Prompter`] for a line of input and
//! hand progress to a [`Reporter`]; the CLI supplies terminal-backed versions,
//! tests supply the scripted fixtures below.

use crate::commands::CmdMessage;
use crate::error::Result;

/// Blocks until the user has answered `prompt`.
///
/// Implementations return the line with surrounding whitespace trimmed, and
/// `QuizError::Interrupted` when input is closed.
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Like [`Prompter::ask`], with `initial` pre-filled for the user to edit.
    fn ask_with_initial(&mut self, prompt: &str, initial: &str) -> Result<String> {
        let _ = initial;
        self.ask(prompt)
    }
}

/// One-way output sink used while a game is in progress.
pub trait Reporter {
    fn emit(&mut self, message: CmdMessage);

    /// Big rendering of the final score.
    fn emit_banner(&mut self, score: u32);
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::QuizError;
    use std::collections::VecDeque;

    /// Answers prompts from a script.
    ///
    /// Prompts starting with a registered question text get that question's
    /// answer; anything else consumes the next queued line. When both are
    /// exhausted the prompter reports closed input.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        queued: VecDeque<String>,
        by_question: Vec<(String, String)>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new<I, T>(lines: I) -> Self
        where
            I: IntoIterator<Item = T>,
            T: Into<String>,
        {
            Self {
                queued: lines.into_iter().map(Into::into).collect(),
                ..Self::default()
            }
        }

        pub fn answering(mut self, question: &str, answer: &str) -> Self {
            self.by_question
                .push((question.to_string(), answer.to_string()));
            self
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, prompt: &str) -> Result<String> {
            self.asked.push(prompt.to_string());
            if let Some((_, answer)) = self
                .by_question
                .iter()
                .find(|(question, _)| prompt.starts_with(question.as_str()))
            {
                return Ok(answer.trim().to_string());
            }
            self.queued
                .pop_front()
                .map(|line| line.trim().to_string())
                .ok_or(QuizError::Interrupted)
        }
    }

    #[derive(Default)]
    pub struct RecordingReporter {
        pub messages: Vec<CmdMessage>,
        pub banners: Vec<u32>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn contents(&self) -> Vec<&str> {
            self.messages.iter().map(|m| m.content.as_str()).collect()
        }
    }

    impl Reporter for RecordingReporter {
        fn emit(&mut self, message: CmdMessage) {
            self.messages.push(message);
        }

        fn emit_banner(&mut self, score: u32) {
            self.banners.push(score);
        }
    }
}
