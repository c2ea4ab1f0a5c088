//! # Play Session
//!
//! One run of "play all": the pool of question ids is snapshotted from the store
//! when the session starts, then questions are drawn one at a time until the
//! user misses one or the pool runs dry.
//!
//! The session never talks to the user itself. It is driven from outside in two
//! halves per question, which is where the game suspends waiting for input:
//!
//! 1. [`PlaySession::next_question`] draws an id and resolves it through the store.
//! 2. [`PlaySession::submit`] resumes with the user's raw answer.
//!
//! `commands::play` is the loop that connects these halves to a prompter.

use crate::error::{QuizError, Result};
use crate::model::Question;
use crate::normalize::answers_match;
use crate::sampler::Sampler;
use crate::store::QuestionStore;
use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    /// Every question answered correctly; also the state of a session over an
    /// empty store, where there is nothing to get wrong.
    WonAllCorrect,
    LostOnWrongAnswer,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }
}

/// What happened to one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub score: u32,
    pub status: SessionStatus,
    pub expected: String,
}

pub struct PlaySession<R = ThreadRng> {
    sampler: Sampler<R>,
    score: u32,
    status: SessionStatus,
    pending: Option<Question>,
}

impl PlaySession<ThreadRng> {
    pub fn start<S: QuestionStore>(store: &S) -> Result<Self> {
        Self::start_with_rng(store, rand::rng())
    }
}

impl<R: Rng> PlaySession<R> {
    pub fn start_with_rng<S: QuestionStore>(store: &S, rng: R) -> Result<Self> {
        let ids: Vec<_> = store.list_all()?.into_iter().map(|q| q.id).collect();
        let status = if ids.is_empty() {
            SessionStatus::WonAllCorrect
        } else {
            SessionStatus::InProgress
        };
        debug!("play session started with {} questions", ids.len());

        Ok(Self {
            sampler: Sampler::with_rng(ids, rng),
            score: 0,
            status,
            pending: None,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn remaining(&self) -> usize {
        self.sampler.remaining()
    }

    /// The question waiting for an answer, drawing a new one if none is pending.
    ///
    /// Returns `None` once the session is over. A drawn id the store can no
    /// longer resolve is fatal to the session: `MissingQuestion`.
    pub fn next_question<S: QuestionStore>(&mut self, store: &S) -> Result<Option<&Question>> {
        if self.status.is_terminal() {
            return Ok(None);
        }
        if self.pending.is_none() {
            let id = self.sampler.draw_one()?;
            debug!("drew quiz {}, {} left", id, self.sampler.remaining());
            let question = store
                .find_by_id(id)?
                .ok_or(QuizError::MissingQuestion(id))?;
            self.pending = Some(question);
        }
        Ok(self.pending.as_ref())
    }

    /// Resume the session with the user's answer to the pending question.
    pub fn submit(&mut self, answer: &str) -> Result<AnswerOutcome> {
        let question = self.pending.take().ok_or(QuizError::NoPendingQuestion)?;
        let correct = answers_match(&question.answer, answer);

        if correct {
            self.score += 1;
            if self.sampler.is_empty() {
                self.status = SessionStatus::WonAllCorrect;
            }
        } else {
            self.status = SessionStatus::LostOnWrongAnswer;
        }
        debug!(
            "quiz {} answered {}, score {}",
            question.id,
            if correct { "correctly" } else { "wrongly" },
            self.score
        );

        Ok(AnswerOutcome {
            correct,
            score: self.score,
            status: self.status,
            expected: question.answer,
        })
    }
}
