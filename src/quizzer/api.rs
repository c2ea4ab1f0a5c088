//! # API Facade
//!
//! The single entry point for quiz operations, whatever the front end. It
//! dispatches to `commands/*.rs`, turns raw user-supplied ids into question
//! ids, and hands back `CmdResult`s. It never prints.
//!
//! `QuizApi<S: QuestionStore>` is generic over the storage backend:
//! `QuizApi<JsonFileStore>` in the binary, `QuizApi<InMemoryStore>` in tests.
//!
//! Id validation lives here, so every command receives a well-formed id and a
//! malformed one fails with `InvalidId` before any store access or prompt.

use crate::commands::{self, config::ConfigAction, play::PlayOptions, CmdResult};
use crate::config::QuizConfig;
use crate::error::Result;
use crate::prompt::{Prompter, Reporter};
use crate::store::QuestionStore;
use std::path::{Path, PathBuf};

pub struct QuizApi<S: QuestionStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: QuestionStore> QuizApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn list_questions(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_question(&self, raw_id: Option<&str>) -> Result<CmdResult> {
        let id = commands::helpers::parse_id(raw_id)?;
        commands::show::run(&self.store, id)
    }

    pub fn add_question<P: Prompter>(
        &mut self,
        prompter: &mut P,
        question: Option<String>,
        answer: Option<String>,
    ) -> Result<CmdResult> {
        commands::create::ask_and_run(&mut self.store, prompter, question, answer)
    }

    pub fn edit_question<P: Prompter>(
        &mut self,
        prompter: &mut P,
        raw_id: Option<&str>,
        question: Option<String>,
        answer: Option<String>,
    ) -> Result<CmdResult> {
        let id = commands::helpers::parse_id(raw_id)?;
        commands::update::ask_and_run(&mut self.store, prompter, id, question, answer)
    }

    pub fn delete_question(&mut self, raw_id: Option<&str>) -> Result<CmdResult> {
        let id = commands::helpers::parse_id(raw_id)?;
        commands::delete::run(&mut self.store, id)
    }

    pub fn test_question<P: Prompter>(
        &self,
        prompter: &mut P,
        raw_id: Option<&str>,
    ) -> Result<CmdResult> {
        let id = commands::helpers::parse_id(raw_id)?;
        commands::test::run(&self.store, prompter, id)
    }

    /// Plays every question once. Config is read per game, so changes made
    /// from the shell apply to the next one.
    pub fn play<P: Prompter, W: Reporter>(
        &self,
        prompter: &mut P,
        reporter: &mut W,
    ) -> Result<CmdResult> {
        let config = QuizConfig::load(&self.data_dir)?;
        let options = PlayOptions {
            reveal_answer: config.reveal_answer,
        };
        commands::play::run(&self.store, prompter, reporter, options)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}
