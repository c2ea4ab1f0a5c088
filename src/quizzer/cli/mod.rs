//! # CLI Layer
//!
//! One possible front end for the quiz library, and the only place that knows
//! about the terminal: argument parsing, the interactive shell, prompting and
//! styled output.
//!
//! - `setup.rs`: clap definitions shared by one-shot runs and the shell
//! - `commands.rs`: context wiring, dispatch and the shell loop
//! - `term.rs`: terminal-backed `Prompter` and `Reporter`
//! - `render.rs`, `templates.rs`, `styles.rs`: output through minijinja templates
//! - `banner.rs`: the big score digits shown at the end of a game

mod banner;
pub mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;
mod term;

pub use render::render_error;
