//! # Quizzer Architecture
//!
//! Quizzer is a **UI-agnostic quiz library** with a command-line client. The
//! binary in `main.rs` and `cli/` is one front end; everything in this crate
//! takes Rust values and returns Rust values.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, interactive shell, templated output        │
//! │  - Terminal-backed Prompter and Reporter                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Validates raw ids before anything else happens           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / show / add / edit / delete / test / play / config │
//! │  - Returns CmdResult; talks to the user only via prompt.rs  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (normalize.rs, sampler.rs, session.rs)                │
//! │  - Answer normalization, sampling without replacement       │
//! │  - The play session state machine                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - QuestionStore trait                                      │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. The two places that need a human, asking for a line and
//! reporting game progress, are the [`prompt::Prompter`] and
//! [`prompt::Reporter`] traits.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests beside the code, over `InMemoryStore`
//!    with the fixtures in `store::memory::fixtures` and `prompt::fixtures`.
//!    Randomness is pinned with a seeded `StdRng`.
//! 2. **API**: dispatch and id validation.
//! 3. **CLI**: argument parsing and rendering unit tests, plus end-to-end runs
//!    of the binary in `tests/`.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod normalize;
pub mod prompt;
pub mod sampler;
pub mod session;
pub mod store;
