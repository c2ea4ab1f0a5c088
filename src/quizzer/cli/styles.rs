//! Named styles for terminal output.
//!
//! Templates only ever refer to semantic names (`index`, `time`, `success`...)
//! through the `style` filter; this module is where those names get their
//! colors. Registered once through `once_cell::sync::Lazy`.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
    pub const INDEX: &str = "index";
    pub const QUESTION: &str = "question";
    pub const ANSWER: &str = "answer";
    pub const TIME: &str = "time";
    pub const MUTED: &str = "muted";
    pub const CONFIG_KEY: &str = "config_key";
    pub const BANNER: &str = "banner";
    pub const PROMPT: &str = "prompt";
}

pub static QUIZ_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::INFO, Style::new()),
        (names::SUCCESS, Style::new().green().bold()),
        (names::WARNING, Style::new().yellow()),
        (names::ERROR, Style::new().red().bold()),
        (names::INDEX, Style::new().yellow()),
        (names::QUESTION, Style::new().bold()),
        (names::ANSWER, Style::new().cyan()),
        (names::TIME, Style::new().color256(247).italic()),
        (names::MUTED, Style::new().dim()),
        (names::CONFIG_KEY, Style::new().cyan()),
        (names::BANNER, Style::new().magenta().bold()),
        (names::PROMPT, Style::new().blue().bold()),
    ])
});

/// Applies the named style; unknown names leave the text untouched.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match QUIZ_THEME.get(name) {
        Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
        _ => text.to_string(),
    }
}
