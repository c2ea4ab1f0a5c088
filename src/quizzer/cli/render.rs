//! # Rendering
//!
//! Styled terminal output through minijinja templates. Layout math (widths,
//! truncation, padding) stays in Rust because it needs Unicode-aware widths;
//! the templates only pick styles and lay out lines.
//!
//! Every `render_*` function has a `*_with_color` twin so tests can render
//! plain text regardless of the terminal running them.

use super::banner::banner_lines;
use super::styles::{self, names};
use super::templates::{
    BANNER_TEMPLATE, CONFIG_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, QUESTION_TEMPLATE,
};
use chrono::{DateTime, Utc};
use console::Term;
use minijinja::{Environment, Error, Value};
use quizzer::commands::{CmdMessage, MessageLevel};
use quizzer::config::QuizConfig;
use quizzer::error::QuizError;
use quizzer::model::Question;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const TIME_WIDTH: usize = 16;

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ListRow {
    index: String,
    question: String,
    padding: String,
    time_ago: String,
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<ListRow>,
    empty: bool,
}

#[derive(Serialize)]
struct QuestionData {
    index: String,
    question: String,
    answer: String,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct BannerData {
    lines: Vec<String>,
}

fn use_color() -> bool {
    Term::stdout().features().colors_supported()
}

fn render_with_color<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String, Error> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    env.add_template_owned("_inline".to_string(), template.to_string())?;
    env.get_template("_inline")?.render(data)
}

fn level_style(level: &MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_with_color(messages, use_color())
}

fn render_messages_with_color(messages: &[CmdMessage], use_color: bool) -> String {
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: level_style(&m.level),
            })
            .collect(),
    };
    render_with_color(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_question_list(questions: &[Question]) -> String {
    render_question_list_with_color(questions, Utc::now(), use_color())
}

fn render_question_list_with_color(
    questions: &[Question],
    now: DateTime<Utc>,
    use_color: bool,
) -> String {
    let rows = questions
        .iter()
        .map(|q| {
            let index = format!("[{}]:", q.id);
            let available = LINE_WIDTH.saturating_sub(index.width() + 1 + TIME_WIDTH);
            let question = truncate_to_width(&q.question, available);
            let padding = available.saturating_sub(question.width());
            ListRow {
                index,
                question,
                padding: " ".repeat(padding),
                time_ago: format_time_ago(q.created_at, now),
            }
        })
        .collect();
    let data = ListData {
        rows,
        empty: questions.is_empty(),
    };
    render_with_color(LIST_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        questions
            .iter()
            .map(|q| format!("[{}]: {}\n", q.id, q.question))
            .collect()
    })
}

pub fn render_question(question: &Question) -> String {
    render_question_with_color(question, use_color())
}

fn render_question_with_color(question: &Question, use_color: bool) -> String {
    let data = QuestionData {
        index: format!("[{}]:", question.id),
        question: question.question.clone(),
        answer: question.answer.clone(),
    };
    render_with_color(QUESTION_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        format!(
            "[{}]: {} => {}\n",
            question.id, question.question, question.answer
        )
    })
}

pub fn render_config(config: &QuizConfig) -> String {
    render_config_with_color(config, use_color())
}

fn render_config_with_color(config: &QuizConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: config
            .list_all()
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect(),
    };
    render_with_color(CONFIG_TEMPLATE, &data, use_color).unwrap_or_default()
}

pub fn render_banner(score: u32) -> String {
    render_banner_with_color(score, use_color())
}

fn render_banner_with_color(score: u32, use_color: bool) -> String {
    let data = BannerData {
        lines: banner_lines(score),
    };
    render_with_color(BANNER_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", data.lines.join("\n")))
}

/// Errors as the user sees them. Validation problems get one line each.
pub fn render_error(error: &QuizError) -> String {
    render_messages(&error_messages(error))
}

fn error_messages(error: &QuizError) -> Vec<CmdMessage> {
    match error {
        QuizError::Validation(problems) => {
            let mut messages = vec![CmdMessage::error("The quiz is invalid:")];
            messages.extend(problems.iter().map(|p| CmdMessage::warning(format!("  - {}", p))));
            messages
        }
        QuizError::InvalidId(_) | QuizError::NotFound(_) | QuizError::Config(_) => {
            vec![CmdMessage::error(error.to_string())]
        }
        other => vec![CmdMessage::error(format!("Error: {}", other))],
    }
}

pub fn style_prompt(prompt: &str) -> String {
    styles::apply(names::PROMPT, prompt, use_color())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
