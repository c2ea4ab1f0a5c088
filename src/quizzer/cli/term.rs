//! Terminal-backed prompter and reporter.
//!
//! On a real terminal, lines are read key by key through `console::Term`, with
//! an editable pre-filled text when editing and Ctrl-D on an empty line meaning
//! end of input. Piped input falls back to plain stdin reads so scripted
//! sessions work. Either way, closed input becomes `QuizError::Interrupted`.

use super::render::{render_banner, render_messages, style_prompt};
use console::{Key, Term};
use quizzer::commands::CmdMessage;
use quizzer::error::{QuizError, Result};
use quizzer::prompt::{Prompter, Reporter};
use std::io::{self, BufRead, IsTerminal, Write};

const END_OF_TRANSMISSION: char = '\u{4}';

pub struct TermPrompter {
    term: Term,
    interactive: bool,
}

/// What a single key press does to the line being typed.
#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Echo(char),
    Erase,
    Submit,
    Closed,
    Ignore,
}

fn apply_key(buffer: &mut Vec<char>, key: Key) -> KeyAction {
    match key {
        Key::Enter => KeyAction::Submit,
        Key::Backspace => match buffer.pop() {
            Some(_) => KeyAction::Erase,
            None => KeyAction::Ignore,
        },
        Key::Char(END_OF_TRANSMISSION) if buffer.is_empty() => KeyAction::Closed,
        Key::Char(c) if !c.is_control() => {
            buffer.push(c);
            KeyAction::Echo(c)
        }
        _ => KeyAction::Ignore,
    }
}

/// Trims a finished line; a stray end-of-transmission still means closed input.
fn finish_line(line: &str) -> Result<String> {
    if line.contains(END_OF_TRANSMISSION) {
        return Err(QuizError::Interrupted);
    }
    Ok(line.trim().to_string())
}

fn closed_input(err: io::Error) -> QuizError {
    match err.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => QuizError::Interrupted,
        _ => QuizError::Io(err),
    }
}

impl TermPrompter {
    pub fn new() -> Self {
        let term = Term::stdout();
        let interactive = term.is_term() && io::stdin().is_terminal();
        Self { term, interactive }
    }

    fn read_piped_line(&self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut bytes = Vec::new();
        if io::stdin().lock().read_until(b'\n', &mut bytes)? == 0 {
            // Finish the dangling prompt line.
            writeln!(stdout)?;
            return Err(QuizError::Interrupted);
        }
        finish_line(&String::from_utf8_lossy(&bytes))
    }

    fn read_term_line(&self, prompt: &str, initial: &str) -> Result<String> {
        self.term.write_str(&style_prompt(prompt))?;
        self.term.write_str(initial)?;

        let mut buffer: Vec<char> = initial.chars().collect();
        loop {
            let key = self.term.read_key().map_err(closed_input)?;
            match apply_key(&mut buffer, key) {
                KeyAction::Echo(c) => self.term.write_str(c.encode_utf8(&mut [0; 4]))?,
                KeyAction::Erase => self.term.clear_chars(1)?,
                KeyAction::Submit => {
                    self.term.write_line("")?;
                    break;
                }
                KeyAction::Closed => {
                    self.term.write_line("")?;
                    return Err(QuizError::Interrupted);
                }
                KeyAction::Ignore => {}
            }
        }
        finish_line(&buffer.into_iter().collect::<String>())
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.ask_with_initial(prompt, "")
    }

    fn ask_with_initial(&mut self, prompt: &str, initial: &str) -> Result<String> {
        if self.interactive {
            self.read_term_line(prompt, initial)
        } else {
            self.read_piped_line(prompt)
        }
    }
}

/// Prints game progress as it happens.
#[derive(Default)]
pub struct TermReporter;

impl Reporter for TermReporter {
    fn emit(&mut self, message: CmdMessage) {
        print!("{}", render_messages(&[message]));
    }

    fn emit_banner(&mut self, score: u32) {
        print!("{}", render_banner(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(initial: &str, keys: Vec<Key>) -> (Vec<char>, Vec<KeyAction>) {
        let mut buffer: Vec<char> = initial.chars().collect();
        let actions = keys.into_iter().map(|k| apply_key(&mut buffer, k)).collect();
        (buffer, actions)
    }

    #[test]
    fn ctrl_d_on_an_empty_line_closes_input() {
        let (_, actions) = type_keys("", vec![Key::Char('\u{4}')]);
        assert_eq!(actions, vec![KeyAction::Closed]);
    }

    #[test]
    fn ctrl_d_mid_line_is_not_typed() {
        let (buffer, actions) = type_keys("ab", vec![Key::Char('\u{4}'), Key::Enter]);
        assert_eq!(buffer, vec!['a', 'b']);
        assert_eq!(actions, vec![KeyAction::Ignore, KeyAction::Submit]);
    }

    #[test]
    fn typing_and_erasing_edit_the_prefilled_text() {
        let (buffer, actions) = type_keys(
            "Rom",
            vec![Key::Backspace, Key::Char('m'), Key::Char('a'), Key::Enter],
        );
        assert_eq!(buffer.into_iter().collect::<String>(), "Roma");
        assert_eq!(
            actions,
            vec![
                KeyAction::Erase,
                KeyAction::Echo('m'),
                KeyAction::Echo('a'),
                KeyAction::Submit,
            ]
        );
    }

    #[test]
    fn backspace_on_empty_line_does_nothing() {
        let (_, actions) = type_keys("", vec![Key::Backspace]);
        assert_eq!(actions, vec![KeyAction::Ignore]);
    }

    #[test]
    fn finished_lines_are_trimmed() {
        assert_eq!(finish_line("  Rome \n").unwrap(), "Rome");
    }

    #[test]
    fn end_of_transmission_in_a_line_means_closed() {
        assert!(matches!(
            finish_line("\u{4}"),
            Err(QuizError::Interrupted)
        ));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let line = String::from_utf8_lossy(&[0xff, 0xfe, b'\n']);
        assert_eq!(finish_line(&line).unwrap(), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn closed_stream_errors_map_to_interrupted() {
        let err = closed_input(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(matches!(err, QuizError::Interrupted));
        let err = closed_input(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, QuizError::Io(_)));
    }
}
