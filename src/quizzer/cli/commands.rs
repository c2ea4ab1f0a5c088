//! Context wiring, dispatch and the interactive shell.
//!
//! A one-shot invocation (`quizzer test 3`) and a line typed at the shell
//! prompt (`quiz > test 3`) go through the same `Commands` enum and the same
//! `dispatch`, so both front ends behave identically.

use super::render::{
    render_config, render_error, render_messages, render_question, render_question_list,
};
use super::setup::{get_grouped_help, Cli, Commands, ReplLine};
use super::term::{TermPrompter, TermReporter};
use clap::error::ErrorKind;
use clap::Parser;
use log::debug;
use quizzer::api::QuizApi;
use quizzer::commands::config::ConfigAction;
use quizzer::commands::{CmdMessage, CmdResult};
use quizzer::error::{QuizError, Result};
use quizzer::init::{initialize, resolve_data_dir, HOME_ENV};
use quizzer::prompt::Prompter;
use quizzer::store::fs::JsonFileStore;

pub const SHELL_PROMPT: &str = "quiz > ";

struct AppContext {
    api: QuizApi<JsonFileStore>,
    prompter: TermPrompter,
    reporter: TermReporter,
}

/// What the shell does after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run(cli: Cli) -> Result<()> {
    let env_dir = std::env::var_os(HOME_ENV).map(Into::into);
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), env_dir)?;
    debug!("data directory: {}", data_dir.display());

    let mut app = AppContext {
        api: initialize(data_dir)?,
        prompter: TermPrompter::new(),
        reporter: TermReporter,
    };

    match cli.command {
        Some(command) => dispatch(&mut app, command).map(|_| ()),
        None => run_shell(&mut app),
    }
}

fn dispatch(app: &mut AppContext, command: Commands) -> Result<Flow> {
    match command {
        Commands::Play => {
            app.api.play(&mut app.prompter, &mut app.reporter)?;
        }
        Commands::Test { id } => {
            let result = app.api.test_question(&mut app.prompter, id.as_deref())?;
            print_messages(&result);
        }
        Commands::List => {
            let result = app.api.list_questions()?;
            print!("{}", render_question_list(&result.listed_questions));
        }
        Commands::Show { id } => {
            let result = app.api.show_question(id.as_deref())?;
            for question in &result.listed_questions {
                print!("{}", render_question(question));
            }
        }
        Commands::Add { question, answer } => {
            let result = app.api.add_question(&mut app.prompter, question, answer)?;
            print_messages(&result);
        }
        Commands::Edit {
            id,
            question,
            answer,
        } => {
            let result =
                app.api
                    .edit_question(&mut app.prompter, id.as_deref(), question, answer)?;
            print_messages(&result);
        }
        Commands::Delete { id } => {
            let result = app.api.delete_question(id.as_deref())?;
            print_messages(&result);
        }
        Commands::Config { key, value } => handle_config(app, key, value)?,
        Commands::Credits => print!("{}", render_messages(&credits())),
        Commands::Help => print!("{}", get_grouped_help()),
        Commands::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_config(app: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = app.api.config(action)?;
    print_messages(&result);
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    Ok(())
}

fn credits() -> Vec<CmdMessage> {
    let mut messages = vec![CmdMessage::info("Authors:")];
    messages.extend(
        env!("CARGO_PKG_AUTHORS")
            .split(':')
            .filter(|a| !a.is_empty())
            .map(CmdMessage::success),
    );
    messages
}

fn print_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}

/// The read-dispatch loop. Errors are reported and the shell keeps going;
/// only `quit` or the end of input leave it.
fn run_shell(app: &mut AppContext) -> Result<()> {
    loop {
        let line = match app.prompter.ask(SHELL_PROMPT) {
            Ok(line) => line,
            Err(QuizError::Interrupted) => break,
            Err(e) => return Err(e),
        };
        let words = split_line(&line);
        if words.is_empty() {
            continue;
        }

        let command = match ReplLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                report_parse_error(&words[0], e);
                continue;
            }
        };

        match dispatch(app, command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            // A closed prompt mid-command also closes the shell's own input.
            Err(QuizError::Interrupted) => break,
            Err(e) => eprint!("{}", render_error(&e)),
        }
    }
    print!("{}", render_messages(&[CmdMessage::info("Bye!")]));
    Ok(())
}

fn report_parse_error(word: &str, err: clap::Error) {
    match err.kind() {
        ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument
            if !is_known_command(word) =>
        {
            eprint!(
                "{}",
                render_messages(&[
                    CmdMessage::error(format!("Unknown command: '{}'", word)),
                    CmdMessage::info("Use 'help' to see the available commands."),
                ])
            );
        }
        ErrorKind::DisplayHelp => print!("{}", err),
        _ => eprint!("{}", err),
    }
}

fn is_known_command(word: &str) -> bool {
    use clap::CommandFactory;
    ReplLine::command()
        .get_subcommands()
        .any(|sc| sc.get_name() == word || sc.get_all_aliases().any(|a| a == word))
}

/// Splits a shell line into words; single or double quotes group words.
fn split_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}
