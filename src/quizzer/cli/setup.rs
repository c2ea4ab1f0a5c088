use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub const ABOUT: &str = "Interactive command-line quiz trainer";

#[derive(Parser, Debug)]
#[command(
    name = "quizzer",
    bin_name = "quizzer",
    version,
    disable_help_subcommand = true
)]
#[command(about = ABOUT, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding quizzes.json and config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// One line typed at the `quiz > ` prompt. Same commands, no binary name.
#[derive(Parser, Debug)]
#[command(
    name = "quiz",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: Commands,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Quiz,
    Catalogue,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Quiz => "Quiz Commands:",
            CommandGroup::Catalogue => "Catalogue Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "play" | "test" => Some(CommandGroup::Quiz),
            "list" | "show" | "add" | "edit" | "delete" => Some(CommandGroup::Catalogue),
            "config" | "credits" | "help" | "quit" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Quiz,
            CommandGroup::Catalogue,
            CommandGroup::Misc,
        ]
    }
}

/// The grouped command overview printed by `help`.
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("quizzer {version}\n"));
    output.push_str(ABOUT);
    output.push('\n');
    output.push('\n');
    output.push_str("Usage: quizzer [OPTIONS] [COMMAND]\n");
    output.push_str("Without a command, starts the interactive shell.\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let usage = match sc.get_name() {
                    name @ ("show" | "edit" | "delete" | "test") => format!("{name} <id>"),
                    name => name.to_string(),
                };
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<14} {}\n", usage, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data-dir <DIR>  Directory holding quizzes.json and config.json\n");
    output.push_str("  -v, --verbose         Verbose output\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play all quizzes in random order until the first miss
    #[command(alias = "p", display_order = 1)]
    Play,

    /// Answer a single quiz
    #[command(alias = "t", display_order = 2)]
    Test {
        /// Quiz id
        id: Option<String>,
    },

    /// List all quizzes
    #[command(alias = "ls", display_order = 10)]
    List,

    /// Show a quiz and its answer
    #[command(alias = "s", display_order = 11)]
    Show {
        /// Quiz id
        id: Option<String>,
    },

    /// Add a quiz (prompts for what is not given)
    #[command(alias = "a", display_order = 12)]
    Add {
        /// Question text
        #[arg(long, short)]
        question: Option<String>,

        /// Expected answer
        #[arg(long, short)]
        answer: Option<String>,
    },

    /// Change a quiz (prompts pre-filled with the current text)
    #[command(alias = "e", display_order = 13)]
    Edit {
        /// Quiz id
        id: Option<String>,

        /// New question text
        #[arg(long, short)]
        question: Option<String>,

        /// New expected answer
        #[arg(long, short)]
        answer: Option<String>,
    },

    /// Delete a quiz
    #[command(alias = "rm", display_order = 14)]
    Delete {
        /// Quiz id
        id: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (reveal-answer, seed-examples)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show who wrote this
    #[command(display_order = 21)]
    Credits,

    /// Print this overview
    #[command(alias = "h", display_order = 22)]
    Help,

    /// Leave the interactive shell
    #[command(alias = "q", alias = "exit", display_order = 23)]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repl(line: &str) -> Result<Commands, clap::Error> {
        ReplLine::try_parse_from(line.split_whitespace()).map(|l| l.command)
    }

    #[test]
    fn one_shot_parses_global_flags() {
        let cli = Cli::try_parse_from(["quizzer", "--data-dir", "/tmp/q", "-v", "list"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/q")));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn no_command_means_shell() {
        let cli = Cli::try_parse_from(["quizzer"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn repl_lines_share_the_command_set() {
        assert!(matches!(repl("p"), Ok(Commands::Play)));
        assert!(matches!(repl("q"), Ok(Commands::Quit)));
        assert!(matches!(repl("h"), Ok(Commands::Help)));
        match repl("test 3") {
            Ok(Commands::Test { id }) => assert_eq!(id.as_deref(), Some("3")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn id_stays_raw_so_the_api_can_reject_it() {
        match repl("show abc") {
            Ok(Commands::Show { id }) => assert_eq!(id.as_deref(), Some("abc")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(repl("delete"), Ok(Commands::Delete { id: None })));
    }

    #[test]
    fn unknown_word_is_a_parse_error() {
        assert!(repl("dance").is_err());
    }

    #[test]
    fn grouped_help_lists_every_visible_command() {
        let help = get_grouped_help();
        for name in [
            "play",
            "test <id>",
            "list",
            "show <id>",
            "add",
            "edit <id>",
            "delete <id>",
            "config",
            "credits",
            "quit",
        ] {
            assert!(help.contains(name), "help is missing {name}");
        }
        assert!(help.contains("Quiz Commands:"));
    }
}
