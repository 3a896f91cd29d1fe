use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::args;
use crate::build_info;
use crate::commands;
use crate::config::{self, Config};
use crate::error::Result;
use crate::output::{self, Format};

#[derive(Parser, Debug)]
#[command(
    name = "git-todo",
    version = build_info::VERSION,
    about = "Per-branch todo lists for git repositories",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Print usage lines
    Help,
    /// List all tasks on the current branch
    List {
        /// Output format for tasks and errors
        #[arg(long, value_enum, default_value = "plain")]
        format: Format,
    },
    /// Add a task: `add <content>`
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        content: Vec<String>,
    },
    /// Mark a task as done: `done [id]`
    Done {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        id: Vec<String>,
    },
    /// Delete a task and renumber the rest: `delete [id]`
    Delete {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        id: Vec<String>,
    },
}

fn init_logging() {
    let filter = config::log_filter()
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

impl Commands {
    /// Format used for output and error reports; only `list` takes `--format`.
    fn format(&self) -> Format {
        match self {
            Self::List { format } => *format,
            _ => Format::Plain,
        }
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Help => {
            commands::help::run();
            Ok(())
        }
        Commands::List { format } => {
            let config = Config::resolve(&working_dir());
            commands::list::run(&config.store(), format)
        }
        Commands::Add { content } => {
            if content.is_empty() {
                eprintln!("please provide the task content");
                return Ok(());
            }
            let Some(content) = args::parse_content(&content.join(" ")) else {
                eprintln!("please wrap the task content in <>, e.g. git todo add \"<buy milk>\"");
                return Ok(());
            };
            let config = Config::resolve(&working_dir());
            commands::add::run(&config.store(), content).map(|_| ())
        }
        Commands::Done { id } => {
            let id = args::id_or_zero(id.first().map(String::as_str));
            let config = Config::resolve(&working_dir());
            commands::done::run(&config.store(), id)
        }
        Commands::Delete { id } => {
            let id = args::id_or_zero(id.first().map(String::as_str));
            let config = Config::resolve(&working_dir());
            commands::delete::run(&config.store(), id)
        }
    }
}

/// Parse the process arguments, run one command, and return the exit code.
pub fn run_cli() -> i32 {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
            } else {
                tracing::debug!(error = %err, "unrecognized command line");
                commands::help::hint();
            }
            return 0;
        }
    };

    let Some(command) = cli.command else {
        commands::help::hint();
        return 0;
    };

    let format = command.format();
    match dispatch(command) {
        Ok(()) => 0,
        Err(err) => {
            output::report(&err, format);
            if err.is_fatal() { 1 } else { 0 }
        }
    }
}
