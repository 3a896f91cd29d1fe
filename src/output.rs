use clap::ValueEnum;
use colored::Colorize;

use crate::error::{Result, TodoError};
use crate::model::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `<id> <content> done:<bool>` line per task
    Plain,
    /// The task list as a JSON array
    Json,
}

pub fn print_tasks(tasks: &[Task], format: Format) -> Result<()> {
    match format {
        Format::Plain => {
            for task in tasks {
                println!("{task}");
            }
        }
        Format::Json => {
            println!(
                "{}",
                serde_json::to_string(tasks).map_err(TodoError::EncodeFailure)?
            );
        }
    }
    Ok(())
}

/// Confirmation for a successful mutation, on stderr.
pub fn status(message: &str) {
    eprintln!("{}", message.green());
}

/// Report a command failure on stderr. In JSON mode this is an
/// `{"error": <code>, "message": <text>}` object; otherwise a missing branch
/// file is informational rather than an error.
pub fn report(err: &TodoError, format: Format) {
    match format {
        Format::Json => eprintln!("{}", error_json(err)),
        Format::Plain => match err {
            TodoError::NotFound(_) => eprintln!("{}", err.to_string().yellow()),
            _ => eprintln!("{} {err}", "error:".red().bold()),
        },
    }
}

fn error_json(err: &TodoError) -> serde_json::Value {
    serde_json::json!({
        "error": err.code(),
        "message": err.to_string()
    })
}
