use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("no tasks for this branch ({})", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read todo file {}: {}", .0.display(), .1)]
    ReadFailure(PathBuf, #[source] std::io::Error),

    #[error("todo file {} is not valid JSON: {}", .0.display(), .1)]
    ParseFailure(PathBuf, #[source] serde_json::Error),

    #[error("failed to encode tasks: {0}")]
    EncodeFailure(#[source] serde_json::Error),

    #[error("failed to write todo file {}: {}", .0.display(), .1)]
    WriteFailure(PathBuf, #[source] std::io::Error),

    #[error("failed to create todo file {}: {}", .0.display(), .1)]
    CreateFailure(PathBuf, #[source] std::io::Error),

    #[error("todo file {} has no task id left to assign", .0.display())]
    IdOverflow(PathBuf),
}

impl TodoError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::ReadFailure(_, _) => "read_failure",
            Self::ParseFailure(_, _) => "parse_failure",
            Self::EncodeFailure(_) => "encode_failure",
            Self::WriteFailure(_, _) => "write_failure",
            Self::CreateFailure(_, _) => "create_failure",
            Self::IdOverflow(_) => "id_overflow",
        }
    }

    /// Only a failure to create the branch file aborts the process; every
    /// other error is reported and the command returns normally.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CreateFailure(_, _))
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
