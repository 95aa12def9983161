use std::io;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to invoke {command}: {source}")]
    CommandLaunch { command: String, source: io::Error },

    #[error("{command} exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("listing output contains no numbered entries")]
    NoEntries,

    #[error("last listed entry {last} is below the first index {first}")]
    EmptyRange { first: u32, last: u32 },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ExtractError {
    /// Exit code for the process once this error has aborted the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            // A failed subprocess hands its own status through
            ExtractError::CommandFailed { status, .. } => status.code().unwrap_or(-1),
            _ => 1,
        }
    }
}
