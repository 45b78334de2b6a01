//! Error types for the installer binary.

use thiserror::Error;

use crate::prompts::PromptError;
use crate::Exit;

/// Errors that can occur while running the installer
#[derive(Debug, Error)]
pub enum CliError {
    /// Confirmation prompt could not be read
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Layout could not be written to disk; the message carries the full
    /// cause chain
    #[error("installation error: {0:#}")]
    Install(#[source] anyhow::Error),
}

impl CliError {
    /// Exit code reported to the shell for this error.
    pub fn exit_code(&self) -> Exit {
        match self {
            Self::Prompt(_) => Exit::GeneralError,
            Self::Install(_) => Exit::IoError,
        }
    }
}
