//! stream-init - Claude work streams installer
//!
//! Main entry point for the `stream-init` binary.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

mod assets;
mod cli;
mod error;
mod install;
mod output;
mod prompts;

use cli::Cli;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    IoError = 2,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    init_tracing(&cli);

    match cli.run() {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            error!("{e}");
            e.exit_code().into()
        }
    }
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Diagnostics go to stderr so stdout stays reserved for the installer's
    // own output.
    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(cli.verbose >= 2)
            .with_writer(std::io::stderr),
    );

    subscriber.init();
}
