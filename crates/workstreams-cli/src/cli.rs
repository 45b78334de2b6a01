//! Command-line interface definition for `stream-init`.

use std::path::Path;

use clap::{ArgAction, ColorChoice, Parser};
use console::style;
use tracing::debug;
use workstreams_store::{claude_dir, Scope};

use crate::error::CliError;
use crate::{install, output, prompts};

/// Install Claude work streams into the current project or the user's
/// home directory.
#[derive(Debug, Parser)]
#[command(name = "stream-init", author, version, about)]
pub struct Cli {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Install into ~/.claude instead of ./.claude
    #[arg(short, long)]
    pub global: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Control colored output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Run the installer end to end.
    pub fn run(&self) -> Result<(), CliError> {
        self.apply_color();

        let scope = if self.global {
            Scope::Global
        } else {
            Scope::Project
        };
        let target = claude_dir(scope);
        debug!(target_dir = %target.display(), "resolved install root");

        if !self.quiet {
            output::banner();
        }

        if !self.yes && !self.confirm(&target)? {
            println!("{}", style("Installation cancelled.").yellow());
            return Ok(());
        }

        if !self.quiet {
            output::installing();
        }

        install::run(&target).map_err(CliError::Install)?;

        if !self.quiet {
            output::summary(&target);
        }

        Ok(())
    }

    fn confirm(&self, target: &Path) -> Result<bool, CliError> {
        let answer =
            prompts::Confirm::new(format!("Install work streams to {}?", target.display()))
                .default(true)
                .interact()?;
        Ok(answer)
    }

    fn apply_color(&self) {
        match self.color {
            ColorChoice::Always => console::set_colors_enabled(true),
            ColorChoice::Never => console::set_colors_enabled(false),
            ColorChoice::Auto => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["stream-init", "-q", "-v"]).is_err());
    }

    #[test]
    fn defaults_are_interactive_and_local() {
        let cli = Cli::try_parse_from(["stream-init"]).unwrap();
        assert!(!cli.yes);
        assert!(!cli.global);
        assert_eq!(cli.verbose, 0);
    }
}
