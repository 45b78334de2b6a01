//! Interactive prompts.

use std::io::{self, Write};

use console::style;
use thiserror::Error;

/// Errors raised while reading prompt input
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A yes/no question with a default answer.
pub struct Confirm {
    message: String,
    default: bool,
}

impl Confirm {
    /// Create a confirmation prompt with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: true,
        }
    }

    /// Set the answer chosen by a bare Enter (and by end of input).
    pub fn default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Ask on stdout and read the answer from stdin.
    ///
    /// Empty input selects the default, a `y`/`n` prefix selects that
    /// answer, anything else asks again. End of input counts as an empty
    /// line so piped invocations terminate.
    pub fn interact(&self) -> Result<bool, PromptError> {
        let hint = if self.default { "[Y/n]" } else { "[y/N]" };
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!(
                "{} {} {} ",
                style("?").cyan().bold(),
                self.message,
                style(hint).dim()
            );
            io::stdout().flush()?;

            line.clear();
            if stdin.read_line(&mut line)? == 0 {
                println!();
                return Ok(self.default);
            }
            if let Some(answer) = parse_answer(&line, self.default) {
                return Ok(answer);
            }
        }
    }
}

fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => Some(default),
        answer if answer.starts_with('y') => Some(true),
        answer if answer.starts_with('n') => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_selects_the_default() {
        assert_eq!(parse_answer("\n", true), Some(true));
        assert_eq!(parse_answer("  \n", false), Some(false));
    }

    #[test]
    fn yes_and_no_prefixes_are_recognized() {
        assert_eq!(parse_answer("y\n", false), Some(true));
        assert_eq!(parse_answer("Yes\n", false), Some(true));
        assert_eq!(parse_answer("n\n", true), Some(false));
        assert_eq!(parse_answer("NO\n", true), Some(false));
    }

    #[test]
    fn unrecognized_input_is_rejected() {
        assert_eq!(parse_answer("maybe\n", true), None);
        assert_eq!(parse_answer("1\n", true), None);
    }
}
