//! Stream and template storage for Claude work streams.
//!
//! Work streams live in a `.claude` directory alongside the project (or in
//! the user's home directory for a global install):
//!
//! ```text
//! .claude/
//! ├── commands/            # slash-command definitions
//! ├── templates/           # workflow templates (*.yaml)
//! │   └── custom/          # user-authored templates
//! └── streams/
//!     ├── .current-stream  # name of the active stream
//!     └── <name>/
//!         └── stream.yaml  # stream state document
//! ```
//!
//! [`Store`] is a read-only view over that layout: it resolves the active
//! stream, looks up streams and templates by name, and enumerates both.
//! Absent files and directories are reported as [`None`] or an empty list;
//! only real failures (unreadable files, malformed YAML) surface as errors.
//!
//! # Example
//!
//! ```no_run
//! use workstreams_store::{Scope, Store};
//!
//! # fn main() -> workstreams_store::Result<()> {
//! let store = Store::open(Scope::Project);
//! if let Some(stream) = store.current_stream()? {
//!     println!("active stream: {:?}", stream.name());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod document;
mod root;
mod store;

pub use document::Document;
pub use root::{claude_dir, Scope};
pub use store::{Store, COMMANDS_DIR, CURRENT_STREAM_FILE, STREAMS_DIR, STREAM_FILE, TEMPLATES_DIR};

use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error while reading the store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML in a stream or template document
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
