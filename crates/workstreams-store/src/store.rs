//! Read access to streams and templates under a resolved root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::document::Document;
use crate::root::{claude_dir, Scope};
use crate::Result;

/// Subdirectory holding slash-command definitions.
pub const COMMANDS_DIR: &str = "commands";
/// Subdirectory holding workflow templates.
pub const TEMPLATES_DIR: &str = "templates";
/// Subdirectory holding stream state, one directory per stream.
pub const STREAMS_DIR: &str = "streams";
/// Pointer file naming the active stream, stored inside [`STREAMS_DIR`].
pub const CURRENT_STREAM_FILE: &str = ".current-stream";
/// State document stored inside each stream's directory.
pub const STREAM_FILE: &str = "stream.yaml";

const TEMPLATE_EXT: &str = ".yaml";

/// Read-only view over a `.claude` work-streams root.
///
/// Construction is cheap and touches nothing on disk; every accessor reads
/// the filesystem directly, so there is no cache to invalidate and external
/// writers are picked up on the next call. Missing files and directories
/// are normal outcomes (`None` or an empty list); I/O failures and
/// malformed YAML are the only errors.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open the store for the given scope, resolving the root now.
    ///
    /// The resolution is a snapshot: a later change of working directory
    /// does not move the store. Callers that need per-call resolution can
    /// construct a fresh store from [`claude_dir`](crate::claude_dir).
    pub fn open(scope: Scope) -> Self {
        Self::at(claude_dir(scope))
    }

    /// Open the store over an explicit root, bypassing scope resolution.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the layout has been installed under this root.
    ///
    /// True iff both the `commands` and `templates` entries exist. Contents
    /// are not inspected; an interrupted install that created both
    /// directories counts as initialized.
    pub fn is_initialized(&self) -> bool {
        self.root.join(COMMANDS_DIR).exists() && self.root.join(TEMPLATES_DIR).exists()
    }

    /// The active stream's document, resolved through the pointer file.
    ///
    /// Returns `None` when there is no pointer, and also when the pointer
    /// names a stream whose state file is gone (a stale pointer is not an
    /// error).
    pub fn current_stream(&self) -> Result<Option<Document>> {
        let pointer = self.streams_dir().join(CURRENT_STREAM_FILE);
        let name = match fs::read_to_string(&pointer) {
            Ok(name) => name,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                trace!("no current-stream pointer");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        self.stream(name.trim())
    }

    /// Look up one stream by name.
    pub fn stream(&self, name: &str) -> Result<Option<Document>> {
        self.read_document(&self.streams_dir().join(name).join(STREAM_FILE))
    }

    /// All streams under this root, in directory-listing order.
    ///
    /// A subdirectory without a state file is skipped rather than reported;
    /// the pointer file is never listed. A missing `streams` directory
    /// yields an empty list.
    pub fn streams(&self) -> Result<Vec<Document>> {
        let entries = match fs::read_dir(self.streams_dir()) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut streams = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name == CURRENT_STREAM_FILE {
                continue;
            }
            if let Some(stream) = self.stream(name)? {
                streams.push(stream);
            } else {
                trace!(stream = name, "directory has no state file, skipping");
            }
        }
        debug!(count = streams.len(), "enumerated streams");
        Ok(streams)
    }

    /// Look up one template by name.
    ///
    /// The document is returned exactly as parsed. Unlike
    /// [`templates`](Self::templates), no `name` field is stamped in.
    pub fn template(&self, name: &str) -> Result<Option<Document>> {
        let path = self.templates_dir().join(format!("{}{}", name, TEMPLATE_EXT));
        self.read_document(&path)
    }

    /// All templates under this root, in directory-listing order.
    ///
    /// Only `*.yaml` entries are considered, and dotfiles are ignored. Each
    /// document gets a `name` field derived from its filename, overriding
    /// any `name` the file itself carries. A missing `templates` directory
    /// yields an empty list.
    pub fn templates(&self) -> Result<Vec<Document>> {
        let entries = match fs::read_dir(self.templates_dir()) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut templates = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else { continue };
            if file_name.starts_with('.') {
                continue;
            }
            let Some(stem) = file_name.strip_suffix(TEMPLATE_EXT) else {
                trace!(file = file_name, "not a template, skipping");
                continue;
            };
            let contents = fs::read_to_string(entry.path())?;
            let mut template: Document = serde_yaml::from_str(&contents)?;
            template.set_name(stem);
            templates.push(template);
        }
        debug!(count = templates.len(), "enumerated templates");
        Ok(templates)
    }

    fn streams_dir(&self) -> PathBuf {
        self.root.join(STREAMS_DIR)
    }

    fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// Read and parse one YAML document, mapping a missing file to `None`.
    fn read_document(&self, path: &Path) -> Result<Option<Document>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_yaml::from_str(&contents)?))
    }
}
