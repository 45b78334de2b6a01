//! One-shot materialization of the work-streams directory tree.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use workstreams_store::{COMMANDS_DIR, STREAMS_DIR, TEMPLATES_DIR};

use crate::assets;

/// Directory for user-authored templates, nested under the templates dir.
const CUSTOM_DIR: &str = "custom";

/// Write the full layout under `target`, creating directories as needed.
///
/// Bundled payload files are overwritten so a rerun refreshes commands and
/// templates; everything else in the tree (streams, custom templates) is
/// left untouched.
pub fn run(target: &Path) -> Result<()> {
    let commands = target.join(COMMANDS_DIR);
    let templates = target.join(TEMPLATES_DIR);
    let custom = templates.join(CUSTOM_DIR);
    let streams = target.join(STREAMS_DIR);

    for dir in [&commands, &templates, &custom, &streams] {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    for &(file, contents) in assets::COMMANDS {
        write(&commands.join(file), contents)?;
    }
    for &(file, contents) in assets::TEMPLATES {
        write(&templates.join(file), contents)?;
    }
    write(&custom.join("README.md"), assets::CUSTOM_TEMPLATES_README)?;
    write(&target.join("plugin.json"), assets::PLUGIN_MANIFEST)?;

    info!(root = %target.display(), "work streams installed");
    Ok(())
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(file = %path.display(), "wrote payload file");
    Ok(())
}
