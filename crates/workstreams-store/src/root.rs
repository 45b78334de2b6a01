//! Resolution of the `.claude` convention root.

use std::env;
use std::path::PathBuf;

/// Directory name shared by every work-streams installation.
const CLAUDE_DIR: &str = ".claude";

/// Where the `.claude` root lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `.claude` under the current working directory.
    Project,
    /// `.claude` under the user's home directory.
    Global,
}

/// Resolve the `.claude` root for the given scope.
///
/// Resolution happens on every call: project scope follows the process
/// working directory, global scope re-reads the environment. Nothing is
/// created or checked on disk.
///
/// When the base cannot be determined (no home variables set, or the
/// working directory is gone) the base degrades to an empty path and the
/// result is the relative `.claude`.
pub fn claude_dir(scope: Scope) -> PathBuf {
    let base = match scope {
        Scope::Project => env::current_dir().unwrap_or_default(),
        Scope::Global => home_dir(),
    };
    base.join(CLAUDE_DIR)
}

/// Read the user's home directory from the environment.
///
/// `HOME` wins over `USERPROFILE`, and a set-but-empty variable counts as
/// unset so the fallback still applies on a misconfigured shell.
fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .or_else(|| env::var_os("USERPROFILE").filter(|profile| !profile.is_empty()))
        .map(PathBuf::from)
        .unwrap_or_default()
}
