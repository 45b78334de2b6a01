//! Payload bundled into the installer binary.
//!
//! Everything under `assets/` is embedded at compile time so the installer
//! is a single self-contained binary; [`crate::install`] writes these files
//! out verbatim.

/// Slash-command definitions installed into `commands/`.
pub const COMMANDS: &[(&str, &str)] = &[
    (
        "stream-start.md",
        include_str!("../assets/commands/stream-start.md"),
    ),
    (
        "stream-status.md",
        include_str!("../assets/commands/stream-status.md"),
    ),
    (
        "stream-checkpoint.md",
        include_str!("../assets/commands/stream-checkpoint.md"),
    ),
    (
        "stream-update.md",
        include_str!("../assets/commands/stream-update.md"),
    ),
    (
        "stream-end.md",
        include_str!("../assets/commands/stream-end.md"),
    ),
    (
        "stream-resume.md",
        include_str!("../assets/commands/stream-resume.md"),
    ),
    (
        "stream-list.md",
        include_str!("../assets/commands/stream-list.md"),
    ),
    (
        "stream-template.md",
        include_str!("../assets/commands/stream-template.md"),
    ),
    (
        "stream-context-check.md",
        include_str!("../assets/commands/stream-context-check.md"),
    ),
    (
        "stream-context-inject.md",
        include_str!("../assets/commands/stream-context-inject.md"),
    ),
    (
        "stream-git.md",
        include_str!("../assets/commands/stream-git.md"),
    ),
];

/// Workflow templates installed into `templates/`.
pub const TEMPLATES: &[(&str, &str)] = &[
    (
        "feature-development.yaml",
        include_str!("../assets/templates/feature-development.yaml"),
    ),
    (
        "bug-fix.yaml",
        include_str!("../assets/templates/bug-fix.yaml"),
    ),
    (
        "refactoring.yaml",
        include_str!("../assets/templates/refactoring.yaml"),
    ),
    (
        "documentation.yaml",
        include_str!("../assets/templates/documentation.yaml"),
    ),
];

/// Placeholder README installed into `templates/custom/`.
pub const CUSTOM_TEMPLATES_README: &str = include_str!("../assets/templates/custom/README.md");

/// Plugin manifest installed at the root of the layout.
pub const PLUGIN_MANIFEST: &str = include_str!("../assets/plugin.json");
