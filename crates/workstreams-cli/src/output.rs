//! Styled terminal output for the installer.

use std::path::Path;

use console::{style, Emoji};

static WAVE: Emoji<'_, '_> = Emoji("🌊 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");

/// One-line blurbs shown in the install summary, one per bundled command.
const COMMAND_SUMMARIES: &[(&str, &str)] = &[
    ("/stream-start", "Start a new work stream"),
    ("/stream-status", "View current stream status"),
    ("/stream-checkpoint", "Save progress checkpoint"),
    ("/stream-update", "Add quick progress note"),
    ("/stream-end", "Complete work stream"),
    ("/stream-resume", "Resume previous stream"),
    ("/stream-list", "View all streams"),
    ("/stream-template", "Manage templates"),
    ("/stream-context-check", "Monitor context usage"),
    ("/stream-context-inject", "Generate context summary"),
    ("/stream-git", "Git integration commands"),
];

/// One-line blurbs for the bundled templates.
const TEMPLATE_SUMMARIES: &[(&str, &str)] = &[
    ("feature-development", "Feature implementation workflow"),
    ("bug-fix", "Systematic bug fixing workflow"),
    ("refactoring", "Code improvement workflow"),
    ("documentation", "Documentation creation workflow"),
];

/// Greeting printed before the confirmation prompt.
pub fn banner() {
    println!();
    println!("{}{}", WAVE, style("Claude Work Streams").blue().bold());
    println!(
        "{}",
        style("Intelligent session management for Claude Code").dim()
    );
    println!();
}

/// Progress line printed while the layout is written.
pub fn installing() {
    println!("{}", style("Installing work streams...").dim());
}

/// Recap printed after a successful install.
pub fn summary(target: &Path) {
    println!(
        "{}{}",
        CHECK,
        style("Work streams installed successfully!").green()
    );
    println!();
    println!("{}", style("Installation Complete").bold());
    println!("{}", style(format!("Installed to {}", target.display())).dim());
    println!();

    println!("{}", style("Commands installed:").dim());
    for &(command, blurb) in COMMAND_SUMMARIES {
        println!("  {} - {}", style(format!("• {command}")).blue(), blurb);
    }

    println!();
    println!("{}", style("Templates installed:").dim());
    for &(template, blurb) in TEMPLATE_SUMMARIES {
        println!("  {} - {}", style(format!("• {template}")).blue(), blurb);
    }

    println!();
    println!("{}", style("Get Started:").bold());
    println!(
        "{}{}",
        style("  /stream-template list          ").dim(),
        style("# View available templates").dim()
    );
    println!(
        "{}",
        style("  /stream-start my-feature --template feature-development").dim()
    );
    println!();
}
