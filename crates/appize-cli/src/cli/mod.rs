//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "appize",
    bin_name = "appize",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Turn an app config into ready-to-build native projects",
    long_about = "Appize applies a declarative YAML configuration to platform \
                  template projects: placeholders, package namespaces, icons \
                  and splash assets.",
    after_help = "EXAMPLES:\n\
        \x20 appize apply --config app.yaml --platform android --project-root ./android --assets ./assets\n\
        \x20 appize apply --config app.yaml --override prod.yaml --platform desktop --project-root ./desktop --assets ./assets\n\
        \x20 appize completions bash > /usr/share/bash-completion/completions/appize",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a configuration to a platform template project.
    #[command(
        visible_alias = "a",
        about = "Apply a configuration to a template project",
        after_help = "EXAMPLES:\n\
            \x20 appize apply --config app.yaml --platform android --project-root ./android --assets ./assets\n\
            \x20 appize apply --config app.yaml --platform desktop --project-root ./desktop --assets ./assets --dry-run"
    )]
    Apply(ApplyArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 appize completions bash > ~/.local/share/bash-completion/completions/appize\n\
            \x20 appize completions zsh  > ~/.zfunc/_appize\n\
            \x20 appize completions fish > ~/.config/fish/completions/appize.fish"
    )]
    Completions(CompletionsArgs),
}

// ── apply ─────────────────────────────────────────────────────────────────────

/// Arguments for `appize apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Base configuration file (YAML).
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file (YAML)"
    )]
    pub config: PathBuf,

    /// Override configuration, deep-merged over the base (override wins).
    #[arg(
        long = "override",
        value_name = "FILE",
        help = "Override configuration merged over the base"
    )]
    pub override_config: Option<PathBuf>,

    /// Target platform.
    #[arg(
        short = 'p',
        long = "platform",
        value_enum,
        help = "Target platform"
    )]
    pub platform: Platform,

    /// Root of the template project to modify in place.
    #[arg(
        long = "project-root",
        value_name = "DIR",
        help = "Template project root"
    )]
    pub project_root: PathBuf,

    /// Directory that relative asset paths in the config resolve against.
    #[arg(long = "assets", value_name = "DIR", help = "Assets directory")]
    pub assets: PathBuf,

    /// Resolve and validate everything without writing any files.
    #[arg(long = "dry-run", help = "Show what would be applied without writing")]
    pub dry_run: bool,
}

/// Platforms a template pass can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Desktop,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Android => write!(f, "android"),
            Self::Desktop => write!(f, "desktop"),
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `appize completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
