//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stager",
    bin_name = "stager",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Staged builders with aggregated validation",
    long_about = "Stager assembles immutable records field-by-field and \
                  validates every required field in one pass before \
                  construction.",
    after_help = "EXAMPLES:\n\
        \x20 stager person --first-name James --last-name Melvin\n\
        \x20 stager person --first-name James --last-name Melvin --birth-date 1987-04-12\n\
        \x20 stager fields person\n\
        \x20 stager completions bash > /usr/share/bash-completion/completions/stager",
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
    /// Build a person record from staged flags.
    #[command(
        visible_alias = "p",
        about = "Build a person record",
        after_help = "EXAMPLES:\n\
            \x20 stager person --first-name James --last-name Melvin\n\
            \x20 stager person --first-name James          # fails: last_name missing\n\
            \x20 stager person                             # fails: both names missing"
    )]
    Person(PersonArgs),

    /// Build a user registration record from staged flags.
    #[command(
        visible_alias = "u",
        about = "Build a user registration record",
        after_help = "EXAMPLES:\n\
            \x20 stager user --user-name jmelvin --password hunter2\n\
            \x20 stager user --user-name jmelvin --password hunter2 --date-of-birth 1990-01-31"
    )]
    User(UserArgs),

    /// Show an entity's field declarations.
    #[command(
        visible_alias = "ls",
        about = "List an entity's field declarations",
        after_help = "EXAMPLES:\n\
            \x20 stager fields person\n\
            \x20 stager fields user --format json"
    )]
    Fields(FieldsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stager completions bash > ~/.local/share/bash-completion/completions/stager\n\
            \x20 stager completions zsh  > ~/.zfunc/_stager\n\
            \x20 stager completions fish > ~/.config/fish/completions/stager.fish"
    )]
    Completions(CompletionsArgs),
}

// ── person ────────────────────────────────────────────────────────────────────

/// Arguments for `stager person`.
///
/// Every field flag is optional on purpose: an omitted flag means the
/// matching setter is never called, which is how missing required fields
/// are demonstrated.
#[derive(Debug, Args)]
pub struct PersonArgs {
    /// First name (required by the entity, not by clap).
    #[arg(long = "first-name", value_name = "NAME", help = "First name")]
    pub first_name: Option<String>,

    /// Last name (required by the entity, not by clap).
    #[arg(long = "last-name", value_name = "NAME", help = "Last name")]
    pub last_name: Option<String>,

    /// Birth date (optional field).
    #[arg(
        long = "birth-date",
        value_name = "DATE",
        help = "Birth date (default format: YYYY-MM-DD)"
    )]
    pub birth_date: Option<String>,
}

// ── user ──────────────────────────────────────────────────────────────────────

/// Arguments for `stager user`.
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User name (required by the entity, not by clap).
    #[arg(long = "user-name", value_name = "NAME", help = "User name")]
    pub user_name: Option<String>,

    /// Password (required by the entity, not by clap).
    #[arg(long = "password", value_name = "SECRET", help = "Password")]
    pub password: Option<String>,

    /// Date of birth (optional field).
    #[arg(
        long = "date-of-birth",
        value_name = "DATE",
        help = "Date of birth (default format: YYYY-MM-DD)"
    )]
    pub date_of_birth: Option<String>,
}

// ── fields ────────────────────────────────────────────────────────────────────

/// Arguments for `stager fields`.
#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Which entity's declarations to show.
    #[arg(value_enum, help = "Entity to describe")]
    pub entity: EntityKind,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: FieldsFormat,
}

/// Entities known to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EntityKind {
    Person,
    User,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Person => write!(f, "person"),
            Self::User => write!(f, "user"),
        }
    }
}

/// Output format for the `fields` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldsFormat {
    /// Human-readable table.
    Table,
    /// One field name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stager completions`.
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
