//! Command-line interface definition.
//!
//! All argument parsing lives here so the rest of the codebase can stay
//! agnostic to `clap`.  The `Cli` struct is parsed once in `main`, which
//! folds the override flags into the loaded [`crate::config::Config`].

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI arguments, shared across every subcommand.
#[derive(Parser, Debug)]
#[command(
    name    = "env-backup",
    about   = "Back up project environment variables for your account and all of its teams",
    version,
    // Show a compact two-column help layout.
    help_template = "\
{before-help}{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct Cli {
    /// Path to the configuration file.
    ///
    /// Defaults to `env-backup.toml` in the current working directory.  The
    /// file is optional; values in it override the global config at
    /// `~/.config/env-backup/config.toml`.
    #[arg(short, long, default_value = "env-backup.toml")]
    pub config: PathBuf,

    /// Subcommand to run.  Omit to run the full backup.
    #[command(subcommand)]
    pub command: Option<Subcommand>,

    /// Print the merged configuration and exit without running anything.
    #[arg(long)]
    pub print_config: bool,

    /// Directory that receives the timestamped run directories.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<String>,

    /// Base URL of the REST API.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Items requested per page when listing teams and projects (1-100).
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// Log requests and pagination to stderr.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Explicit subcommands.  Running `env-backup` with no subcommand performs a
/// backup.
#[derive(clap::Subcommand, Debug, PartialEq, Eq)]
pub enum Subcommand {
    /// Scaffold an `env-backup.toml` in the current directory.
    ///
    /// Exits with an error if the file already exists.
    Init,

    /// List every scope (personal account and teams) with its project count.
    ///
    /// Nothing is written to disk.
    Scopes,
}
