//! `env-backup` — snapshot every project's environment variables to disk.
//!
//! # Overview
//!
//! Walks the personal account and every team it belongs to, lists each
//! scope's projects page by page, and writes each project's environment
//! variables to `backups/<run-id>/<scope>/<project>.json`.  The run stops at
//! the first error; whatever was already written stays on disk.
//!
//! # Usage
//!
//! ```text
//! env-backup                  # back up everything reachable with $VERCEL_TOKEN
//! env-backup scopes           # list scopes and project counts, write nothing
//! env-backup init             # scaffold an env-backup.toml in the current directory
//! env-backup --print-config   # show the merged config without running anything
//! ```
//!
//! # Module layout
//!
//! | Module                   | Responsibility                                  |
//! |--------------------------|-------------------------------------------------|
//! | [`cli`]                  | Argument types parsed by clap                   |
//! | [`config`]               | `Config` + TOML loader, token lookup            |
//! | [`api`]                  | `Platform` trait and its HTTP implementation    |
//! | [`paging`]               | Cursor pagination driver                        |
//! | [`scopes`]               | Personal account + teams                        |
//! | [`projects`]             | All projects of one scope                       |
//! | [`store`]                | Run id, file naming, JSON writing               |
//! | [`ui`]                   | Spinner, progress lines, summary                |
//! | [`logging`]              | `tracing` subscriber setup                      |
//! | [`commands::init`]       | `env-backup init` subcommand                    |
//! | [`commands::run`]        | Default backup pipeline                         |
//! | [`commands::scopes`]     | `env-backup scopes` subcommand                  |

mod api;
mod cli;
mod commands;
mod config;
mod logging;
mod paging;
mod projects;
mod scopes;
mod store;
mod ui;

use anyhow::{Context, Result};
use api::HttpPlatform;
use clap::Parser;
use cli::{Cli, Subcommand};
use config::{Config, PartialConfig, parse_partial, resolve_token};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        // ── env-backup init ───────────────────────────────────────────────────
        Some(Subcommand::Init) => {
            commands::init::run(&cli.config)?;
        },

        // ── env-backup scopes ─────────────────────────────────────────────────
        Some(Subcommand::Scopes) => {
            let cfg = load_merged_config(&cli)?;
            let api = connect(&cfg)?;
            commands::scopes::run(&api, &cfg)?;
        },

        // ── env-backup (default pipeline) ─────────────────────────────────────
        None => {
            let cfg = load_merged_config(&cli)?;

            if cli.print_config {
                println!("{cfg:#?}");
                return Ok(());
            }

            let api = connect(&cfg)?;
            commands::run::run(&api, &cfg)?;
        },
    }

    Ok(())
}

/// Load configuration from two sources, merge them, then apply CLI flags.
///
/// 1. `~/.config/env-backup/config.toml` — global defaults
/// 2. `cli.config` (default: `./env-backup.toml`) — per-directory overrides
///
/// Local values win on a per-field basis.  Either file may be absent.
fn load_merged_config(cli: &Cli) -> Result<Config> {
    let global_path = dirs_next::config_dir().map(|d| d.join("env-backup").join("config.toml"));

    let global: PartialConfig = global_path
        .as_deref()
        .and_then(|p| parse_partial(p).ok().flatten())
        .unwrap_or_default();

    let local: PartialConfig = if let Some(p) = parse_partial(&cli.config)? {
        p
    } else {
        tracing::warn!(
            "config file '{}' not found, using defaults (run 'env-backup init' to create one)",
            cli.config.display()
        );
        PartialConfig::default()
    };

    let mut cfg = global.merge(local).resolve();
    if let Some(url) = &cli.api_url {
        cfg.api.base_url.clone_from(url);
    }
    if let Some(n) = cli.page_size {
        cfg.api.page_size = n;
    }
    if let Some(dir) = &cli.output {
        cfg.output.dir.clone_from(dir);
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Read the token and build the HTTP client.  No request is sent here.
fn connect(cfg: &Config) -> Result<HttpPlatform> {
    let token = resolve_token(&cfg.api.token_env)?;
    HttpPlatform::new(&cfg.api.base_url, token, cfg.api.decrypt).context("building HTTP client")
}
