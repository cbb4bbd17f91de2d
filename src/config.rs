//! Configuration types and loading logic.
//!
//! Config comes from up to two TOML files, merged per field:
//!
//! 1. `~/.config/env-backup/config.toml` — global defaults
//! 2. `./env-backup.toml` (or `--config <path>`) — local overrides
//!
//! Both are optional.  Each file is parsed into a [`PartialConfig`] where
//! every field is an `Option`; [`PartialConfig::merge`] layers them and
//! [`PartialConfig::resolve`] fills whatever is still unset with defaults.
//!
//! # File format
//!
//! ```toml
//! [api]
//! base_url  = "https://api.vercel.com"
//! token_env = "VERCEL_TOKEN"   # env var holding the access token
//! page_size = 100              # 1..=100
//! decrypt   = true
//!
//! [output]
//! dir = "backups"
//! ```
//!
//! The token itself never lives in a config file, only the name of the
//! environment variable that holds it.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::api::{DEFAULT_BASE_URL, MAX_PAGE_SIZE};

pub const DEFAULT_TOKEN_ENV: &str = "VERCEL_TOKEN";
pub const DEFAULT_OUTPUT_DIR: &str = "backups";

// ─── Resolved config ──────────────────────────────────────────────────────────

/// Fully resolved configuration used by the commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub output: OutputConfig,
}

/// How to reach the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Name of the environment variable that holds the bearer token.
    pub token_env: String,
    /// `limit` sent with every list request.
    pub page_size: u32,
    /// Ask for plaintext values instead of encrypted blobs.
    pub decrypt: bool,
}

/// Where backups go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
    /// Parent directory for run directories.
    pub dir: String,
}

impl Config {
    /// Reject values the API would refuse anyway.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.api.page_size) {
            bail!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.api.page_size
            );
        }
        if self.api.token_env.trim().is_empty() {
            bail!("token_env must name an environment variable");
        }
        Ok(())
    }
}

// ─── Partial config (one file) ────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(default)]
    pub api: PartialApi,
    #[serde(default)]
    pub output: PartialOutput,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialApi {
    pub base_url: Option<String>,
    pub token_env: Option<String>,
    pub page_size: Option<u32>,
    pub decrypt: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialOutput {
    pub dir: Option<String>,
}

impl PartialConfig {
    /// Layer `over` on top of `self`; fields set in `over` win.
    pub fn merge(self, over: Self) -> Self {
        Self {
            api: PartialApi {
                base_url: over.api.base_url.or(self.api.base_url),
                token_env: over.api.token_env.or(self.api.token_env),
                page_size: over.api.page_size.or(self.api.page_size),
                decrypt: over.api.decrypt.or(self.api.decrypt),
            },
            output: PartialOutput {
                dir: over.output.dir.or(self.output.dir),
            },
        }
    }

    /// Fill every unset field with its default.
    pub fn resolve(self) -> Config {
        Config {
            api: ApiConfig {
                base_url: self
                    .api
                    .base_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
                token_env: self
                    .api
                    .token_env
                    .unwrap_or_else(|| DEFAULT_TOKEN_ENV.into()),
                page_size: self.api.page_size.unwrap_or(MAX_PAGE_SIZE),
                decrypt: self.api.decrypt.unwrap_or(true),
            },
            output: OutputConfig {
                dir: self.output.dir.unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into()),
            },
        }
    }
}

// ─── Loader ───────────────────────────────────────────────────────────────────

/// Parse `path` as a partial config.
///
/// Returns `Ok(None)` when the file does not exist, and an error when it
/// exists but cannot be read or is not valid TOML.
pub fn parse_partial(path: &Path) -> Result<Option<PartialConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    toml::from_str(&text)
        .map(Some)
        .with_context(|| format!("parsing {}", path.display()))
}

/// Read the access token from the environment variable named `var`.
///
/// Runs before any network call so a missing token fails fast.
pub fn resolve_token(var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(t) if !t.trim().is_empty() => Ok(t.trim().to_string()),
        Ok(_) => bail!("environment variable {var} is empty; set it to an access token"),
        Err(_) => bail!("environment variable {var} is not set; set it to an access token"),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
