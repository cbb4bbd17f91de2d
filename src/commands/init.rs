//! `env-backup init` — scaffold a starter config file.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::{
    api::{DEFAULT_BASE_URL, MAX_PAGE_SIZE},
    config::{DEFAULT_OUTPUT_DIR, DEFAULT_TOKEN_ENV},
};

/// Write a commented config template to `path`.
///
/// Refuses to touch an existing file.
pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "{} already exists; refusing to overwrite it",
            path.display()
        );
    }

    std::fs::write(path, template()).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// The starter config, with every key at its default.
pub fn template() -> String {
    format!(
        r#"# env-backup configuration.
# Values here override ~/.config/env-backup/config.toml field by field.

[api]
base_url  = "{DEFAULT_BASE_URL}"
token_env = "{DEFAULT_TOKEN_ENV}"   # environment variable holding the access token
page_size = {MAX_PAGE_SIZE}             # items per list request, 1-{MAX_PAGE_SIZE}
decrypt   = true            # request plaintext values

[output]
dir = "{DEFAULT_OUTPUT_DIR}"            # each run creates <dir>/<timestamp>/
"#
    )
}
