//! On-disk layout of a backup run.
//!
//! ```text
//! <output>/<run-id>/<scope>/<project>.json
//! ```
//!
//! Nothing here talks to the network; the pipeline hands in names and
//! records and gets paths back.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::api::types::{EnvVar, Project};

/// Directory name for a run started at `now`.
///
/// ISO-8601 with the colons swapped for `-` and the fractional seconds
/// dropped, e.g. `2026-10-16T09-30-00`.
pub fn run_id(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// Make `name` safe to use as a single path component.
///
/// Returns `None` when nothing usable is left, so the caller can fall back to
/// an identifier.
pub fn sanitize(name: &str) -> Option<String> {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => None,
        _ => Some(cleaned),
    }
}

/// Hands out names that are unique within one directory.
///
/// The preferred name is used as is.  When it is taken, the fallback key is
/// appended (`<name>-<key>`), then a counter (`<name>-<key>-2`, ...) until
/// the result is free.  A name handed out once is never handed out again.
#[derive(Debug, Default)]
pub struct UniqueNames {
    used: HashSet<String>,
}

impl UniqueNames {
    pub fn claim(&mut self, preferred: &str, key: &str) -> String {
        let mut candidate = preferred.to_owned();
        if self.used.contains(&candidate) {
            candidate = format!("{preferred}-{key}");
            let mut n = 2u32;
            while self.used.contains(&candidate) {
                candidate = format!("{preferred}-{key}-{n}");
                n += 1;
            }
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Hands out one file name per project within a scope directory.
///
/// The project name is the file stem.  When a name repeats, the later project
/// gets its id appended rather than overwriting the earlier file.
#[derive(Debug, Default)]
pub struct FileNamer {
    stems: UniqueNames,
}

impl FileNamer {
    pub fn file_name(&mut self, project: &Project) -> String {
        let id = sanitize(&project.id).unwrap_or_else(|| "project".into());
        let name = sanitize(&project.name).unwrap_or_else(|| id.clone());
        format!("{}.json", self.stems.claim(&name, &id))
    }
}

/// Write `envs` to `path` as pretty-printed JSON (two-space indent).
pub fn write_env_file(path: &Path, envs: &[EnvVar]) -> Result<()> {
    let json = serde_json::to_string_pretty(envs).context("serialising environment variables")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

/// Create `dir` (and parents) and return it.
pub fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(dir)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
