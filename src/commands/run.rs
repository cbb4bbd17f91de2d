//! Default backup pipeline — runs when no subcommand is given.
//!
//! # Pipeline stages (in order)
//!
//! | # | Stage     | Description                                           |
//! |---|-----------|-------------------------------------------------------|
//! | 1 | Scopes    | Personal account + every team (paginated)             |
//! | 2 | Run root  | `<output>/<run-id>/`, created only after stage 1      |
//! | 3 | Projects  | Per scope, all pages; empty scopes are skipped        |
//! | 4 | Env       | Per project, scope-qualified                          |
//! | 5 | Write     | `<scope>/<project>.json`, pretty-printed              |
//!
//! Everything is sequential.  The first error ends the run: files already
//! written stay where they are, nothing after the failure is attempted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::{
    api::Platform,
    config::Config,
    projects::list_projects,
    scopes::list_scopes,
    store::{FileNamer, UniqueNames, ensure_dir, run_id, sanitize, write_env_file},
    ui::{BackupSummary, ConsoleProgress, Progress, print_summary},
};

// ─── Entry point ──────────────────────────────────────────────────────────────

/// Execute the full backup against `api` using the output settings in `cfg`.
pub fn run(api: &impl Platform, cfg: &Config) -> Result<()> {
    println!();

    let options = RunOptions {
        output_dir: PathBuf::from(&cfg.output.dir),
        run_id: run_id(Utc::now()),
        page_size: cfg.api.page_size,
    };

    let mut progress = ConsoleProgress::new();
    let (root, summary) = run_backup(api, &options, &mut progress)?;
    drop(progress);

    print_summary(&summary, &root);
    Ok(())
}

// ─── Pipeline ─────────────────────────────────────────────────────────────────

/// Inputs of a single run that do not come from the API.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Parent of every run directory (`backups` by default).
    pub output_dir: PathBuf,
    /// Name of this run's directory, see [`run_id`].
    pub run_id: String,
    pub page_size: u32,
}

/// Back up every reachable project and return the run root plus totals.
pub fn run_backup(
    api: &impl Platform,
    options: &RunOptions,
    progress: &mut dyn Progress,
) -> Result<(PathBuf, BackupSummary)> {
    progress.begin("Listing teams");
    let scopes = list_scopes(api, options.page_size).context("listing teams")?;

    let root = ensure_dir(options.output_dir.join(&options.run_id))?;
    tracing::debug!(root = %root.display(), scopes = scopes.len(), "starting backup");

    let mut summary = BackupSummary {
        scopes: scopes.len(),
        projects_saved: 0,
        projects_skipped: 0,
        variables: 0,
    };

    let mut scope_dirs = UniqueNames::default();

    for scope in &scopes {
        progress.begin(&format!("Listing projects in {}", scope.name));
        let projects = list_projects(api, scope, options.page_size)
            .with_context(|| format!("listing projects for {scope}"))?;
        progress.scope_listed(scope, projects.len());

        if projects.is_empty() {
            continue;
        }

        // Team slugs are user-chosen, so one can collide with `personal` or
        // with another team's name.
        let key = scope.team_id().and_then(sanitize);
        let name = sanitize(&scope.name)
            .or_else(|| key.clone())
            .unwrap_or_else(|| "unnamed-scope".into());
        let dir_name = scope_dirs.claim(&name, key.as_deref().unwrap_or("team"));
        let scope_dir = ensure_dir(root.join(dir_name))?;
        let mut namer = FileNamer::default();

        for project in &projects {
            tracing::debug!(
                project = %project.id,
                owner = ?project.account_id,
                created = ?project.created_at,
                updated = ?project.updated_at,
                "backing up project"
            );
            progress.begin(&format!("Fetching {}", project.name));
            let envs = api
                .project_env(&project.id, scope.team_id())
                .with_context(|| {
                    format!(
                        "fetching environment variables for {} ({}) in {scope}",
                        project.name, project.id
                    )
                })?;

            let Some(envs) = envs else {
                tracing::debug!(project = %project.id, "no env collection in response, skipping");
                summary.projects_skipped += 1;
                progress.project_skipped(project);
                continue;
            };

            let file = scope_dir.join(namer.file_name(project));
            write_env_file(&file, &envs)?;

            summary.projects_saved += 1;
            summary.variables += envs.len();
            progress.project_saved(project, envs.len(), &file);
        }
    }

    Ok((root, summary))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
