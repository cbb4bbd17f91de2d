//! Terminal UI — spinners, progress lines, and the closing summary.
//!
//! # Design goals
//!
//! - **Clean by default.** While a request is in flight the user sees a spinner and a short label;
//!   once it returns, the spinner is replaced by a single static line.
//! - **Pipeline stays terminal-agnostic.** The backup pipeline reports through the [`Progress`]
//!   trait.  [`ConsoleProgress`] renders to stdout; tests plug in a recorder instead.
//!
//! Progress lines are for humans and are not a stable format.

use std::{path::Path, time::Duration};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{api::types::Project, scopes::Scope};

// ─── Icons ───────────────────────────────────────────────────────────────────

/// Braille spinner frames — same style as indicatif's default.
static SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Green ✓  — printed when a project file is written.
fn icon_ok() -> console::StyledObject<&'static str> {
    style("✓").green().bold()
}
/// Dim ·    — printed for scopes and projects with nothing to write.
fn icon_skip() -> console::StyledObject<&'static str> {
    style("·").dim()
}
/// Cyan ✓   — printed next to the final success summary.
fn icon_done() -> console::StyledObject<&'static str> {
    style("✓").cyan().bold()
}

// ─── Progress reporting ───────────────────────────────────────────────────────

/// Sink for the pipeline's progress events.
pub trait Progress {
    /// A network call is about to start.
    fn begin(&mut self, _label: &str) {}

    /// Projects for `scope` have been listed.
    fn scope_listed(&mut self, scope: &Scope, projects: usize);

    /// A project's variables were written to `file`.
    fn project_saved(&mut self, project: &Project, variables: usize, file: &Path);

    /// A project's env response had no variable collection.
    fn project_skipped(&mut self, _project: &Project) {}
}

/// Renders progress to stdout with a spinner during requests.
#[derive(Default)]
pub struct ConsoleProgress {
    spinner: Option<ProgressBar>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, label: &str) {
        self.clear();
        self.spinner = Some(make_spinner(label));
    }

    fn scope_listed(&mut self, scope: &Scope, projects: usize) {
        self.clear();
        let count = format!("{projects} project{}", plural(projects));
        if projects == 0 {
            println!("  {}  {}  {}", icon_skip(), style(scope).dim(), style(count).dim());
        } else {
            println!("  {}  {}", style(scope).bold(), style(count).cyan());
        }
    }

    fn project_saved(&mut self, project: &Project, variables: usize, file: &Path) {
        self.clear();
        println!(
            "    {}  {}  {} variable{}  {}",
            icon_ok(),
            project.name,
            variables,
            plural(variables),
            style(file.display()).dim()
        );
    }

    fn project_skipped(&mut self, _project: &Project) {
        self.clear();
    }
}

impl Drop for ConsoleProgress {
    fn drop(&mut self) {
        self.clear();
    }
}

const fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

// ─── Spinner ──────────────────────────────────────────────────────────────────

/// Create and start an indeterminate spinner for `label`.
///
/// The spinner ticks at ~80 ms and is automatically cleared when
/// [`ProgressBar::finish_and_clear`] is called.
pub fn make_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(s) = ProgressStyle::with_template("  {spinner:.cyan}  {msg}") {
        pb.set_style(s.tick_chars(SPINNER_CHARS));
    }
    pb.set_message(format!("{}", style(label).dim()));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

// ─── Summary banner ───────────────────────────────────────────────────────────

/// Totals for a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSummary {
    pub scopes: usize,
    pub projects_saved: usize,
    pub projects_skipped: usize,
    pub variables: usize,
}

/// Print the closing banner for a successful run rooted at `root`.
pub fn print_summary(summary: &BackupSummary, root: &Path) {
    println!();
    println!(
        "  {} {}",
        icon_done(),
        style(format!(
            "Backed up {} project{} ({} variable{}) across {} scope{}.",
            summary.projects_saved,
            plural(summary.projects_saved),
            summary.variables,
            plural(summary.variables),
            summary.scopes,
            plural(summary.scopes),
        ))
        .cyan()
        .bold()
    );
    if summary.projects_skipped > 0 {
        println!(
            "  {} {} project{} returned no variable list and {} skipped.",
            icon_skip(),
            summary.projects_skipped,
            plural(summary.projects_skipped),
            if summary.projects_skipped == 1 { "was" } else { "were" },
        );
    }
    println!("    {}", style(root.display()).dim());
    println!();
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::project;

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(0), "s");
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }

    #[test]
    fn console_progress_smoke() {
        // Smoke test: rendering must not panic without a terminal attached.
        let mut p = ConsoleProgress::new();
        p.begin("Listing projects");
        p.scope_listed(&Scope::personal(), 0);
        p.project_saved(&project("prj_1", "web"), 3, Path::new("/tmp/web.json"));
        p.project_skipped(&project("prj_2", "api"));
    }

    #[test]
    fn summary_smoke() {
        let summary = BackupSummary {
            scopes: 2,
            projects_saved: 1,
            projects_skipped: 1,
            variables: 3,
        };
        print_summary(&summary, Path::new("/tmp/backups/2026-10-16T09-30-00"));
    }
}
