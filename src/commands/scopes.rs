//! `env-backup scopes` — show what a backup would cover without writing anything.

use anyhow::{Context, Result};
use console::style;

use crate::{
    api::Platform,
    config::Config,
    projects::list_projects,
    scopes::{Scope, list_scopes},
    ui::make_spinner,
};

pub fn run(api: &impl Platform, cfg: &Config) -> Result<()> {
    let spinner = make_spinner("Listing scopes");
    let counted = count_projects(api, cfg.api.page_size);
    spinner.finish_and_clear();

    println!();
    for (scope, projects) in counted? {
        println!(
            "  {}  {}",
            style(&scope).bold(),
            style(format!("{projects} projects")).cyan()
        );
    }
    println!();
    Ok(())
}

/// Every scope paired with the number of projects it holds.
pub fn count_projects(api: &impl Platform, page_size: u32) -> Result<Vec<(Scope, usize)>> {
    let scopes = list_scopes(api, page_size).context("listing teams")?;
    scopes
        .into_iter()
        .map(|scope| -> Result<(Scope, usize)> {
            let n = list_projects(api, &scope, page_size)
                .with_context(|| format!("listing projects for {scope}"))?
                .len();
            Ok((scope, n))
        })
        .collect()
}
