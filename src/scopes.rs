//! Scope enumeration: the personal account plus every team.

use std::fmt;

use crate::{
    api::{ApiError, Platform, types::Team},
    paging::fetch_all_pages,
};

/// Directory name used for the personal account.
pub const PERSONAL_SCOPE_NAME: &str = "personal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// The account itself; projects are listed without a team filter.
    Personal,
    Team,
}

/// An ownership boundary under which projects are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub kind: ScopeKind,
    /// Team id.  Always `None` for the personal scope; `None` on a team means
    /// the team record came back without one.
    pub id: Option<String>,
    pub name: String,
}

impl Scope {
    pub fn personal() -> Self {
        Self {
            kind: ScopeKind::Personal,
            id: None,
            name: PERSONAL_SCOPE_NAME.into(),
        }
    }

    /// Team filter to send with scope-qualified requests.
    pub fn team_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl From<Team> for Scope {
    fn from(team: Team) -> Self {
        let name = team
            .slug
            .clone()
            .or_else(|| team.name.clone())
            .or_else(|| team.id.clone())
            .unwrap_or_else(|| "unnamed-team".into());
        Self {
            kind: ScopeKind::Team,
            id: team.id,
            name,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} ({id})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Every scope to back up: personal first, then teams in API order.
///
/// Teams are paginated like projects.  Any failure fails the whole call; a
/// partial team list is never returned.
pub fn list_scopes(api: &impl Platform, page_size: u32) -> Result<Vec<Scope>, ApiError> {
    let teams = fetch_all_pages(page_size, |limit, until| api.list_teams(limit, until))?;
    tracing::debug!(teams = teams.len(), "resolved teams");

    let mut scopes = Vec::with_capacity(teams.len() + 1);
    scopes.push(Scope::personal());
    scopes.extend(teams.into_iter().map(Scope::from));
    Ok(scopes)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
