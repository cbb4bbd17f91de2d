//! Wire types for the three platform endpoints the backup touches.
//!
//! Only the fields the backup actually reads are modelled; serde ignores the
//! rest.  Environment records are the exception: they are kept as raw JSON
//! objects so they can be written back out exactly as the API returned them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ─── Cursor ───────────────────────────────────────────────────────────────────

/// Opaque pagination token (the `until` parameter of the next request).
///
/// The API sends these as millisecond timestamps, but nothing here relies on
/// that: numbers and strings are both accepted and carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Cursor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::new(n.to_string()),
            Raw::Text(s) => Self::new(s),
        })
    }
}

// ─── Page ─────────────────────────────────────────────────────────────────────

/// One bounded batch from a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Where the next page starts; `None` on the last page.
    pub next: Option<Cursor>,
}

/// The `pagination` object attached to list responses.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next: Option<Cursor>,
}

#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl From<TeamsResponse> for Page<Team> {
    fn from(r: TeamsResponse) -> Self {
        Self {
            items: r.teams,
            next: r.pagination.next,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl From<ProjectsResponse> for Page<Project> {
    fn from(r: ProjectsResponse) -> Self {
        Self {
            items: r.projects,
            next: r.pagination.next,
        }
    }
}

/// Body of the project environment endpoint.
///
/// `envs` is `None` when the field is missing (or `null`), which is not the
/// same thing as a project with zero variables.
#[derive(Debug, Deserialize)]
pub struct EnvResponse {
    #[serde(default)]
    pub envs: Option<Vec<EnvVar>>,
}

// ─── Records ──────────────────────────────────────────────────────────────────

/// A team the account belongs to.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Team {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A project, as listed under a scope.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Owning scope (user or team id).
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// One environment variable record, field-for-field as the API sent it.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct EnvVar(pub Map<String, Value>);

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cursor_is_carried_as_text() {
        let p: Pagination = serde_json::from_str(r#"{"next": 1700000000000}"#).unwrap();
        assert_eq!(p.next, Some(Cursor::new("1700000000000")));
    }

    #[test]
    fn string_cursor_is_accepted() {
        let p: Pagination = serde_json::from_str(r#"{"next": "abc"}"#).unwrap();
        assert_eq!(p.next.unwrap().as_str(), "abc");
    }

    #[test]
    fn null_or_missing_cursor_means_last_page() {
        let p: Pagination = serde_json::from_str(r#"{"next": null}"#).unwrap();
        assert!(p.next.is_none());
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert!(p.next.is_none());
    }

    #[test]
    fn projects_response_without_pagination_is_last_page() {
        let r: ProjectsResponse =
            serde_json::from_str(r#"{"projects":[{"id":"prj_1","name":"web"}]}"#).unwrap();
        let page: Page<Project> = r.into();
        assert_eq!(page.items.len(), 1);
        assert!(page.next.is_none());
    }

    #[test]
    fn project_reads_camel_case_fields() {
        let p: Project = serde_json::from_str(
            r#"{"id":"prj_1","name":"web","accountId":"team_1","createdAt":1,"updatedAt":2,"framework":"nextjs"}"#,
        )
        .unwrap();
        assert_eq!(p.account_id.as_deref(), Some("team_1"));
        assert_eq!(p.created_at, Some(1));
        assert_eq!(p.updated_at, Some(2));
    }

    #[test]
    fn env_response_distinguishes_missing_from_empty() {
        let missing: EnvResponse = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert!(missing.envs.is_none());

        let null: EnvResponse = serde_json::from_str(r#"{"envs":null}"#).unwrap();
        assert!(null.envs.is_none());

        let empty: EnvResponse = serde_json::from_str(r#"{"envs":[]}"#).unwrap();
        assert_eq!(empty.envs, Some(vec![]));
    }

    #[test]
    fn env_var_round_trips_unknown_fields_in_order() {
        let raw = r#"{"type":"encrypted","key":"A","value":"1","target":["production"]}"#;
        let var: EnvVar = serde_json::from_str(raw).unwrap();
        assert_eq!(var.0["key"], "A");
        assert_eq!(serde_json::to_string(&var).unwrap(), raw);
    }
}
