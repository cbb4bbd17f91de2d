//! In-memory [`Platform`] for unit tests.
//!
//! Pages are cut from plain vectors using the item offset as the cursor, and
//! every call is recorded so tests can assert on what was (not) requested.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
};

use serde_json::json;

use super::{
    ApiError, Platform,
    types::{Cursor, EnvVar, Page, Project, Team},
};

#[derive(Default)]
pub struct FakePlatform {
    pub teams: Vec<Team>,
    pub fail_teams: bool,
    /// Projects keyed by team id; `None` is the personal account.
    pub projects: HashMap<Option<String>, Vec<Project>>,
    /// Env collections keyed by project id.  A missing key means the
    /// response had no collection.
    pub envs: HashMap<String, Vec<EnvVar>>,
    pub fail_env: HashSet<String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakePlatform {
    pub fn with_team(mut self, id: &str, slug: &str) -> Self {
        self.teams.push(team(id, slug));
        self
    }

    pub fn with_projects(mut self, team_id: Option<&str>, projects: Vec<Project>) -> Self {
        self.projects.insert(team_id.map(str::to_string), projects);
        self
    }

    pub fn with_env(mut self, project_id: &str, count: usize) -> Self {
        let vars = (0..count).map(|i| env_var(&format!("KEY_{i}"))).collect();
        self.envs.insert(project_id.to_string(), vars);
        self
    }

    pub fn failing_env(mut self, project_id: &str) -> Self {
        self.fail_env.insert(project_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Platform for FakePlatform {
    fn list_teams(&self, limit: u32, until: Option<&Cursor>) -> Result<Page<Team>, ApiError> {
        self.record(format!("teams until={}", show(until)));
        if self.fail_teams {
            return Err(server_error("/v2/teams"));
        }
        Ok(paginate(&self.teams, limit, until))
    }

    fn list_projects(
        &self,
        team_id: Option<&str>,
        limit: u32,
        until: Option<&Cursor>,
    ) -> Result<Page<Project>, ApiError> {
        self.record(format!(
            "projects team={} until={}",
            team_id.unwrap_or("-"),
            show(until)
        ));
        let all = self
            .projects
            .get(&team_id.map(str::to_string))
            .cloned()
            .unwrap_or_default();
        Ok(paginate(&all, limit, until))
    }

    fn project_env(
        &self,
        project_id: &str,
        team_id: Option<&str>,
    ) -> Result<Option<Vec<EnvVar>>, ApiError> {
        self.record(format!("env {project_id} team={}", team_id.unwrap_or("-")));
        if self.fail_env.contains(project_id) {
            return Err(server_error(&format!("/v9/projects/{project_id}/env")));
        }
        Ok(self.envs.get(project_id).cloned())
    }
}

/// Slice `items` into a page starting at the offset encoded in `until`.
pub fn paginate<T: Clone>(items: &[T], limit: u32, until: Option<&Cursor>) -> Page<T> {
    let start: usize = until.map_or(0, |c| c.as_str().parse().unwrap());
    let end = (start + limit as usize).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        next: (end < items.len()).then(|| Cursor::new(end.to_string())),
    }
}

pub fn team(id: &str, slug: &str) -> Team {
    Team {
        id: Some(id.into()),
        slug: Some(slug.into()),
        name: Some(slug.to_uppercase()),
    }
}

pub fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.into(),
        name: name.into(),
        ..Project::default()
    }
}

pub fn env_var(key: &str) -> EnvVar {
    let value = json!({
        "id": format!("env_{key}"),
        "key": key,
        "value": format!("value-of-{key}"),
        "createdAt": 1,
        "updatedAt": 2,
    });
    serde_json::from_value(value).unwrap()
}

fn show(c: Option<&Cursor>) -> String {
    c.map_or_else(|| "-".to_string(), ToString::to_string)
}

fn server_error(path: &str) -> ApiError {
    ApiError::Status {
        url: format!("fake://{path}"),
        status: 500,
        body: "boom".into(),
    }
}
