//! Blocking HTTP implementation of [`Platform`].

use reqwest::{Url, blocking::Client};
use serde::de::DeserializeOwned;

use super::{
    ApiError, Platform,
    types::{Cursor, EnvResponse, EnvVar, Page, Project, ProjectsResponse, Team, TeamsResponse},
};

/// Default base URL of the REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.vercel.com";

/// Largest `limit` the list endpoints accept.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Authenticated client for the platform's REST API.
pub struct HttpPlatform {
    http: Client,
    base_url: String,
    token: String,
    decrypt: bool,
}

impl HttpPlatform {
    /// Build a client that sends `token` as a bearer credential on every call.
    ///
    /// `decrypt` asks the environment endpoint for plaintext values.
    pub fn new(base_url: &str, token: String, decrypt: bool) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("env-backup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Transport {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            decrypt,
        })
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}{path}", self.base_url);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        let url = self.endpoint(path, query)?;
        let shown = url.to_string();
        tracing::debug!(url = %shown, "GET");

        let res = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|source| ApiError::Transport {
                url: shown.clone(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            return Err(ApiError::Status {
                url: shown,
                status: status.as_u16(),
                body,
            });
        }

        res.json::<T>()
            .map_err(|source| ApiError::Decode { url: shown, source })
    }
}

impl Platform for HttpPlatform {
    fn list_teams(&self, limit: u32, until: Option<&Cursor>) -> Result<Page<Team>, ApiError> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(c) = until {
            query.push(("until", c.to_string()));
        }
        self.get::<TeamsResponse>("/v2/teams", &query).map(Page::from)
    }

    fn list_projects(
        &self,
        team_id: Option<&str>,
        limit: u32,
        until: Option<&Cursor>,
    ) -> Result<Page<Project>, ApiError> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(t) = team_id {
            query.push(("teamId", t.to_string()));
        }
        if let Some(c) = until {
            query.push(("until", c.to_string()));
        }
        self.get::<ProjectsResponse>("/v9/projects", &query)
            .map(Page::from)
    }

    fn project_env(
        &self,
        project_id: &str,
        team_id: Option<&str>,
    ) -> Result<Option<Vec<EnvVar>>, ApiError> {
        let mut query = Vec::new();
        if self.decrypt {
            query.push(("decrypt", "true".to_string()));
        }
        if let Some(t) = team_id {
            query.push(("teamId", t.to_string()));
        }
        let path = format!("/v9/projects/{project_id}/env");
        self.get::<EnvResponse>(&path, &query).map(|r| r.envs)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
