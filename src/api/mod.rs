//! Remote platform access.
//!
//! [`Platform`] is the seam between the backup logic and the network: the
//! pipeline only ever sees this trait, so tests drive it with an in-memory
//! fake and the binary drives it with [`HttpPlatform`].
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | `types`   | Wire types: teams, projects, env records, pages |
//! | `client`  | `reqwest` blocking implementation               |
//! | `error`   | [`ApiError`]                                    |

mod client;
mod error;
pub mod types;

#[cfg(test)]
pub mod fake;

pub use client::{DEFAULT_BASE_URL, HttpPlatform, MAX_PAGE_SIZE};
pub use error::ApiError;
use types::{Cursor, EnvVar, Page, Project, Team};

/// The three read-only operations a backup needs.
pub trait Platform {
    /// One page of the teams the account belongs to.
    fn list_teams(&self, limit: u32, until: Option<&Cursor>) -> Result<Page<Team>, ApiError>;

    /// One page of projects, restricted to `team_id` when given.
    fn list_projects(
        &self,
        team_id: Option<&str>,
        limit: u32,
        until: Option<&Cursor>,
    ) -> Result<Page<Project>, ApiError>;

    /// Environment variables of a project.
    ///
    /// `Ok(None)` means the response carried no variable collection at all.
    fn project_env(
        &self,
        project_id: &str,
        team_id: Option<&str>,
    ) -> Result<Option<Vec<EnvVar>>, ApiError>;
}
