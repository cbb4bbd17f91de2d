//! Project resolution for a single scope.

use crate::{
    api::{ApiError, Platform, types::Project},
    paging::fetch_all_pages,
    scopes::{Scope, ScopeKind},
};

/// Every project in `scope`, in API page order.
///
/// A team scope without an id has nothing to filter on, so it resolves to an
/// empty list without touching the network.
pub fn list_projects(
    api: &impl Platform,
    scope: &Scope,
    page_size: u32,
) -> Result<Vec<Project>, ApiError> {
    let team_id = match (scope.kind, scope.team_id()) {
        (ScopeKind::Personal, _) => None,
        (ScopeKind::Team, Some(id)) => Some(id),
        (ScopeKind::Team, None) => {
            tracing::debug!(scope = %scope, "team has no id, nothing to list");
            return Ok(Vec::new());
        },
    };

    fetch_all_pages(page_size, |limit, until| {
        api.list_projects(team_id, limit, until)
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        fake::{FakePlatform, project, team},
        types::Team,
    };

    #[test]
    fn personal_scope_lists_without_team_filter() {
        let api = FakePlatform::default()
            .with_projects(None, vec![project("p1", "blog")]);
        let got = list_projects(&api, &Scope::personal(), 100).unwrap();

        assert_eq!(got, vec![project("p1", "blog")]);
        assert_eq!(api.calls(), vec!["projects team=- until=-"]);
    }

    #[test]
    fn team_scope_filters_by_team_id() {
        let api = FakePlatform::default()
            .with_projects(Some("team_1"), vec![project("p1", "web"), project("p2", "api")])
            .with_projects(None, vec![project("p9", "other")]);
        let scope = Scope::from(team("team_1", "acme"));

        let got = list_projects(&api, &scope, 100).unwrap();

        let names: Vec<_> = got.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["web", "api"]);
        assert_eq!(api.calls(), vec!["projects team=team_1 until=-"]);
    }

    #[test]
    fn team_without_id_makes_no_request() {
        let api = FakePlatform::default();
        let scope = Scope::from(Team {
            slug: Some("ghost".into()),
            ..Team::default()
        });

        let got = list_projects(&api, &scope, 100).unwrap();

        assert!(got.is_empty());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn many_pages_are_stitched_in_order() {
        let all: Vec<_> = (0..25)
            .map(|i| project(&format!("p{i}"), &format!("site-{i}")))
            .collect();
        let api = FakePlatform::default().with_projects(Some("team_1"), all.clone());
        let scope = Scope::from(team("team_1", "acme"));

        let got = list_projects(&api, &scope, 10).unwrap();

        assert_eq!(got, all);
        assert_eq!(api.calls().len(), 3);
    }
}
