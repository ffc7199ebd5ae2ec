//! Route Catalogue
//!
//! Every page the portal routes to, with the guard that protects it.
//! Paths not listed here resolve to the not-found page.

use crate::domain::entity::session::Session;
use crate::domain::guard::Guard;
use crate::domain::value_object::user_role::UserRole;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_PATH: &str = "/admin";

/// Page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    Dashboard,
    IncidentReport,
    MissingPerson,
    DamageReport,
    ResourceRequest,
    Volunteer,
    Support,
    Donate,
    Admin,
    Counselor,
    Donor,
    Auditor,
    IncidentManager,
    ResourceManager,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    /// `None` for open routes
    pub guard: Option<Guard>,
}

impl Route {
    const fn open(path: &'static str, page: Page) -> Self {
        Self {
            path,
            page,
            guard: None,
        }
    }

    const fn guarded(path: &'static str, page: Page, guard: Guard) -> Self {
        Self {
            path,
            page,
            guard: Some(guard),
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.guard.is_none()
    }
}

// Shelter manager and communication officer pages are not mounted yet.
pub const ROUTES: &[Route] = &[
    Route::open(HOME_PATH, Page::Landing),
    Route::open(LOGIN_PATH, Page::Login),
    Route::guarded(DASHBOARD_PATH, Page::Dashboard, Guard::Authenticated),
    Route::guarded("/report", Page::IncidentReport, Guard::Authenticated),
    Route::guarded("/missing", Page::MissingPerson, Guard::Authenticated),
    Route::guarded("/damage", Page::DamageReport, Guard::Authenticated),
    Route::guarded("/resources", Page::ResourceRequest, Guard::Authenticated),
    Route::guarded("/volunteer", Page::Volunteer, Guard::Authenticated),
    Route::guarded("/support", Page::Support, Guard::Authenticated),
    Route::guarded("/donate", Page::Donate, Guard::Authenticated),
    Route::guarded(ADMIN_PATH, Page::Admin, Guard::LegacyAdminOnly),
    Route::guarded(
        "/counselor",
        Page::Counselor,
        Guard::only(UserRole::MentalHealthCounselor),
    ),
    Route::guarded("/donor", Page::Donor, Guard::only(UserRole::Donor)),
    Route::guarded("/auditor", Page::Auditor, Guard::only(UserRole::SystemAuditor)),
    Route::guarded(
        "/incident-manager",
        Page::IncidentManager,
        Guard::only(UserRole::IncidentManager),
    ),
    Route::guarded(
        "/resource-manager",
        Page::ResourceManager,
        Guard::only(UserRole::LogisticsCoordinator),
    ),
];

/// Strip query, fragment and trailing slashes; `""` becomes `/`
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

pub fn find_route(path: &str) -> Option<&'static Route> {
    let path = normalize_path(path);
    ROUTES.iter().find(|route| route.path == path)
}

/// Where to send a user right after sign-in
pub fn landing_path(session: &Session) -> &'static str {
    match session.role() {
        Some(role) if role.is_admin() => ADMIN_PATH,
        _ => DASHBOARD_PATH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{identity::Identity, session::AuthSession};
    use crate::domain::value_object::credential::Credential;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/dashboard/"), "/dashboard");
        assert_eq!(normalize_path("/donor?tab=history"), "/donor");
        assert_eq!(normalize_path("/report#map"), "/report");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/?next=/admin"), "/");
    }

    #[test]
    fn test_find_route() {
        assert_eq!(find_route("/admin").map(|r| r.page), Some(Page::Admin));
        assert_eq!(find_route("/").map(|r| r.page), Some(Page::Landing));
        assert!(find_route("/login").is_some_and(Route::is_open));
        assert!(find_route("/shelter-manager").is_none());
        assert!(find_route("/Admin").is_none());
    }

    #[test]
    fn test_route_paths_unique() {
        for (i, route) in ROUTES.iter().enumerate() {
            assert!(ROUTES[i + 1..].iter().all(|other| other.path != route.path));
        }
    }

    #[test]
    fn test_landing_path() {
        let session_for = |role: &str| -> Session {
            let identity = Identity::new("1", "u", "u@example.org").with_role(role);
            AuthSession::new(identity, Credential::new("t").unwrap()).into()
        };
        assert_eq!(landing_path(&session_for("admin")), "/admin");
        assert_eq!(landing_path(&session_for("donor")), "/dashboard");
        assert_eq!(landing_path(&session_for("unknown")), "/dashboard");
        assert_eq!(landing_path(&Session::Unauthenticated), "/dashboard");
    }
}
