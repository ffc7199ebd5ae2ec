//! Access Gate
//!
//! Decides whether the current session may render a protected route.
//! Evaluation is a pure function of `(session, guard)`: no I/O, no state.
//!
//! ## Evaluation order (first match wins)
//! 1. Not authenticated → redirect to `/login`
//! 2. Role list present and role not in it → redirect to `/dashboard`
//! 3. Legacy admin-only and role is not admin → redirect to `/dashboard`
//! 4. Otherwise render
//!
//! An unrecognised or missing role never satisfies a role list or the
//! admin check.

use serde::{Deserialize, Serialize};

use crate::domain::entity::session::Session;
use crate::domain::route::{DASHBOARD_PATH, LOGIN_PATH};
use crate::domain::value_object::user_role::{RoleSet, UserRole};

/// Access requirement of a protected route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Any signed-in user
    Authenticated,
    /// Signed-in user whose role is in the set
    RoleList(RoleSet),
    /// Signed-in admin (older routes declare this instead of a role list)
    LegacyAdminOnly,
}

impl Guard {
    pub const fn roles(roles: RoleSet) -> Self {
        Guard::RoleList(roles)
    }

    pub const fn only(role: UserRole) -> Self {
        Guard::RoleList(RoleSet::single(role))
    }
}

/// Declarative guard as routes describe it
///
/// `allowed_roles`, when present, wins over `admin_only`. A descriptor with
/// `required_authentication = false` describes an open route and has no
/// guard at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardDescriptor {
    pub path: String,
    #[serde(default = "default_required")]
    pub required_authentication: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_roles: Option<RoleSet>,
    #[serde(default)]
    pub admin_only: bool,
}

fn default_required() -> bool {
    true
}

impl GuardDescriptor {
    /// Guard to enforce, `None` for an open route
    pub fn guard(&self) -> Option<Guard> {
        if !self.required_authentication {
            return None;
        }
        Some(match (self.allowed_roles, self.admin_only) {
            (Some(roles), _) => Guard::RoleList(roles),
            (None, true) => Guard::LegacyAdminOnly,
            (None, false) => Guard::Authenticated,
        })
    }
}

/// Where a denied navigation is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Redirect {
    Login,
    Dashboard,
}

impl Redirect {
    pub const fn path(&self) -> &'static str {
        match self {
            Redirect::Login => LOGIN_PATH,
            Redirect::Dashboard => DASHBOARD_PATH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessDecision {
    Render,
    Redirect(Redirect),
}

impl AccessDecision {
    #[inline]
    pub fn is_render(&self) -> bool {
        matches!(self, AccessDecision::Render)
    }

    /// Redirect target path, `None` when rendering
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            AccessDecision::Render => None,
            AccessDecision::Redirect(to) => Some(to.path()),
        }
    }
}

/// Evaluate `guard` against `session`
pub fn evaluate(session: &Session, guard: &Guard) -> AccessDecision {
    let decision = decide(session, guard);
    if let AccessDecision::Redirect(to) = decision {
        tracing::debug!(
            guard = ?guard,
            role = session.role_claim().map(|claim| claim.as_str()),
            redirect = to.path(),
            "Access denied"
        );
    }
    decision
}

fn decide(session: &Session, guard: &Guard) -> AccessDecision {
    if !session.is_authenticated() {
        return AccessDecision::Redirect(Redirect::Login);
    }

    let role = session.role();
    match guard {
        Guard::RoleList(allowed) if !role.is_some_and(|r| allowed.contains(r)) => {
            AccessDecision::Redirect(Redirect::Dashboard)
        }
        Guard::LegacyAdminOnly if !role.is_some_and(|r| r.is_admin()) => {
            AccessDecision::Redirect(Redirect::Dashboard)
        }
        _ => AccessDecision::Render,
    }
}
