//! Role-to-Navigation Resolver
//!
//! Static, ordered navigation tables per role. Resolution is total: every
//! session, including one whose role is unrecognised or missing, gets a
//! non-empty list.

use serde::Serialize;

use crate::domain::entity::session::Session;
use crate::domain::value_object::user_role::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    Home,
    AlertTriangle,
    Users,
    Package,
    Heart,
    DollarSign,
    Shield,
    LogIn,
}

/// One menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

const fn entry(path: &'static str, label: &'static str, icon: NavIcon) -> NavEntry {
    NavEntry { path, label, icon }
}

use NavIcon::*;

pub const PUBLIC_NAV: &[NavEntry] = &[
    entry("/", "Home", Home),
    entry("/report", "Report Incident", AlertTriangle),
    entry("/missing", "Missing Persons", Users),
    entry("/damage", "Damage Report", AlertTriangle),
    entry("/resources", "Resources", Package),
    entry("/volunteer", "Volunteer", Users),
    entry("/support", "Support", Heart),
    entry("/donate", "Donate", DollarSign),
    entry("/login", "Login", LogIn),
];

const ADMIN_NAV: &[NavEntry] = &[
    entry("/admin", "Admin", Shield),
    entry("/dashboard", "Dashboard", Home),
];

// Volunteers land on their own dashboard; the shared one is left out.
const VOLUNTEER_NAV: &[NavEntry] = &[
    entry("/volunteer", "Volunteer Dashboard", Users),
    entry("/report", "Report Incident", AlertTriangle),
    entry("/missing", "Missing Persons", Users),
    entry("/damage", "Damage Report", AlertTriangle),
    entry("/resources", "Resources", Package),
    entry("/support", "Support", Heart),
    entry("/donate", "Donate", DollarSign),
];

pub const CITIZEN_NAV: &[NavEntry] = &[
    entry("/", "Home", Home),
    entry("/dashboard", "Dashboard", Home),
    entry("/report", "Report Incident", AlertTriangle),
    entry("/missing", "Missing Persons", Users),
    entry("/damage", "Damage Report", AlertTriangle),
    entry("/resources", "Resources", Package),
    entry("/support", "Support", Heart),
    entry("/donate", "Donate", DollarSign),
];

const COUNSELOR_NAV: &[NavEntry] = &[
    entry("/counselor", "Counselor Dashboard", Heart),
    entry("/dashboard", "Dashboard", Home),
    entry("/support", "Support Requests", Heart),
];

const DONOR_NAV: &[NavEntry] = &[
    entry("/donor", "Donor Dashboard", DollarSign),
    entry("/dashboard", "Dashboard", Home),
    entry("/donate", "Make Donation", DollarSign),
];

const AUDITOR_NAV: &[NavEntry] = &[
    entry("/auditor", "System Audit", Shield),
    entry("/dashboard", "Dashboard", Home),
];

const INCIDENT_MANAGER_NAV: &[NavEntry] = &[
    entry("/incident-manager", "Incident Management", AlertTriangle),
    entry("/dashboard", "Dashboard", Home),
    entry("/report", "Report Incident", AlertTriangle),
];

const RESOURCE_MANAGER_NAV: &[NavEntry] = &[
    entry("/resource-manager", "Resource Management", Package),
    entry("/dashboard", "Dashboard", Home),
    entry("/resources", "Request Resources", Package),
];

const SHELTER_MANAGER_NAV: &[NavEntry] = &[
    entry("/shelter-manager", "Shelter Management", Home),
    entry("/dashboard", "Dashboard", Home),
];

const COMMUNICATION_OFFICER_NAV: &[NavEntry] = &[
    entry("/communication-officer", "Communication Hub", Users),
    entry("/dashboard", "Dashboard", Home),
];

/// Navigation table for a signed-in user's role
///
/// A missing or unrecognised role falls back to the citizen table.
pub fn navigation_for_role(role: Option<UserRole>) -> &'static [NavEntry] {
    let Some(role) = role else {
        return CITIZEN_NAV;
    };

    match role {
        UserRole::Admin => ADMIN_NAV,
        UserRole::Volunteer => VOLUNTEER_NAV,
        UserRole::Citizen => CITIZEN_NAV,
        UserRole::MentalHealthCounselor => COUNSELOR_NAV,
        UserRole::Donor => DONOR_NAV,
        UserRole::SystemAuditor => AUDITOR_NAV,
        UserRole::IncidentManager => INCIDENT_MANAGER_NAV,
        UserRole::LogisticsCoordinator => RESOURCE_MANAGER_NAV,
        UserRole::ShelterManager => SHELTER_MANAGER_NAV,
        UserRole::CommunicationOfficer => COMMUNICATION_OFFICER_NAV,
    }
}

/// Navigation entries for `session`
pub fn resolve_navigation(session: &Session) -> &'static [NavEntry] {
    if !session.is_authenticated() {
        return PUBLIC_NAV;
    }
    navigation_for_role(session.role())
}
