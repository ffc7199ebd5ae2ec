//! User Role Value Objects
//!
//! - [`UserRole`]: the closed set of roles the portal knows about
//! - [`RoleSet`]: a copyable set of roles, usable in `const` route tables
//! - [`RoleClaim`]: the role string an identity carries, which may name a
//!   role this build does not know

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum UserRole {
    Citizen = 0,
    Volunteer = 1,
    Admin = 2,
    MentalHealthCounselor = 3,
    Donor = 4,
    SystemAuditor = 5,
    IncidentManager = 6,
    LogisticsCoordinator = 7,
    // Reserved: navigation tables exist, no routes are mounted yet.
    ShelterManager = 8,
    CommunicationOfficer = 9,
}

impl UserRole {
    pub const ALL: [UserRole; 10] = [
        UserRole::Citizen,
        UserRole::Volunteer,
        UserRole::Admin,
        UserRole::MentalHealthCounselor,
        UserRole::Donor,
        UserRole::SystemAuditor,
        UserRole::IncidentManager,
        UserRole::LogisticsCoordinator,
        UserRole::ShelterManager,
        UserRole::CommunicationOfficer,
    ];

    #[inline]
    pub const fn id(&self) -> u8 {
        *self as u8
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Citizen => "citizen",
            Volunteer => "volunteer",
            Admin => "admin",
            MentalHealthCounselor => "mental_health_counselor",
            Donor => "donor",
            SystemAuditor => "system_auditor",
            IncidentManager => "incident_manager",
            LogisticsCoordinator => "logistics_coordinator",
            ShelterManager => "shelter_manager",
            CommunicationOfficer => "communication_officer",
        }
    }

    /// Human-readable label for role pickers
    #[inline]
    pub const fn label(&self) -> &'static str {
        use UserRole::*;
        match self {
            Citizen => "Citizen",
            Volunteer => "Volunteer",
            Admin => "Admin",
            MentalHealthCounselor => "Mental Health Counselor",
            Donor => "Donor",
            SystemAuditor => "System Auditor",
            IncidentManager => "Incident Manager",
            LogisticsCoordinator => "Logistics Coordinator",
            ShelterManager => "Shelter Manager",
            CommunicationOfficer => "Communication Officer",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Roles that have navigation but no mounted routes
    #[inline]
    pub const fn is_reserved(&self) -> bool {
        matches!(self, UserRole::ShelterManager | UserRole::CommunicationOfficer)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for a role code outside [`UserRole::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

// ============================================================================
// RoleSet
// ============================================================================

/// Set of roles, one bit per [`UserRole`]
///
/// ```rust
/// use access::domain::value_object::user_role::{RoleSet, UserRole};
///
/// const STAFF: RoleSet = RoleSet::single(UserRole::Admin).with(UserRole::SystemAuditor);
/// assert!(STAFF.contains(UserRole::SystemAuditor));
/// assert!(!STAFF.contains(UserRole::Donor));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u16);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);

    #[inline]
    pub const fn single(role: UserRole) -> Self {
        Self(1 << role.id())
    }

    #[inline]
    pub const fn with(self, role: UserRole) -> Self {
        Self(self.0 | (1 << role.id()))
    }

    #[inline]
    pub const fn contains(self, role: UserRole) -> bool {
        self.0 & (1 << role.id()) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in declaration order
    pub fn iter(self) -> impl Iterator<Item = UserRole> {
        UserRole::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl FromIterator<UserRole> for RoleSet {
    fn from_iter<I: IntoIterator<Item = UserRole>>(iter: I) -> Self {
        iter.into_iter().fold(RoleSet::EMPTY, RoleSet::with)
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for RoleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let roles = Vec::<UserRole>::deserialize(deserializer)?;
        Ok(roles.into_iter().collect())
    }
}

// ============================================================================
// RoleClaim
// ============================================================================

/// The role an identity claims
///
/// Stored identities are replayed exactly, so a role string this build does
/// not recognise is kept verbatim instead of being coerced or rejected.
/// An unrecognised claim never matches any [`RoleSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleClaim {
    Known(UserRole),
    Unrecognized(String),
}

impl RoleClaim {
    #[inline]
    pub fn role(&self) -> Option<UserRole> {
        match self {
            RoleClaim::Known(role) => Some(*role),
            RoleClaim::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleClaim::Known(role) => role.code(),
            RoleClaim::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for RoleClaim {
    fn from(raw: String) -> Self {
        match UserRole::from_code(&raw) {
            Some(role) => RoleClaim::Known(role),
            None => RoleClaim::Unrecognized(raw),
        }
    }
}

impl From<&str> for RoleClaim {
    fn from(raw: &str) -> Self {
        RoleClaim::from(raw.to_string())
    }
}

impl From<UserRole> for RoleClaim {
    fn from(role: UserRole) -> Self {
        RoleClaim::Known(role)
    }
}

impl From<RoleClaim> for String {
    fn from(claim: RoleClaim) -> Self {
        match claim {
            RoleClaim::Known(role) => role.code().to_string(),
            RoleClaim::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for RoleClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_code_round_trip() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
            assert_eq!(role.to_string(), role.code());
        }
    }

    #[test]
    fn test_user_role_from_code_unknown() {
        assert_eq!(UserRole::from_code("superuser"), None);
        assert_eq!(UserRole::from_code("Admin"), None);
        assert_eq!(
            "medical_staff".parse::<UserRole>(),
            Err(UnknownRole("medical_staff".to_string()))
        );
    }

    #[test]
    fn test_user_role_serde_snake_case() {
        let json = serde_json::to_string(&UserRole::MentalHealthCounselor).unwrap();
        assert_eq!(json, "\"mental_health_counselor\"");
        let role: UserRole = serde_json::from_str("\"logistics_coordinator\"").unwrap();
        assert_eq!(role, UserRole::LogisticsCoordinator);
    }

    #[test]
    fn test_user_role_checks() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::SystemAuditor.is_admin());
        assert!(UserRole::ShelterManager.is_reserved());
        assert!(UserRole::CommunicationOfficer.is_reserved());
        assert!(!UserRole::Donor.is_reserved());
    }

    #[test]
    fn test_role_set_membership() {
        let set = RoleSet::single(UserRole::Donor).with(UserRole::Admin);
        assert!(set.contains(UserRole::Donor));
        assert!(set.contains(UserRole::Admin));
        assert!(!set.contains(UserRole::Citizen));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![UserRole::Admin, UserRole::Donor]);
    }

    #[test]
    fn test_role_set_empty() {
        assert!(RoleSet::EMPTY.is_empty());
        assert!(UserRole::ALL.iter().all(|r| !RoleSet::EMPTY.contains(*r)));
    }

    #[test]
    fn test_role_set_serde() {
        let set: RoleSet = serde_json::from_str(r#"["donor","system_auditor","donor"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["donor","system_auditor"]"#
        );
        assert!(serde_json::from_str::<RoleSet>(r#"["wizard"]"#).is_err());
    }

    #[test]
    fn test_role_claim_known_and_unrecognized() {
        assert_eq!(RoleClaim::from("donor"), RoleClaim::Known(UserRole::Donor));
        assert_eq!(RoleClaim::from("donor").role(), Some(UserRole::Donor));

        let claim = RoleClaim::from("emergency_responder");
        assert_eq!(claim.role(), None);
        assert_eq!(claim.as_str(), "emergency_responder");
    }

    #[test]
    fn test_role_claim_serde_is_verbatim() {
        let claim: RoleClaim = serde_json::from_str("\"medical_staff\"").unwrap();
        assert_eq!(serde_json::to_string(&claim).unwrap(), "\"medical_staff\"");

        let claim: RoleClaim = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(claim, RoleClaim::Known(UserRole::Admin));
    }
}
