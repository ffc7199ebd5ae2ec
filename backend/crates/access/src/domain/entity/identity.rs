//! Identity Entity
//!
//! The user record the API returns on sign-in and the portal persists
//! under the `"user"` storage key.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    user_id::UserId,
    user_role::{RoleClaim, UserRole},
};

/// Signed-in user's profile
///
/// Serialized in camelCase, matching the API payload. Optional fields that
/// are absent stay absent on re-serialization so a persisted identity
/// reloads byte-for-byte equal.
///
/// The id is read from `id` or, failing that, from `_id`; a record carrying
/// both keeps `id`. It is always written back as `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IdentityRecord")]
pub struct Identity {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleClaim>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
}

/// Identity as found on the wire, before the id keys are reconciled
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityRecord {
    #[serde(default)]
    id: Option<UserId>,
    #[serde(default, rename = "_id")]
    object_id: Option<UserId>,
    username: String,
    email: String,
    #[serde(default)]
    role: Option<RoleClaim>,
    #[serde(default)]
    organization: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    mfa_enabled: Option<bool>,
}

impl TryFrom<IdentityRecord> for Identity {
    type Error = String;

    fn try_from(record: IdentityRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .or(record.object_id)
            .ok_or_else(|| "missing field `id`".to_string())?;
        Ok(Self {
            id,
            username: record.username,
            email: record.email,
            role: record.role,
            organization: record.organization,
            full_name: record.full_name,
            phone: record.phone,
            mfa_enabled: record.mfa_enabled,
        })
    }
}

impl Identity {
    pub fn new(id: impl Into<String>, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            username: username.into(),
            email: email.into(),
            role: None,
            organization: None,
            full_name: None,
            phone: None,
            mfa_enabled: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<RoleClaim>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Recognised role, if any
    ///
    /// `None` covers both a missing role and an unrecognised role string.
    #[inline]
    pub fn role(&self) -> Option<UserRole> {
        self.role.as_ref().and_then(RoleClaim::role)
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(self.username.as_str())
    }
}
