//! Wire DTOs for the RescueConnect auth API

use serde::{Deserialize, Serialize};

use crate::domain::entity::{
    credentials::{Registration, SignInCredentials},
    identity::Identity,
};
use crate::domain::value_object::user_role::UserRole;

/// `POST /api/auth/login` body
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a SignInCredentials> for LoginRequest<'a> {
    fn from(credentials: &'a SignInCredentials) -> Self {
        Self {
            email: credentials.email.as_str(),
            password: credentials.password.expose(),
        }
    }
}

/// `POST /api/auth/register` body
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
    pub phone: &'a str,
    pub role: UserRole,
    /// Sent as `""` when not given
    pub organization: &'a str,
    pub mfa_enabled: bool,
}

impl<'a> From<&'a Registration> for RegisterRequest<'a> {
    fn from(registration: &'a Registration) -> Self {
        Self {
            username: registration.username(),
            email: registration.email.as_str(),
            password: registration.password.expose(),
            full_name: &registration.full_name,
            phone: &registration.phone,
            role: registration.role,
            organization: registration.organization.as_deref().unwrap_or(""),
            mfa_enabled: registration.mfa_enabled,
        }
    }
}

/// Successful login/register response
#[derive(Debug, Deserialize)]
pub struct AuthPayload {
    pub user: Identity,
    pub token: String,
}
