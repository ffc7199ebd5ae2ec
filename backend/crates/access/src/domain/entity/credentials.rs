//! Sign-in and Sign-up Credentials
//!
//! Validated form input, ready to hand to the [`AuthGateway`].
//!
//! [`AuthGateway`]: crate::domain::repository::AuthGateway

use platform::password::ClearTextPassword;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// Email + password pair for sign-in
#[derive(Debug)]
pub struct SignInCredentials {
    pub email: Email,
    pub password: ClearTextPassword,
}

/// New account details for sign-up
///
/// The email doubles as the username, as the API expects.
#[derive(Debug)]
pub struct Registration {
    pub email: Email,
    pub password: ClearTextPassword,
    pub full_name: String,
    pub phone: String,
    pub role: UserRole,
    pub organization: Option<String>,
    pub mfa_enabled: bool,
}

impl Registration {
    #[inline]
    pub fn username(&self) -> &str {
        self.email.as_str()
    }
}
