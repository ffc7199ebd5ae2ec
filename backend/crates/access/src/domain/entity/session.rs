//! Session Entity
//!
//! Who is signed in on this client. Identity and credential are always set
//! or cleared together; the enum makes a half-filled session unrepresentable.

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::{
    credential::Credential,
    user_role::{RoleClaim, UserRole},
};

/// Identity plus the credential issued with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub identity: Identity,
    pub credential: Credential,
}

impl AuthSession {
    pub fn new(identity: Identity, credential: Credential) -> Self {
        Self {
            identity,
            credential,
        }
    }
}

/// Client session state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(AuthSession),
}

impl Session {
    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn auth(&self) -> Option<&AuthSession> {
        match self {
            Session::Authenticated(auth) => Some(auth),
            Session::Unauthenticated => None,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.auth().map(|auth| &auth.identity)
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.auth().map(|auth| &auth.credential)
    }

    /// Recognised role of the signed-in user
    pub fn role(&self) -> Option<UserRole> {
        self.identity().and_then(Identity::role)
    }

    /// Role exactly as claimed, including unrecognised strings
    pub fn role_claim(&self) -> Option<&RoleClaim> {
        self.identity().and_then(|identity| identity.role.as_ref())
    }
}

impl From<AuthSession> for Session {
    fn from(auth: AuthSession) -> Self {
        Session::Authenticated(auth)
    }
}
