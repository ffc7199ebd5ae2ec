//! Repository Traits
//!
//! Interfaces for session persistence and the remote auth API.
//! Implementations are in the infrastructure layer.

use crate::domain::entity::{
    credentials::{Registration, SignInCredentials},
    session::AuthSession,
};
use crate::error::AuthResult;

/// Persisted session repository
///
/// Synchronous: backed by local key-value storage, never the network.
pub trait SessionRepository {
    /// Load the persisted session
    ///
    /// `Ok(None)` when either half is missing; `Err(CorruptSession)` when the
    /// stored identity does not parse.
    fn load(&self) -> AuthResult<Option<AuthSession>>;

    /// Persist both halves of `session`
    fn save(&self, session: &AuthSession) -> AuthResult<()>;

    /// Remove both halves; clearing an empty repository is not an error
    fn clear(&self) -> AuthResult<()>;
}

/// Remote authentication API
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// Exchange credentials for an identity and bearer token
    async fn sign_in(&self, credentials: &SignInCredentials) -> AuthResult<AuthSession>;

    /// Register a new account; the API signs the user in immediately
    async fn sign_up(&self, registration: &Registration) -> AuthResult<AuthSession>;
}
