//! Session Store
//!
//! Owns the current [`Session`] and keeps it in step with persisted storage.
//! Identity and credential are always written, restored and cleared as a
//! pair. Storage failures never reach the caller: they are logged and the
//! in-memory session stays authoritative.

use crate::domain::entity::{
    identity::Identity,
    session::{AuthSession, Session},
};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::credential::Credential;
use crate::error::AuthError;

pub struct SessionStore<R>
where
    R: SessionRepository,
{
    repo: R,
    session: Session,
}

impl<R> SessionStore<R>
where
    R: SessionRepository,
{
    /// Create a signed-out store without reading storage
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            session: Session::Unauthenticated,
        }
    }

    /// Create a store and rehydrate it from storage
    pub fn open(repo: R) -> Self {
        let mut store = Self::new(repo);
        store.restore();
        store
    }

    /// Rehydrate from storage
    ///
    /// A missing half or an unparseable identity clears both persisted
    /// entries and leaves the store signed out.
    pub fn restore(&mut self) -> &Session {
        match self.repo.load() {
            Ok(Some(auth)) => {
                tracing::debug!(user_id = %auth.identity.id, "Session restored");
                self.session = Session::Authenticated(auth);
                return &self.session;
            }
            Ok(None) => {}
            Err(err) => err.log(),
        }

        self.session = Session::Unauthenticated;
        self.clear_persisted();
        &self.session
    }

    /// Sign in with an identity and credential returned by the API
    pub fn login(&mut self, identity: Identity, credential: Credential) {
        self.login_session(AuthSession::new(identity, credential));
    }

    pub fn login_session(&mut self, auth: AuthSession) {
        if let Err(err) = self.repo.save(&auth) {
            tracing::warn!(error = %err, "Failed to persist session; continuing in memory");
        }
        tracing::info!(
            user_id = %auth.identity.id,
            role = auth.identity.role.as_ref().map(|claim| claim.as_str()),
            "Signed in"
        );
        self.session = Session::Authenticated(auth);
    }

    /// Sign out; calling this while signed out is a no-op apart from
    /// clearing any stray persisted entries
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            tracing::info!("Signed out");
        }
        self.session = Session::Unauthenticated;
        self.clear_persisted();
    }

    fn clear_persisted(&self) {
        if let Err(err) = self.repo.clear() {
            match err {
                AuthError::Storage(ref e) => {
                    tracing::warn!(error = %e, "Failed to clear persisted session")
                }
                other => other.log(),
            }
        }
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.session.credential()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}
