//! Key-value storage session repository
//!
//! Layout: the identity as JSON under the identity key (`"user"`), the
//! bearer token as plain text under the credential key (`"token"`).

use platform::storage::KeyValueStorage;

use crate::application::config::AccessConfig;
use crate::domain::entity::{identity::Identity, session::AuthSession};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::credential::Credential;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone)]
pub struct StorageSessionRepository<S>
where
    S: KeyValueStorage,
{
    storage: S,
    identity_key: String,
    credential_key: String,
}

impl<S> StorageSessionRepository<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: S, config: &AccessConfig) -> Self {
        Self {
            storage,
            identity_key: config.identity_key.clone(),
            credential_key: config.credential_key.clone(),
        }
    }

    /// Repository using the `"user"` / `"token"` keys
    pub fn with_default_keys(storage: S) -> Self {
        Self::new(storage, &AccessConfig::default())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read(&self, key: &str) -> AuthResult<Option<String>> {
        Ok(self
            .storage
            .get_item(key)?
            .filter(|value| !value.is_empty()))
    }
}

impl<S> SessionRepository for StorageSessionRepository<S>
where
    S: KeyValueStorage,
{
    fn load(&self) -> AuthResult<Option<AuthSession>> {
        let (Some(raw_identity), Some(token)) =
            (self.read(&self.identity_key)?, self.read(&self.credential_key)?)
        else {
            return Ok(None);
        };

        let identity: Identity = serde_json::from_str(&raw_identity)
            .map_err(|e| AuthError::CorruptSession(e.to_string()))?;

        let Ok(credential) = Credential::new(token) else {
            return Ok(None);
        };

        Ok(Some(AuthSession::new(identity, credential)))
    }

    fn save(&self, session: &AuthSession) -> AuthResult<()> {
        let identity = serde_json::to_string(&session.identity)
            .map_err(|e| AuthError::Internal(format!("Failed to encode identity: {}", e)))?;

        self.storage.set_item(&self.identity_key, &identity)?;
        self.storage
            .set_item(&self.credential_key, session.credential.expose())?;
        Ok(())
    }

    fn clear(&self) -> AuthResult<()> {
        let identity = self.storage.remove_item(&self.identity_key);
        let credential = self.storage.remove_item(&self.credential_key);
        identity?;
        credential?;
        Ok(())
    }
}
