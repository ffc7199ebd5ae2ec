//! RescueConnect API gateway
//!
//! [`AuthGateway`] over HTTP, plus bearer-authenticated JSON calls for the
//! rest of the portal.

use serde::Serialize;
use serde::de::DeserializeOwned;

use platform::client::ApiClient;

use crate::application::config::AccessConfig;
use crate::domain::entity::{
    credentials::{Registration, SignInCredentials},
    session::{AuthSession, Session},
};
use crate::domain::repository::AuthGateway;
use crate::domain::value_object::credential::Credential;
use crate::error::{AuthError, AuthResult};
use crate::infra::dto::{AuthPayload, LoginRequest, RegisterRequest};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

#[derive(Debug, Clone)]
pub struct RescueApi {
    client: ApiClient,
}

impl RescueApi {
    pub fn new(config: &AccessConfig) -> AuthResult<Self> {
        let client = ApiClient::new(config.api_base_url.as_str(), config.request_timeout)?;
        Ok(Self { client })
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// GET `path` as the signed-in user
    pub async fn get_authorized<T>(&self, session: &Session, path: &str) -> AuthResult<T>
    where
        T: DeserializeOwned,
    {
        let credential = session.credential().ok_or(AuthError::NotAuthenticated)?;
        Ok(self.client.get_json(path, Some(credential.expose())).await?)
    }

    /// POST `body` to `path` as the signed-in user
    pub async fn post_authorized<B, T>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> AuthResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let credential = session.credential().ok_or(AuthError::NotAuthenticated)?;
        Ok(self
            .client
            .post_json(path, body, Some(credential.expose()))
            .await?)
    }

    fn into_session(payload: AuthPayload) -> AuthResult<AuthSession> {
        let credential = Credential::new(payload.token)
            .map_err(|_| AuthError::Internal("API returned an empty token".to_string()))?;
        Ok(AuthSession::new(payload.user, credential))
    }
}

impl AuthGateway for RescueApi {
    async fn sign_in(&self, credentials: &SignInCredentials) -> AuthResult<AuthSession> {
        tracing::debug!(email = %credentials.email, "Signing in");
        let payload: AuthPayload = self
            .client
            .post_json(LOGIN_ENDPOINT, &LoginRequest::from(credentials), None)
            .await?;
        Self::into_session(payload)
    }

    async fn sign_up(&self, registration: &Registration) -> AuthResult<AuthSession> {
        tracing::debug!(email = %registration.email, role = %registration.role, "Registering");
        let payload: AuthPayload = self
            .client
            .post_json(REGISTER_ENDPOINT, &RegisterRequest::from(registration), None)
            .await?;
        Self::into_session(payload)
    }
}
