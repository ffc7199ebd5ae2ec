//! Sign In Use Case
//!
//! Validates the login form, exchanges the credentials with the API and
//! hands the resulting session to the [`SessionStore`].

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::session_store::SessionStore;
use crate::domain::entity::credentials::SignInCredentials;
use crate::domain::repository::{AuthGateway, SessionRepository};
use crate::domain::route;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOutput {
    /// Route to navigate to next
    pub landing_path: &'static str,
    /// Username to greet
    pub username: String,
}

/// Sign in use case
pub struct SignInUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> SignInUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute<R>(
        &self,
        store: &mut SessionStore<R>,
        input: SignInInput,
    ) -> AuthResult<SignInOutput>
    where
        R: SessionRepository,
    {
        let credentials = SignInCredentials {
            email: Email::new(input.email).map_err(|e| AuthError::InvalidEmail(e.message().to_string()))?,
            password: ClearTextPassword::new(input.password)?,
        };

        let auth = match self.gateway.sign_in(&credentials).await {
            Ok(auth) => auth,
            Err(err) => {
                err.log();
                return Err(err);
            }
        };

        let username = auth.identity.username.clone();
        store.login_session(auth);

        Ok(SignInOutput {
            landing_path: route::landing_path(store.session()),
            username,
        })
    }
}
