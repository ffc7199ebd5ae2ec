//! Sign Up Use Case
//!
//! Registers a new account. The API signs the new user in straight away,
//! so a successful registration populates the session store like sign-in.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::session_store::SessionStore;
use crate::domain::entity::credentials::Registration;
use crate::domain::repository::{AuthGateway, SessionRepository};
use crate::domain::route;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub phone: String,
    pub role: UserRole,
    pub organization: String,
    pub mfa_enabled: bool,
}

/// Sign up output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutput {
    pub landing_path: &'static str,
    pub username: String,
}

/// Sign up use case
pub struct SignUpUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> SignUpUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute<R>(
        &self,
        store: &mut SessionStore<R>,
        input: SignUpInput,
    ) -> AuthResult<SignUpOutput>
    where
        R: SessionRepository,
    {
        let registration = Self::validate(input)?;

        let auth = match self.gateway.sign_up(&registration).await {
            Ok(auth) => auth,
            Err(err) => {
                err.log();
                return Err(err);
            }
        };

        tracing::info!(
            user_id = %auth.identity.id,
            role = %registration.role,
            "User signed up"
        );

        let username = auth.identity.username.clone();
        store.login_session(auth);

        Ok(SignUpOutput {
            landing_path: route::landing_path(store.session()),
            username,
        })
    }

    fn validate(input: SignUpInput) -> AuthResult<Registration> {
        let email =
            Email::new(input.email).map_err(|e| AuthError::InvalidEmail(e.message().to_string()))?;

        if input.password != input.confirm_password {
            return Err(AuthError::InvalidInput("Passwords do not match".to_string()));
        }
        let password = ClearTextPassword::new(input.password)?;

        let full_name = required(input.full_name, "Full name")?;
        let phone = required(input.phone, "Phone number")?;
        let organization = Some(input.organization.trim().to_string()).filter(|o| !o.is_empty());

        Ok(Registration {
            email,
            password,
            full_name,
            phone,
            role: input.role,
            organization,
            mfa_enabled: input.mfa_enabled,
        })
    }
}

fn required(value: String, field: &str) -> AuthResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AuthError::InvalidInput(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{
        credentials::SignInCredentials, identity::Identity, session::AuthSession,
    };
    use crate::domain::value_object::credential::Credential;
    use parking_lot::Mutex;

    /// Gateway echoing the registration back as the new identity
    #[derive(Default)]
    struct EchoGateway {
        seen: Mutex<Option<(String, Option<String>, bool)>>,
    }

    impl AuthGateway for EchoGateway {
        async fn sign_in(&self, _credentials: &SignInCredentials) -> AuthResult<AuthSession> {
            Err(AuthError::Internal("not used".to_string()))
        }

        async fn sign_up(&self, registration: &Registration) -> AuthResult<AuthSession> {
            *self.seen.lock() = Some((
                registration.full_name.clone(),
                registration.organization.clone(),
                registration.mfa_enabled,
            ));
            let identity = Identity::new("new", registration.username(), registration.email.as_str())
                .with_role(registration.role)
                .with_full_name(registration.full_name.clone());
            Ok(AuthSession::new(identity, Credential::new("fresh").unwrap()))
        }
    }

    struct NoopRepo;

    impl SessionRepository for NoopRepo {
        fn load(&self) -> AuthResult<Option<AuthSession>> {
            Ok(None)
        }
        fn save(&self, _session: &AuthSession) -> AuthResult<()> {
            Ok(())
        }
        fn clear(&self) -> AuthResult<()> {
            Ok(())
        }
    }

    fn input() -> SignUpInput {
        SignUpInput {
            email: "harpreet@example.org".to_string(),
            password: "floodrelief".to_string(),
            confirm_password: "floodrelief".to_string(),
            full_name: " Harpreet Kaur ".to_string(),
            phone: "+91 98765 43210".to_string(),
            role: UserRole::Volunteer,
            organization: "".to_string(),
            mfa_enabled: true,
        }
    }

    #[tokio::test]
    async fn test_sign_up_signs_in() {
        let gateway = Arc::new(EchoGateway::default());
        let use_case = SignUpUseCase::new(gateway.clone());
        let mut store = SessionStore::new(NoopRepo);

        let output = use_case.execute(&mut store, input()).await.unwrap();

        assert_eq!(output.username, "harpreet@example.org");
        assert_eq!(output.landing_path, "/dashboard");
        assert_eq!(store.session().role(), Some(UserRole::Volunteer));
        assert_eq!(
            *gateway.seen.lock(),
            Some(("Harpreet Kaur".to_string(), None, true))
        );
    }

    #[tokio::test]
    async fn test_sign_up_validation() {
        let use_case = SignUpUseCase::new(Arc::new(EchoGateway::default()));
        let mut store = SessionStore::new(NoopRepo);

        let mismatch = SignUpInput {
            confirm_password: "different".to_string(),
            ..input()
        };
        assert!(matches!(
            use_case.execute(&mut store, mismatch).await,
            Err(AuthError::InvalidInput(ref m)) if m == "Passwords do not match"
        ));

        let no_phone = SignUpInput {
            phone: "  ".to_string(),
            ..input()
        };
        assert!(matches!(
            use_case.execute(&mut store, no_phone).await,
            Err(AuthError::InvalidInput(ref m)) if m == "Phone number is required"
        ));
        assert!(!store.is_authenticated());
    }
}
