//! Access Error Types
//!
//! Session, sign-in and API errors, integrated with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::ClientError;
use platform::password::PasswordPolicyError;
use platform::storage::StorageError;
use thiserror::Error;

/// Message shown when the API rejects credentials without saying why
pub const DEFAULT_REJECTION_MESSAGE: &str = "Please check your credentials and try again.";

/// Message shown when the API cannot be reached
pub const NETWORK_ERROR_MESSAGE: &str = "Unable to connect to the server. Please try again later.";

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// An operation needed a signed-in session
    #[error("Not signed in")]
    NotAuthenticated,

    /// The persisted identity is not a valid identity record
    #[error("Persisted session is corrupt: {0}")]
    CorruptSession(String),

    /// The API refused the request
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The API could not be reached
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Password validation failed: {0}")]
    PasswordValidation(#[from] PasswordPolicyError),

    /// A form field other than email/password is unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Rejection carrying the server message, or the default one
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
        AuthError::Rejected { status, message }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::NotAuthenticated => ErrorKind::Unauthorized,
            AuthError::Rejected { status, .. } => ErrorKind::from_status(*status),
            AuthError::Network(_) => ErrorKind::ServiceUnavailable,
            AuthError::InvalidEmail(_)
            | AuthError::PasswordValidation(_)
            | AuthError::InvalidInput(_) => ErrorKind::BadRequest,
            AuthError::CorruptSession(_)
            | AuthError::Storage(_)
            | AuthError::Config(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::Network(_) => err.with_hint(NETWORK_ERROR_MESSAGE),
            AuthError::NotAuthenticated => err.with_hint("Sign in again"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Session storage error");
            }
            AuthError::Internal(msg) | AuthError::Config(msg) => {
                tracing::error!(message = %msg, "Access internal error");
            }
            AuthError::CorruptSession(reason) => {
                tracing::warn!(reason = %reason, "Corrupt persisted session");
            }
            AuthError::Network(msg) => {
                tracing::warn!(message = %msg, "Auth API unreachable");
            }
            AuthError::Rejected { status, .. } if self.kind().is_server_error() => {
                tracing::error!(status, "Auth API failed");
            }
            AuthError::Rejected { status, .. } => {
                tracing::info!(status, "Auth request rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Access error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let app = err.to_app_error();
        match err {
            AuthError::Storage(source) => app.with_source(source),
            AuthError::PasswordValidation(source) => app.with_source(source),
            _ => app,
        }
    }
}

impl From<ClientError> for AuthError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Rejected { status, message } => AuthError::rejected(status, message),
            ClientError::Network(e) => AuthError::Network(e.to_string()),
            ClientError::InvalidToken => AuthError::NotAuthenticated,
            ClientError::Setup(msg) => AuthError::Config(msg),
            ClientError::Decode(e) => AuthError::Internal(format!("Unexpected API response: {}", e)),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::InvalidInput(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}
