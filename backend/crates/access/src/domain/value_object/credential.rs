//! Credential Value Object
//!
//! The opaque bearer token the API issues on sign-in. The portal stores it
//! and replays it in `Authorization` headers; it never inspects it.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Bearer token
///
/// An empty token is not a credential: a session with one would read as
/// signed in while every API call fails.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> AppResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::bad_request("Credential token cannot be empty"));
        }
        Ok(Self(token))
    }

    /// Token text, for the `Authorization` header and persisted storage
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}
