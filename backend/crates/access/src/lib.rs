//! Access (Session & Authorization) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session, roles, access gate, navigation tables, route catalogue
//! - `application/` - Session store and use cases
//! - `infra/` - Key-value storage persistence, RescueConnect API gateway
//! - `presentation/` - Navbar and login-form view models
//!
//! ## Features
//! - Persisted sign-in session (`"user"` identity + `"token"` credential)
//! - Route guards by role list or legacy admin-only flag
//! - Per-role navigation menus
//! - Sign-in / sign-up against the RescueConnect API
//!
//! ## Access Model
//! - Signed-out users are sent to `/login` from every guarded route
//! - Signed-in users without the required role are sent to `/dashboard`
//! - An unrecognised role sees the citizen menu but passes no role check

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    AccessConfig, NavigationOutcome, SessionStore, SignInUseCase, SignUpUseCase, navigate,
};
pub use domain::{
    guard::evaluate,
    navigation::resolve_navigation,
    AccessDecision, AuthSession, Guard, Identity, Session,
};
pub use error::{AuthError, AuthResult};
pub use infra::{RescueApi, StorageSessionRepository};
pub use presentation::NavigationMenu;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}
