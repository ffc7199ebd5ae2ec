//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod navigate;
pub mod session_store;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use config::AccessConfig;
pub use navigate::{NavigationOutcome, navigate};
pub use session_store::SessionStore;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
