//! Shared Kernel - Domain-crossing minimal core
//!
//! The vocabulary every crate in the portal agrees on:
//! - Unified application error and result alias
//! - Error classification mapped onto HTTP status codes
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
