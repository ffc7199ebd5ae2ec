//! Entity Module

pub mod credentials;
pub mod identity;
pub mod session;
