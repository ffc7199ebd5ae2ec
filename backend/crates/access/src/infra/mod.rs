//! Infrastructure Layer
//!
//! Storage-backed session persistence and the HTTP API gateway.

pub mod dto;
pub mod http;
pub mod storage;

pub use http::RescueApi;
pub use storage::StorageSessionRepository;
