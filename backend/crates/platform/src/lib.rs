//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the client-side technical foundations:
//! - Durable key-value storage (the browser `localStorage` contract)
//! - JSON HTTP client for the RescueConnect API with bearer authentication
//! - Zeroized clear-text passwords for sign-in and sign-up forms

pub mod client;
pub mod password;
pub mod storage;
