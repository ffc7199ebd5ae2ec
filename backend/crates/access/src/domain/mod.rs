//! Domain Layer
//!
//! Entities, value objects, the access gate, navigation tables, the route
//! catalogue, and the persistence/gateway traits.

pub mod entity;
pub mod guard;
pub mod navigation;
pub mod repository;
pub mod route;
pub mod value_object;

// Re-exports
pub use entity::{
    identity::Identity,
    session::{AuthSession, Session},
};
pub use guard::{AccessDecision, Guard, GuardDescriptor, Redirect};
pub use navigation::{NavEntry, NavIcon};
pub use repository::{AuthGateway, SessionRepository};
pub use route::{Page, Route};
