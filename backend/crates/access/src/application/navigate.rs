//! Navigate Use Case
//!
//! Resolves a requested path against the route catalogue and the access
//! gate. Open routes render for everyone; guarded routes go through
//! [`guard::evaluate`].

use crate::domain::entity::session::Session;
use crate::domain::guard::{self, AccessDecision};
use crate::domain::route::{self, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Render(&'static Route),
    Redirect { to: &'static str },
    NotFound,
}

pub fn navigate(session: &Session, path: &str) -> NavigationOutcome {
    let Some(route) = route::find_route(path) else {
        tracing::debug!(path, "No route");
        return NavigationOutcome::NotFound;
    };

    let Some(guard) = route.guard else {
        return NavigationOutcome::Render(route);
    };

    match guard::evaluate(session, &guard) {
        AccessDecision::Render => NavigationOutcome::Render(route),
        AccessDecision::Redirect(to) => NavigationOutcome::Redirect { to: to.path() },
    }
}
