//! Navigation menu view model

use serde::Serialize;

use crate::domain::entity::session::Session;
use crate::domain::navigation::{self, NavEntry};
use crate::domain::route;

/// Menu as the navbar renders it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationMenu {
    pub entries: &'static [NavEntry],
    /// Index of the entry matching the current path
    pub active: Option<usize>,
    pub show_logout: bool,
}

impl NavigationMenu {
    pub fn build(session: &Session, current_path: &str) -> Self {
        let entries = navigation::resolve_navigation(session);
        let current = route::normalize_path(current_path);
        Self {
            entries,
            active: entries.iter().position(|entry| entry.path == current),
            show_logout: session.is_authenticated(),
        }
    }

    pub fn active_entry(&self) -> Option<&NavEntry> {
        self.active.and_then(|i| self.entries.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{identity::Identity, session::AuthSession};
    use crate::domain::value_object::credential::Credential;

    #[test]
    fn test_signed_out_menu() {
        let menu = NavigationMenu::build(&Session::Unauthenticated, "/login");
        assert!(!menu.show_logout);
        assert_eq!(menu.active_entry().map(|e| e.label), Some("Login"));
    }

    #[test]
    fn test_signed_in_menu() {
        let identity = Identity::new("1", "u", "u@example.org").with_role("system_auditor");
        let session: Session = AuthSession::new(identity, Credential::new("t").unwrap()).into();

        let menu = NavigationMenu::build(&session, "/dashboard/");
        assert!(menu.show_logout);
        assert_eq!(menu.active, Some(1));

        let menu = NavigationMenu::build(&session, "/donate");
        assert_eq!(menu.active, None);
    }

    #[test]
    fn test_menu_serializes() {
        let menu = NavigationMenu::build(&Session::Unauthenticated, "/");
        let value = serde_json::to_value(&menu).unwrap();
        assert_eq!(value["active"], 0);
        assert_eq!(value["showLogout"], false);
        assert_eq!(value["entries"][0]["icon"], "home");
    }
}
