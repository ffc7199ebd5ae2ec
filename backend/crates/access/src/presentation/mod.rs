//! Presentation Layer
//!
//! View models for the navbar and login form.

pub mod menu;
pub mod notice;

pub use menu::NavigationMenu;
pub use notice::{FormMode, Notice, NoticeVariant};
