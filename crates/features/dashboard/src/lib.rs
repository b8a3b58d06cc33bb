//! Dashboard feature slice: the Dioxus application shell, its routes, and the
//! presentational components that go with it.
//!
//! The shell loads the translation bundle for the configured locale before
//! the first page renders; a missing bundle fails the render instead of
//! showing untranslated chrome.

mod app;
mod components;
mod layout;
mod pages;
mod route;

pub use app::{App, CurrentSession, DataEpoch};
pub use components::{LogoutButton, PlaceholderPage, ProgressBar, clamp_percent};
pub use layout::DashboardLayout;
pub use pages::{Budgets, Goals, Login, NotFound, Settings};
pub use route::Route;
