use crate::layout::DashboardLayout;
use crate::pages::{Budgets, Goals, Login, NotFound, Settings};
use dioxus::prelude::*;

/// Application route table.
///
/// `/login` stands alone; the three dashboard sections share
/// [`DashboardLayout`] for navigation chrome and the toast host.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[redirect("/", || Route::Budgets {})]
    #[route("/login")]
    Login {},
    #[layout(DashboardLayout)]
    #[route("/dashboard/budgets")]
    Budgets {},
    #[route("/dashboard/goals")]
    Goals {},
    #[route("/dashboard/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
