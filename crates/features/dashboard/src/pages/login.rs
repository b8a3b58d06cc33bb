use crate::Route;
use bhub_i18n::Bundle;
use dioxus::prelude::*;

/// Landing screen after sign-out. Authentication itself lives elsewhere;
/// this page only offers the way back into the dashboard.
#[component]
pub fn Login() -> Element {
    let bundle = use_context::<Bundle>();
    let title = bundle.text("auth.login.title").to_owned();

    rsx! {
        main { class: "login",
            h1 { class: "login-title", "{title}" }
            Link { class: "login-enter", to: Route::Budgets {}, "BudgetHub" }
        }
    }
}
