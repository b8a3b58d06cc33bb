use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        main { class: "not-found",
            h1 { "404" }
            p { "No page matches /{path}" }
            Link { to: Route::Budgets {}, "Dashboard" }
        }
    }
}
