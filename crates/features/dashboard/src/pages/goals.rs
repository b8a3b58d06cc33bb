use crate::components::PlaceholderPage;
use bhub_i18n::Bundle;
use dioxus::prelude::*;

#[component]
pub fn Goals() -> Element {
    let bundle = use_context::<Bundle>();

    rsx! {
        PlaceholderPage {
            title: bundle.text("dashboard.goals.title").to_owned(),
            subtitle: bundle.text("dashboard.goals.subtitle").to_owned(),
        }
    }
}
