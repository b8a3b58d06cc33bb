use crate::components::PlaceholderPage;
use bhub_i18n::Bundle;
use dioxus::prelude::*;

#[component]
pub fn Settings() -> Element {
    let bundle = use_context::<Bundle>();

    rsx! {
        PlaceholderPage {
            title: bundle.text("dashboard.settings.title").to_owned(),
            subtitle: bundle.text("dashboard.settings.subtitle").to_owned(),
        }
    }
}
