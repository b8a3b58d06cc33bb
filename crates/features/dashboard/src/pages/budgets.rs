use crate::components::PlaceholderPage;
use bhub_i18n::Bundle;
use dioxus::prelude::*;

#[component]
pub fn Budgets() -> Element {
    let bundle = use_context::<Bundle>();

    rsx! {
        PlaceholderPage {
            title: bundle.text("dashboard.budgets.title").to_owned(),
            subtitle: bundle.text("dashboard.budgets.subtitle").to_owned(),
        }
    }
}
