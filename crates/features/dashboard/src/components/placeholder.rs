use bhub_i18n::Bundle;
use dioxus::prelude::*;

/// Static page body shared by the stub dashboard sections: a localized
/// heading and subtitle over a "coming soon" card.
#[component]
pub fn PlaceholderPage(title: String, subtitle: String) -> Element {
    let bundle = use_context::<Bundle>();
    let coming_soon = bundle.text("dashboard.coming_soon").to_owned();

    rsx! {
        section { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }
            div { class: "card card-placeholder",
                p { "{coming_soon}" }
            }
        }
    }
}
