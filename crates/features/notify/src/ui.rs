use crate::{ToastEntry, Toasts};
use bhub_domain::toast::{ToastPresentation, ToastVariant};
use dioxus::prelude::*;
use std::time::Duration;

/// How often the host re-checks the queue for expired entries.
const PURGE_INTERVAL: Duration = Duration::from_millis(200);

const fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "toast toast-default",
        ToastVariant::Destructive => "toast toast-destructive",
    }
}

/// Renders the pending toast queue.
///
/// Expects a [`Toasts`] handle in context (provided at the application root).
/// The presentation strategy comes from configuration: a banner stack in the
/// corner, or a modal overlay showing the front of the queue.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_context::<Toasts>();
    let mut entries = use_signal(Vec::<ToastEntry>::new);

    use_future({
        let toasts = toasts.clone();
        move || {
            let toasts = toasts.clone();
            async move {
                loop {
                    toasts.purge_expired();
                    entries.set(toasts.snapshot());
                    tokio::time::sleep(PURGE_INTERVAL).await;
                }
            }
        }
    });

    match toasts.presentation() {
        ToastPresentation::Banner => rsx! {
            div { class: "toast-region", aria_live: "polite",
                for entry in entries() {
                    div { key: "{entry.id}", class: toast_class(entry.toast.variant),
                        div { class: "toast-title", "{entry.toast.title}" }
                        if let Some(description) = entry.toast.description.clone() {
                            div { class: "toast-description", "{description}" }
                        }
                        button {
                            class: "toast-dismiss",
                            onclick: {
                                let toasts = toasts.clone();
                                let id = entry.id.clone();
                                move |_| {
                                    toasts.dismiss(&id);
                                }
                            },
                            "\u{d7}"
                        }
                    }
                }
            }
        },
        ToastPresentation::Modal => rsx! {
            if let Some(entry) = entries().into_iter().next() {
                div { class: "toast-overlay",
                    div { class: toast_class(entry.toast.variant), role: "alertdialog",
                        div { class: "toast-title", "{entry.toast.title}" }
                        if let Some(description) = entry.toast.description.clone() {
                            div { class: "toast-description", "{description}" }
                        }
                        button {
                            class: "toast-dismiss",
                            onclick: {
                                let toasts = toasts.clone();
                                let id = entry.id.clone();
                                move |_| {
                                    toasts.dismiss(&id);
                                }
                            },
                            "OK"
                        }
                    }
                }
            }
        },
    }
}
