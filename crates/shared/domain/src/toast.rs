//! Transient notification model.
//!
//! A toast has no persistence and no identity of its own; queue entries are
//! keyed by an id assigned at enqueue time, never by position.

use serde::{Deserialize, Serialize};

/// Severity of a toast message.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// How pending toasts are surfaced to the user.
///
/// Selected by configuration, not by which module the caller imports.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPresentation {
    /// Inline banner stack rendered inside the page chrome.
    #[default]
    Banner,
    /// Modal overlay showing the front of the queue.
    Modal,
}

/// A short-lived, user-facing notification message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variant: ToastVariant,
}

impl Toast {
    /// Creates a toast with the default severity and no description.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), description: None, variant: ToastVariant::default() }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let toast = Toast::new("Saved")
            .description("Budget saved successfully")
            .variant(ToastVariant::Default);
        assert_eq!(toast.title, "Saved");
        assert_eq!(toast.description.as_deref(), Some("Budget saved successfully"));
        assert_eq!(toast.variant, ToastVariant::Default);
    }

    #[test]
    fn description_is_optional_in_wire_form() {
        let toast = Toast::new("Session expired").variant(ToastVariant::Destructive);
        let json = serde_json::to_value(&toast).expect("serialize");
        assert!(json.get("description").is_none());
        assert_eq!(json["variant"], "destructive");
    }
}
