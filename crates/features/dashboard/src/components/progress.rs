use dioxus::prelude::*;

/// Clamps a progress value to the renderable `0..=100` range.
///
/// `NaN` renders as an empty bar; infinities saturate at the nearest bound.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Horizontal progress bar.
///
/// Out-of-range values never overflow the track: the fill width is clamped,
/// so `-10.0` shows an empty bar and `150.0` a full one.
#[component]
pub fn ProgressBar(value: f64) -> Element {
    let percent = clamp_percent(value);

    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{percent}",
            div { class: "progress-fill", style: "width: {percent}%;" }
        }
    }
}
