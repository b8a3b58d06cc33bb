use bhub_dashboard::clamp_percent;
use proptest::prelude::*;

#[test]
fn negative_values_render_empty() {
    assert_eq!(clamp_percent(-10.0), 0.0);
}

#[test]
fn in_range_values_pass_through() {
    assert_eq!(clamp_percent(0.0), 0.0);
    assert_eq!(clamp_percent(50.0), 50.0);
    assert_eq!(clamp_percent(100.0), 100.0);
}

#[test]
fn overflow_saturates_at_full() {
    assert_eq!(clamp_percent(150.0), 100.0);
}

#[test]
fn non_finite_values_stay_renderable() {
    assert_eq!(clamp_percent(f64::NAN), 0.0);
    assert_eq!(clamp_percent(f64::NEG_INFINITY), 0.0);
    assert_eq!(clamp_percent(f64::INFINITY), 100.0);
}

proptest! {
    #[test]
    fn output_is_always_renderable(value in proptest::num::f64::ANY) {
        let clamped = clamp_percent(value);
        prop_assert!((0.0..=100.0).contains(&clamped));
        // Clamping is idempotent.
        prop_assert_eq!(clamp_percent(clamped), clamped);
    }
}
