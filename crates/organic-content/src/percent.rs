//! Percentage helpers shared by the progress derivations.
//!
//! Every progress bar in the game is a ratio clamped to `0.0..=100.0`.

/// `current / target` as a percentage clamped to `0.0..=100.0`.
///
/// A zero target counts as already reached.
#[allow(clippy::cast_precision_loss)]
pub fn percent_of(current: u64, target: u64) -> f64 {
    if target == 0 {
        return 100.0;
    }
    clamp_percent(current as f64 / target as f64 * 100.0)
}

/// Clamp a raw percentage into `0.0..=100.0`, mapping NaN to 0.
pub fn clamp_percent(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn half_way() {
        assert_close(percent_of(50, 100), 50.0);
    }

    #[test]
    fn over_target_clamps() {
        assert_close(percent_of(700, 500), 100.0);
    }

    #[test]
    fn zero_target_is_complete() {
        assert_close(percent_of(0, 0), 100.0);
    }

    #[test]
    fn negative_and_nan_clamp_to_zero() {
        assert_close(clamp_percent(-12.5), 0.0);
        assert_close(clamp_percent(f64::NAN), 0.0);
    }
}
