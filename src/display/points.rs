use super::utils::{group_digits, NumberLocale};

const INFINITY: &str = "∞";

/// Formats a score for display using en-US digit grouping.
///
/// Absent values render as `"0"`. Fractions below one half round down to
/// `floor(value)`, everything else rounds up to `ceil(value)`. Negative values
/// use the same floor-based remainder, so `-1.5` becomes `"-1"`.
pub fn format_points(value: impl Into<Option<f64>>) -> String {
    format_points_in(value, &NumberLocale::EN_US)
}

/// Same as [`format_points`] with an explicit locale.
///
/// NaN renders as `"0"` and infinities as `"∞"` / `"-∞"`.
pub fn format_points_in(value: impl Into<Option<f64>>, locale: &NumberLocale) -> String {
    let value: Option<f64> = value.into();
    let Some(value) = value else {
        return "0".to_string();
    };

    if value.is_nan() {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            format!("-{}", INFINITY)
        } else {
            INFINITY.to_string()
        };
    }

    let rounded = round_half_up_from_floor(value);
    // ceil(-0.4) is -0.0
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    group_digits(&format!("{:.0}", rounded), locale.grouping_separator)
}

fn round_half_up_from_floor(value: f64) -> f64 {
    let whole = value.floor();
    let remainder = value - whole;

    if remainder < 0.5 {
        whole
    } else {
        value.ceil()
    }
}
