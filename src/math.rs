//! Math utility functions.

use crate::Component;

/// Round a value to 2 decimal places.
pub(crate) fn round2(value: Component) -> Component {
    (value * 100.0).round() / 100.0
}

/// Replace a NaN (powerless) component with 0.
pub(crate) fn normalize(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Normalize a hue into the [0, 360) range.
pub(crate) fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

pub(crate) fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-6
}

/// Clamp a fraction (e.g. alpha) into [0, 1].
pub(crate) fn clamp_unit(value: Component) -> Component {
    num_traits::clamp(normalize(value), 0.0, 1.0)
}

/// Round a channel value to the nearest integer in [0, 255].
pub(crate) fn channel_to_u8(value: Component) -> u8 {
    num_traits::clamp(normalize(value), 0.0, 255.0).round() as u8
}

/// Convert a fraction in [0, 1] to the nearest 8-bit byte value.
pub(crate) fn unit_to_byte(value: Component) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

/// Format a number with at most 2 decimal places, trailing zeros trimmed.
///
/// Goes through scaled integer math so that the output is identical for the
/// f32 and f64 component widths.
pub(crate) fn fmt_trimmed(value: Component) -> String {
    let scaled = (value * 100.0).round() as i64;
    let whole = scaled / 100;
    let frac = (scaled % 100).abs();
    if frac == 0 {
        format!("{whole}")
    } else if frac % 10 == 0 {
        format!("{whole}.{}", frac / 10)
    } else {
        format!("{whole}.{frac:02}")
    }
}
