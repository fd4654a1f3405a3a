//! Derived-color generators built on top of the converter: complements,
//! tonal palettes, contrast-safe inverses, and opacity rewriting.
//!
//! All generators are fail-soft like [`convert_color`](crate::convert_color):
//! input that matches no supported grammar is returned unchanged.

use std::collections::BTreeMap;

use crate::color::{Color, ColorType, Component, Components, Space};
use crate::convert::{parse_known, serialize};
use crate::math::{channel_to_u8, normalize_hue, unit_to_byte};
use crate::parse::parse_hex;

/// The lightness percentages a tonal palette is generated at.
const TONE_STOPS: [u8; 13] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

/// Rewrite the alpha channel of a hex color, leaving the RGB channels
/// untouched. The opacity fraction is clamped into [0, 1] and the result is
/// always an 8-digit hex string.
pub fn change_color_opacity(hex_color: &str, opacity: Component) -> String {
    let Ok((Components(r, g, b), _)) = parse_hex(hex_color) else {
        return hex_color.to_string();
    };
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        channel_to_u8(r),
        channel_to_u8(g),
        channel_to_u8(b),
        unit_to_byte(opacity),
    )
}

/// Generate the complementary color: hue rotated by 180 degrees, saturation,
/// lightness and alpha preserved, serialized in the target notation.
pub fn generate_complementary_color(color: &str, target: ColorType) -> String {
    let Some(parsed) = parse_known(color) else {
        return color.to_string();
    };
    let hsl = parsed.to_space(Space::Hsl);
    let Components(h, s, l) = hsl.components;
    let rotated = Color::new(Space::Hsl, normalize_hue(h + 180.0), s, l, hsl.alpha());
    serialize(&rotated, target).unwrap_or_else(|| color.to_string())
}

/// Generate a tonal palette: a mapping from tone stop to the color with its
/// lightness replaced by the stop percentage, hue and saturation preserved,
/// and alpha forced to full opacity. Tone 0 is pure black and tone 100 pure
/// white regardless of the input hue and saturation.
pub fn generate_color_tonal_palette(color: &str, target: ColorType) -> BTreeMap<u8, String> {
    let tone = |stop: u8| -> Option<String> {
        let hsl = parse_known(color)?.to_space(Space::Hsl);
        let Components(h, s, _) = hsl.components;
        let toned = Color::new(Space::Hsl, h, s, Component::from(stop), 1.0);
        serialize(&toned, target)
    };
    TONE_STOPS
        .iter()
        .map(|&stop| (stop, tone(stop).unwrap_or_else(|| color.to_string())))
        .collect()
}

/// Pick the readable overlay color for a hex background: `#000` when the
/// background is light, `#fff` when it is dark, judged by the weighted
/// channel luminance against the 8-bit midpoint.
pub fn generate_contrast_safe_color(hex_color: &str) -> String {
    let Ok((Components(r, g, b), _)) = parse_hex(hex_color) else {
        return hex_color.to_string();
    };
    let luminance = 0.299 * r + 0.587 * g + 0.114 * b;
    if luminance >= 128.0 { "#000" } else { "#fff" }.to_string()
}
