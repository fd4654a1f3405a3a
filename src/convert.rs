//! Numeric conversion between the RGB and HSL color spaces, the notation
//! classifier, and the top-level string converter.
//!
//! Conversions only operate on the 3 color components; alpha is carried
//! through untouched. RGB is the pivot space: hex is a reinterpretation of
//! RGB channels, and rgb↔hsl goes through the numeric kernels below.

use crate::color::{Color, ColorType, Component, Components, Space};
use crate::math::{channel_to_u8, normalize, round2};
use crate::parse::{
    extract_data_from_hsl, extract_data_from_rgb, is_hex_color, is_hsl_color, is_rgb_color,
    parse_hex,
};

mod util {
    use crate::color::{Component, Components};
    use crate::math::{almost_zero, normalize, normalize_hue};

    /// Convert from RGB notation to HSL notation. Components are on the
    /// unit scale; the returned hue is in degrees and NaN when powerless.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            Component::NAN
        };

        let lightness = (min + max) / 2.0;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation. Hue is in degrees and is
    /// normalized modulo 360 before sector computation, so 360 behaves the
    /// same as 0; saturation/lightness and the output channels are on the
    /// unit scale.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }
}

/// Convert an HSL tuple (hue in degrees, saturation/lightness in percent) to
/// integer RGB channels in [0, 255].
pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> [u8; 3] {
    let rgb = util::hsl_to_rgb(&Components(hue, saturation / 100.0, lightness / 100.0));
    [
        channel_to_u8(rgb.0 * 255.0),
        channel_to_u8(rgb.1 * 255.0),
        channel_to_u8(rgb.2 * 255.0),
    ]
}

/// Convert RGB channels in [0, 255] to an HSL tuple: hue rounded to the
/// nearest degree, saturation/lightness in percent rounded to 2 decimals.
/// An achromatic input yields hue 0 and saturation 0.
pub fn rgb_to_hsl(red: Component, green: Component, blue: Component) -> (u16, Component, Component) {
    let scale = |v: Component| num_traits::clamp(v, 0.0, 255.0) / 255.0;
    let hsl = util::rgb_to_hsl(&Components(scale(red), scale(green), scale(blue)));
    (
        normalize(hsl.0).round() as u16,
        round2(hsl.1 * 100.0),
        round2(hsl.2 * 100.0),
    )
}

/// Format RGB channels and an optional alpha fraction as an 8-digit hex
/// string. Alpha defaults to `ff` when absent.
pub fn rgb_to_hex(red: u8, green: u8, blue: u8, alpha: Option<Component>) -> String {
    Color::new(
        Space::Rgb,
        Component::from(red),
        Component::from(green),
        Component::from(blue),
        alpha,
    )
    .to_hex_string()
}

impl Color {
    /// Convert this color from its current color space to the specified
    /// color space. The converted components are in canonical rounded form:
    /// integer RGB channels, integer hue, saturation/lightness rounded to 2
    /// decimals.
    pub fn to_space(&self, space: Space) -> Self {
        if self.space == space {
            return self.clone();
        }

        match (self.space, space) {
            (Space::Rgb, Space::Hsl) => {
                let Components(r, g, b) = self.components;
                let (h, s, l) = rgb_to_hsl(r, g, b);
                Color::new(Space::Hsl, Component::from(h), s, l, self.alpha())
            }
            (Space::Hsl, Space::Rgb) => {
                let Components(h, s, l) = self.components;
                let [r, g, b] = hsl_to_rgb(h, s, l);
                Color::new(
                    Space::Rgb,
                    Component::from(r),
                    Component::from(g),
                    Component::from(b),
                    self.alpha(),
                )
            }
            _ => self.clone(),
        }
    }
}

/// Decide which of the supported notations a string is written in.
pub fn get_color_type(value: &str) -> ColorType {
    if is_hex_color(value) {
        ColorType::Hex
    } else if is_rgb_color(value) {
        ColorType::Rgb
    } else if is_hsl_color(value) {
        ColorType::Hsl
    } else {
        ColorType::Unknown
    }
}

/// Parse a string already classified as one of the known notations into a
/// [`Color`] carrier.
pub(crate) fn parse_known(value: &str) -> Option<Color> {
    let (space, components, alpha) = match get_color_type(value) {
        ColorType::Hex => {
            let (components, alpha) = parse_hex(value).ok()?;
            (Space::Rgb, components, alpha)
        }
        ColorType::Rgb => {
            let (components, alpha) = extract_data_from_rgb(value).ok()?;
            (Space::Rgb, components, alpha)
        }
        ColorType::Hsl => {
            let (components, alpha) = extract_data_from_hsl(value).ok()?;
            (Space::Hsl, components, alpha)
        }
        ColorType::Unknown => return None,
    };
    let Components(c0, c1, c2) = components;
    Some(Color::new(space, c0, c1, c2, alpha))
}

/// Serialize a color into the canonical string form of the given notation.
/// Returns `None` for [`ColorType::Unknown`].
pub(crate) fn serialize(color: &Color, target: ColorType) -> Option<String> {
    match target {
        ColorType::Hex => Some(color.to_hex_string()),
        ColorType::Rgb => Some(color.to_rgb_string()),
        ColorType::Hsl => Some(color.to_hsl_string()),
        ColorType::Unknown => None,
    }
}

/// Convert a color string into the target notation's canonical form.
///
/// Fail-soft: when the input matches no supported grammar, the target is
/// [`ColorType::Unknown`], or the input is already in the target notation,
/// the input is returned unchanged. This function never fails.
pub fn convert_color(value: &str, target: ColorType) -> String {
    let source = get_color_type(value);
    if source == ColorType::Unknown || target == ColorType::Unknown || source == target {
        return value.to_string();
    }
    parse_known(value)
        .and_then(|color| serialize(&color, target))
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hsl_to_rgb_conversion() {
        const TESTS: &[([Component; 3], [u8; 3])] = &[
            ([0.0, 0.0, 0.0], [0, 0, 0]),
            ([90.0, 50.0, 50.0], [128, 191, 64]),
            ([180.0, 32.0, 95.0], [238, 246, 246]),
            ([360.0, 100.0, 100.0], [255, 255, 255]),
        ];
        for &([h, s, l], expected) in TESTS {
            assert_eq!(hsl_to_rgb(h, s, l), expected);
        }
    }

    #[test]
    fn rgb_to_hsl_conversion() {
        const TESTS: &[([Component; 3], (u16, Component, Component))] = &[
            ([0.0, 0.0, 0.0], (0, 0.0, 0.0)),
            ([128.0, 191.0, 64.0], (90, 49.8, 50.0)),
            ([238.0, 246.0, 246.0], (180, 30.77, 94.9)),
            ([255.0, 255.0, 255.0], (0, 0.0, 100.0)),
        ];
        for &([r, g, b], (hue, saturation, lightness)) in TESTS {
            let (h, s, l) = rgb_to_hsl(r, g, b);
            assert_eq!(h, hue);
            assert_component_eq!(s, saturation);
            assert_component_eq!(l, lightness);
        }
    }

    #[test]
    fn rgb_to_hex_formatting() {
        const TESTS: &[([u8; 3], &str)] = &[
            ([0, 0, 0], "#000000ff"),
            ([128, 191, 64], "#80bf40ff"),
            ([238, 246, 246], "#eef6f6ff"),
            ([255, 255, 255], "#ffffffff"),
        ];
        for &([r, g, b], expected) in TESTS {
            assert_eq!(rgb_to_hex(r, g, b, None), expected);
        }
        assert_eq!(rgb_to_hex(143, 90, 238, Some(0.8)), "#8f5aeecc");
    }

    #[test]
    fn classifies_notations() {
        const TESTS: &[(&str, ColorType)] = &[
            ("red", ColorType::Unknown),
            ("rgb(1,2,3)", ColorType::Rgb),
            ("rgba(1,2,3,0.5)", ColorType::Rgb),
            ("hsl(1deg 2% 3%)", ColorType::Hsl),
            ("hsla(360deg 2% 3% / 0.5)", ColorType::Hsl),
            ("#000", ColorType::Hex),
            ("#111111", ColorType::Hex),
            ("#aaaaaaaa", ColorType::Hex),
        ];
        for &(input, expected) in TESTS {
            assert_eq!(get_color_type(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn unknown_input_passes_through() {
        const TESTS: &[&str] = &[
            "red",
            "123",
            "#12",
            "red-yellow",
            "#15689",
            "rgb(1,x,13)",
            "hsla(#ff,#aa)",
        ];
        for &input in TESTS {
            assert_eq!(convert_color(input, ColorType::Hex), input);
        }
    }

    #[test]
    fn unknown_target_passes_through() {
        for target in ["hexa", "rrggbb", "unknown", "cyq"] {
            let target = target.parse::<ColorType>().unwrap();
            assert_eq!(convert_color("red", target), "red");
        }
    }

    #[test]
    fn same_target_passes_through() {
        const TESTS: &[(&str, ColorType)] = &[
            ("rgb(0,0,0)", ColorType::Rgb),
            ("rgba(0,0,0,1)", ColorType::Rgb),
            ("hsl(0deg 0% 0%)", ColorType::Hsl),
            ("hsla(0deg 0% 0% / 1)", ColorType::Hsl),
            ("#ccc", ColorType::Hex),
            ("#121212", ColorType::Hex),
            ("#12121299", ColorType::Hex),
        ];
        for &(input, target) in TESTS {
            assert_eq!(convert_color(input, target), input);
        }
    }

    #[test]
    fn hex_to_rgb() {
        const TESTS: &[(&str, &str)] = &[
            ("#000", "rgba(0,0,0,1)"),
            ("#abc", "rgba(170,187,204,1)"),
            ("#121212", "rgba(18,18,18,1)"),
            ("#ababab", "rgba(171,171,171,1)"),
            ("#ababab22", "rgba(171,171,171,0.13)"),
            ("#8f5aeecc", "rgba(143,90,238,0.8)"),
        ];
        for &(input, expected) in TESTS {
            assert_eq!(convert_color(input, ColorType::Rgb), expected);
        }
    }

    #[test]
    fn hex_to_hsl() {
        const TESTS: &[(&str, &str)] = &[
            ("#000", "hsla(0deg 0% 0% / 1)"),
            ("#abc", "hsla(210deg 25% 73.33% / 1)"),
            ("#ff0000", "hsla(0deg 100% 50% / 1)"),
            ("#ff0000ab", "hsla(0deg 100% 50% / 0.67)"),
            ("#ababab", "hsla(0deg 0% 67.06% / 1)"),
            ("#ababab22", "hsla(0deg 0% 67.06% / 0.13)"),
            ("#8f5aeecc", "hsla(261deg 81.32% 64.31% / 0.8)"),
        ];
        for &(input, expected) in TESTS {
            assert_eq!(convert_color(input, ColorType::Hsl), expected);
        }
    }

    #[test]
    fn rgb_to_hsl_strings() {
        const TESTS: &[(&str, &str)] = &[
            ("rgb(0,0,0)", "hsla(0deg 0% 0% / 1)"),
            ("rgb(50,120,70)", "hsla(137deg 41.18% 33.33% / 1)"),
            ("rgb(20,40,60)", "hsla(210deg 50% 15.69% / 1)"),
            ("rgb(255,255,255)", "hsla(0deg 0% 100% / 1)"),
        ];
        for &(input, expected) in TESTS {
            assert_eq!(convert_color(input, ColorType::Hsl), expected);
        }
    }

    #[test]
    fn rgb_to_hex_strings() {
        const TESTS: &[(&str, &str)] = &[
            ("rgba(0,0,0,1)", "#000000ff"),
            ("rgba(170,187,204,1)", "#aabbccff"),
            ("rgba(18,18,18,1)", "#121212ff"),
            ("rgba(171,171,171,1)", "#abababff"),
            ("rgba(171,171,171,0.13)", "#ababab21"),
            ("rgba(143,90,238,0.8)", "#8f5aeecc"),
        ];
        for &(input, expected) in TESTS {
            assert_eq!(convert_color(input, ColorType::Hex), expected);
        }
    }

    #[test]
    fn hsl_to_hex_strings() {
        const TESTS: &[(&str, &str)] = &[
            ("hsl(0deg 0% 0%)", "#000000ff"),
            ("hsl(210deg 25% 73%)", "#a9bacbff"),
            ("hsl(0deg 100% 50%)", "#ff0000ff"),
            ("hsla(0deg 100% 50% / 0.67)", "#ff0000ab"),
            ("hsla(0deg 0% 67% / 1)", "#abababff"),
            ("hsla(0deg 0% 67% / 0.13)", "#ababab21"),
            ("hsla(261deg 81% 64% / 0.8)", "#8d59eecc"),
        ];
        for &(input, expected) in TESTS {
            assert_eq!(convert_color(input, ColorType::Hex), expected);
        }
    }

    #[test]
    fn hsl_to_rgb_strings() {
        const TESTS: &[(&str, &str)] = &[
            ("hsl(0deg 0% 0%)", "rgba(0,0,0,1)"),
            ("hsl(137deg 41% 33%)", "rgba(50,119,69,1)"),
            ("hsla(210deg 50% 15% / 0.5)", "rgba(19,38,57,0.5)"),
            ("hsla(0deg 0% 100% / 1)", "rgba(255,255,255,1)"),
            ("hsla(0deg 0% 100% / 0.33)", "rgba(255,255,255,0.33)"),
        ];
        for &(input, expected) in TESTS {
            assert_eq!(convert_color(input, ColorType::Rgb), expected);
        }
    }

    #[test]
    fn hue_boundary_is_normalized() {
        // 360 behaves the same as 0 for conversion purposes.
        assert_eq!(
            convert_color("hsl(360deg 100% 50%)", ColorType::Hex),
            convert_color("hsl(0deg 100% 50%)", ColorType::Hex),
        );
    }
}
