//! Property tests for the invariants the conversion pipeline promises:
//! round-trip stability, identity pass-through, alpha preservation, and the
//! fixed palette boundaries.

use proptest::prelude::*;

use tinct::{
    convert_color, extract_data_from_rgb, generate_color_tonal_palette,
    generate_complementary_color, get_color_type, hsl_to_rgb, rgb_to_hsl, ColorType, Component,
};

fn channel_delta(a: u8, b: u8) -> i16 {
    (i16::from(a) - i16::from(b)).abs()
}

proptest! {
    /// RGB -> HSL -> RGB reproduces every channel within the rounding the
    /// integer-degree hue introduces: half a degree of hue error moves a
    /// fully saturated channel by up to 255/120, so the bound is 3.
    #[test]
    fn rgb_hsl_round_trip(r: u8, g: u8, b: u8) {
        let (h, s, l) = rgb_to_hsl(
            Component::from(r),
            Component::from(g),
            Component::from(b),
        );
        let [r2, g2, b2] = hsl_to_rgb(Component::from(h), s, l);
        prop_assert!(channel_delta(r, r2) <= 3, "red {r} -> {r2}");
        prop_assert!(channel_delta(g, g2) <= 3, "green {g} -> {g2}");
        prop_assert!(channel_delta(b, b2) <= 3, "blue {b} -> {b2}");
    }

    /// Converting a color into the notation it is already in returns the
    /// string unchanged, whatever its spacing or alpha variant.
    #[test]
    fn same_type_conversion_is_identity(r in 0u16..=256, g in 0u16..=256, b in 0u16..=256) {
        let color = format!("rgb({r},{g},{b})");
        prop_assert_eq!(convert_color(&color, ColorType::Rgb), color);

        let color = format!("rgb({r}, {g}, {b})");
        prop_assert_eq!(convert_color(&color, ColorType::Rgb), color);
    }

    /// Strings that match none of the grammars pass through conversion
    /// unchanged for every target.
    #[test]
    fn unknown_input_passes_through(s in "[a-z -]{0,12}") {
        prop_assume!(get_color_type(&s) == ColorType::Unknown);
        for target in [ColorType::Hex, ColorType::Rgb, ColorType::Hsl, ColorType::Unknown] {
            prop_assert_eq!(&convert_color(&s, target), &s);
        }
    }

    /// An explicit alpha survives a change of notation within 2-decimal
    /// rounding.
    #[test]
    fn alpha_survives_conversion(r: u8, g: u8, b: u8, a: u8) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}{a:02x}");
        let rgb = convert_color(&hex, ColorType::Rgb);
        let (_, alpha) = extract_data_from_rgb(&rgb).expect("canonical rgba output");
        let alpha = alpha.expect("alpha is preserved");
        let expected = Component::from(a) / 255.0;
        prop_assert!((alpha - expected).abs() <= 0.005, "alpha {expected} -> {alpha}");
    }

    /// Tone 0 is always pure black and tone 100 pure white.
    #[test]
    fn palette_boundaries_are_black_and_white(r: u8, g: u8, b: u8) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        let palette = generate_color_tonal_palette(&hex, ColorType::Hex);
        prop_assert_eq!(&palette[&0], "#000000ff");
        prop_assert_eq!(&palette[&100], "#ffffffff");
    }

    /// Rotating the hue by 180 degrees twice lands back on the original
    /// color, within the rounding the two hsl round trips introduce.
    #[test]
    fn complement_is_involutive(r: u8, g: u8, b: u8) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        let once = generate_complementary_color(&hex, ColorType::Hex);
        let twice = generate_complementary_color(&once, ColorType::Hex);

        let channel = |s: &str, i: usize| u8::from_str_radix(&s[i..i + 2], 16).unwrap();
        for i in [1, 3, 5] {
            let expected = channel(&hex, i);
            let actual = channel(&twice, i);
            prop_assert!(
                channel_delta(expected, actual) <= 6,
                "channel at {i}: {expected} -> {actual} ({hex} -> {once} -> {twice})"
            );
        }
    }
}
