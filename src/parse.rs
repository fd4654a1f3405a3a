//! Hand-written grammar recognizers and extractors for the three color
//! notations.
//!
//! Each notation is recognized with a small byte cursor rather than a regex,
//! so the accepted character classes and separators are explicit: the
//! functional forms take a shared numeric token of 1 to 3 integer digits with
//! an optional fraction, commas may be followed by at most one space, and the
//! hsl components carry literal `deg`/`%` suffixes separated by single
//! spaces. The form predicates check shape only; the stricter `*_color`
//! combinators also check component ranges.

use std::fmt;

use crate::color::{Component, Components};
use crate::math::round2;

/// The inclusive upper bound the rgb range check accepts for a channel.
///
/// This is 256, not 255, faithfully preserving the original grammar's
/// off-by-one leniency. Conversions still clamp to 255, so the extra value
/// never reaches serialized output.
const RGB_CHANNEL_ACCEPT_MAX: Component = 256.0;

/// Error returned when a string does not match the expected color grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The hex digit count is not one of 3, 4, 6 or 8.
    InvalidLength,
    /// A character outside `[0-9a-fA-F]` appeared in a hex color.
    InvalidHex,
    /// The string is not a well-formed `rgb()`/`rgba()` function.
    InvalidRgbFunction,
    /// The string is not a well-formed `hsl()`/`hsla()` function.
    InvalidHslFunction,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidLength => "invalid hex length",
            Self::InvalidHex => "invalid hex digits",
            Self::InvalidRgbFunction => "invalid rgb()/rgba() function",
            Self::InvalidHslFunction => "invalid hsl()/hsla() function",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parse a hex color into channel components in [0, 255] and an optional
/// alpha fraction, rounded to 2 decimals.
///
/// The allowed forms are `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.
pub(crate) fn parse_hex(value: &str) -> Result<(Components, Option<Component>), ParseError> {
    use ParseError::*;

    let digits = value.strip_prefix('#').ok_or(InvalidHex)?.as_bytes();

    let nibble2 = |hi: u8, lo: u8| -> Result<u8, ParseError> {
        let h = nibble(hi).ok_or(InvalidHex)?;
        let l = nibble(lo).ok_or(InvalidHex)?;
        Ok(h << 4 | l)
    };

    let (r, g, b, a) = match digits.len() {
        3 | 4 => {
            let r = nibble(digits[0]).ok_or(InvalidHex)?;
            let g = nibble(digits[1]).ok_or(InvalidHex)?;
            let b = nibble(digits[2]).ok_or(InvalidHex)?;
            let a = match digits.get(3) {
                Some(&d) => Some(nibble(d).ok_or(InvalidHex)? * 17),
                None => None,
            };
            (r * 17, g * 17, b * 17, a)
        }
        6 | 8 => {
            let r = nibble2(digits[0], digits[1])?;
            let g = nibble2(digits[2], digits[3])?;
            let b = nibble2(digits[4], digits[5])?;
            let a = match digits.get(6) {
                Some(&hi) => Some(nibble2(hi, digits[7])?),
                None => None,
            };
            (r, g, b, a)
        }
        _ => return Err(InvalidLength),
    };

    let components = Components(Component::from(r), Component::from(g), Component::from(b));
    let alpha = a.map(|a| round2(Component::from(a) / 255.0));
    Ok((components, alpha))
}

/// True iff the string is `#` followed by exactly 3, 4, 6 or 8 hex digits.
pub fn is_hex_color(value: &str) -> bool {
    parse_hex(value).is_ok()
}

/// Scan a numeric token: 1 to 3 integer digits, optionally followed by `.`
/// and one or more fraction digits. No sign, no exponent.
fn scan_number(bytes: &[u8], mut pos: usize) -> Option<(Component, usize)> {
    let start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = pos - start;
    if int_digits == 0 || int_digits > 3 {
        return None;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == frac_start {
            return None;
        }
    }
    let text = std::str::from_utf8(&bytes[start..pos]).ok()?;
    let value = text.parse::<Component>().ok()?;
    Some((value, pos))
}

/// Eat a comma separator: `,` followed by at most one space.
fn eat_comma(bytes: &[u8], pos: usize) -> Option<usize> {
    if bytes.get(pos) != Some(&b',') {
        return None;
    }
    let mut pos = pos + 1;
    if bytes.get(pos) == Some(&b' ') {
        pos += 1;
    }
    Some(pos)
}

fn eat_literal(bytes: &[u8], pos: usize, literal: &[u8]) -> Option<usize> {
    if bytes.len() >= pos + literal.len() && &bytes[pos..pos + literal.len()] == literal {
        Some(pos + literal.len())
    } else {
        None
    }
}

/// Parse the argument list of an rgb/rgba function: three comma-separated
/// numbers, with an optional fourth alpha number.
fn comma_args(args: &[u8]) -> Option<(Components, Option<Component>)> {
    let (c0, pos) = scan_number(args, 0)?;
    let pos = eat_comma(args, pos)?;
    let (c1, pos) = scan_number(args, pos)?;
    let pos = eat_comma(args, pos)?;
    let (c2, mut pos) = scan_number(args, pos)?;

    let alpha = if pos < args.len() && args[pos] == b',' {
        let p = eat_comma(args, pos)?;
        let (a, p) = scan_number(args, p)?;
        pos = p;
        Some(a)
    } else {
        None
    };

    if pos == args.len() {
        Some((Components(c0, c1, c2), alpha))
    } else {
        None
    }
}

fn rgb_args(value: &str) -> Option<Components> {
    let args = value.strip_prefix("rgb(")?.strip_suffix(')')?;
    match comma_args(args.as_bytes())? {
        (components, None) => Some(components),
        (_, Some(_)) => None,
    }
}

fn rgba_args(value: &str) -> Option<(Components, Option<Component>)> {
    let args = value.strip_prefix("rgba(")?.strip_suffix(')')?;
    comma_args(args.as_bytes())
}

/// Parse the argument list of an hsl/hsla function: `Hdeg S% L%` separated
/// by single spaces, optionally followed by ` / A` when `allow_alpha` is
/// set.
fn hsl_args(args: &[u8], allow_alpha: bool) -> Option<(Components, Option<Component>)> {
    let (h, pos) = scan_number(args, 0)?;
    let pos = eat_literal(args, pos, b"deg ")?;
    let (s, pos) = scan_number(args, pos)?;
    let pos = eat_literal(args, pos, b"% ")?;
    let (l, pos) = scan_number(args, pos)?;
    let mut pos = eat_literal(args, pos, b"%")?;

    let alpha = if allow_alpha && pos < args.len() {
        let p = eat_literal(args, pos, b" / ")?;
        let (a, p) = scan_number(args, p)?;
        pos = p;
        Some(a)
    } else {
        None
    };

    if pos == args.len() {
        Some((Components(h, s, l), alpha))
    } else {
        None
    }
}

fn hsl_form_args(value: &str) -> Option<Components> {
    let args = value.strip_prefix("hsl(")?.strip_suffix(')')?;
    hsl_args(args.as_bytes(), false).map(|(components, _)| components)
}

fn hsla_form_args(value: &str) -> Option<(Components, Option<Component>)> {
    let args = value.strip_prefix("hsla(")?.strip_suffix(')')?;
    hsl_args(args.as_bytes(), true)
}

/// True iff the string matches `rgb(n,n,n)`.
pub fn is_rgb_form(value: &str) -> bool {
    rgb_args(value).is_some()
}

/// True iff the string matches `rgba(n,n,n[,a])`. The alpha component is
/// optional.
pub fn is_rgba_form(value: &str) -> bool {
    rgba_args(value).is_some()
}

/// True iff the string matches `hsl(ndeg n% n%)`.
pub fn is_hsl_form(value: &str) -> bool {
    hsl_form_args(value).is_some()
}

/// True iff the string matches `hsla(ndeg n% n%[ / a])`. The alpha component
/// is optional.
pub fn is_hsla_form(value: &str) -> bool {
    hsla_form_args(value).is_some()
}

/// Extract the numeric components of an rgb/rgba string, alpha present iff
/// the string carries one. Component ranges are not checked here.
pub fn extract_data_from_rgb(value: &str) -> Result<(Components, Option<Component>), ParseError> {
    rgb_args(value)
        .map(|components| (components, None))
        .or_else(|| rgba_args(value))
        .ok_or(ParseError::InvalidRgbFunction)
}

/// Extract the numeric components of an hsl/hsla string, alpha present iff
/// the string carries one. Component ranges are not checked here.
pub fn extract_data_from_hsl(value: &str) -> Result<(Components, Option<Component>), ParseError> {
    hsl_form_args(value)
        .map(|components| (components, None))
        .or_else(|| hsla_form_args(value))
        .ok_or(ParseError::InvalidHslFunction)
}

fn alpha_in_range(alpha: Option<Component>) -> bool {
    alpha.map_or(true, |a| (0.0..=1.0).contains(&a))
}

/// True iff the string is an rgb/rgba form whose components are within
/// range: channels at most [`RGB_CHANNEL_ACCEPT_MAX`], alpha in [0, 1].
pub fn is_rgb_color(value: &str) -> bool {
    let Ok((Components(r, g, b), alpha)) = extract_data_from_rgb(value) else {
        return false;
    };
    r <= RGB_CHANNEL_ACCEPT_MAX
        && g <= RGB_CHANNEL_ACCEPT_MAX
        && b <= RGB_CHANNEL_ACCEPT_MAX
        && alpha_in_range(alpha)
}

/// True iff the string is an hsl/hsla form whose components are within
/// range: hue at most 360, saturation/lightness at most 100, alpha in
/// [0, 1].
pub fn is_hsl_color(value: &str) -> bool {
    let Ok((Components(h, s, l), alpha)) = extract_data_from_hsl(value) else {
        return false;
    };
    h <= 360.0 && s <= 100.0 && l <= 100.0 && alpha_in_range(alpha)
}
