//! A [`Color`] represents a color value parsed from any of the supported
//! textual notations, along with the value types shared by the whole crate.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::math::{channel_to_u8, fmt_trimmed, unit_to_byte};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags to mark any missing components on a [`Color`].
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the alpha component of a [`Color`] is missing. A missing
        /// alpha serializes as full opacity.
        const ALPHA_IS_NONE = 1 << 0;
    }
}

/// The two numeric color spaces a [`Color`] can carry its components in.
///
/// RGB is the pivot space: hex notation is a direct reinterpretation of RGB
/// channels, and every cross-notation conversion routes through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Space {
    /// Channels in [0, 255], as in the sRGB color space.
    Rgb = 0,
    /// Hue in degrees [0, 360], saturation and lightness in percent [0, 100].
    Hsl = 1,
}

/// The textual notation a color string is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorType {
    /// Hexadecimal notation, `#rgb[a]` or `#rrggbb[aa]`.
    Hex = 0,
    /// Functional RGB notation, `rgb(...)` or `rgba(...)`.
    Rgb = 1,
    /// Functional HSL notation, `hsl(...)` or `hsla(...)`.
    Hsl = 2,
    /// A string that matches none of the supported grammars. Used as a
    /// sentinel for pass-through behavior.
    Unknown = 3,
}

impl ColorType {
    /// Get the name of this notation.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorType {
    type Err = Infallible;

    /// Total conversion: any string that is not one of the three known
    /// notation names maps to [`ColorType::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "hex" => Self::Hex,
            "rgb" => Self::Rgb,
            "hsl" => Self::Hsl,
            _ => Self::Unknown,
        })
    }
}

/// Struct that can hold a color in either of the supported color spaces.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up the color.
    pub components: Components,
    /// The alpha component of the color.
    pub alpha: Component,
    /// Holds any flags that might be enabled for this color.
    pub flags: Flags,
    /// The color space in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`]. The alpha component can take any value that
    /// converts into a [`ComponentDetails`], which automates marking it as
    /// missing:
    /// ```rust
    /// use tinct::{Color, Space};
    /// let c = Color::new(Space::Rgb, 255.0, 0.0, 0.0, None);
    /// assert!(c.alpha().is_none());
    /// ```
    pub fn new(
        space: Space,
        c0: Component,
        c1: Component,
        c2: Component,
        alpha: impl Into<ComponentDetails>,
    ) -> Self {
        let mut flags = Flags::empty();

        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            components: Components(c0, c1, c2),
            alpha,
            flags,
            space,
        }
    }

    /// Return the alpha component of the color, if it was given explicitly.
    pub fn alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }

    /// The alpha fraction this color serializes with. Missing alpha means
    /// full opacity.
    pub fn effective_alpha(&self) -> Component {
        self.alpha().unwrap_or(1.0)
    }

    /// Serialize into canonical hex notation: `#rrggbbaa`, lowercase, always
    /// 8 digits, alpha `ff` when missing.
    pub fn to_hex_string(&self) -> String {
        let rgb = self.to_space(Space::Rgb);
        let Components(r, g, b) = rgb.components;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel_to_u8(r),
            channel_to_u8(g),
            channel_to_u8(b),
            unit_to_byte(rgb.effective_alpha()),
        )
    }

    /// Serialize into canonical functional RGB notation: `rgba(R,G,B,A)`
    /// with integer channels and a trimmed decimal alpha.
    pub fn to_rgb_string(&self) -> String {
        let rgb = self.to_space(Space::Rgb);
        let Components(r, g, b) = rgb.components;
        format!(
            "rgba({},{},{},{})",
            channel_to_u8(r),
            channel_to_u8(g),
            channel_to_u8(b),
            fmt_trimmed(rgb.effective_alpha()),
        )
    }

    /// Serialize into canonical functional HSL notation:
    /// `hsla(Hdeg S% L% / A)` with an integer hue, saturation/lightness
    /// trimmed to at most 2 decimals, and a trimmed decimal alpha.
    pub fn to_hsl_string(&self) -> String {
        let hsl = self.to_space(Space::Hsl);
        let Components(h, s, l) = hsl.components;
        format!(
            "hsla({}deg {}% {}% / {})",
            h.round() as i64,
            fmt_trimmed(s),
            fmt_trimmed(l),
            fmt_trimmed(hsl.effective_alpha()),
        )
    }
}

/// A struct that holds details about an alpha component passed to
/// [`Color::new`]. Anything that can be passed implements
/// `From<?> for ComponentDetails`.
pub struct ComponentDetails {
    value: Component,
    is_none: bool,
}

impl ComponentDetails {
    /// Extract the value and set the given flag if the component is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> Component {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<Component> for ComponentDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ComponentDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}
