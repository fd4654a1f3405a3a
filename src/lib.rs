//! tinct parses, validates, converts and derives color values written in the
//! hex, functional RGB(A) and functional HSL(A) notations.
//!
//! The whole crate is a library of pure functions: permissive on parse,
//! strict on serialize, and fail-soft at the top level: a string that
//! matches no supported grammar passes through conversion unchanged.
//!
//! The conversion pivot is RGB: every notation parses into either the RGB or
//! HSL space and serializes back out through [`Color::to_space`].
//!
//! ```rust
//! use tinct::{convert_color, ColorType};
//!
//! assert_eq!(convert_color("#8f5aeecc", ColorType::Rgb), "rgba(143,90,238,0.8)");
//! assert_eq!(convert_color("not a color", ColorType::Rgb), "not a color");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod derive;
mod math;
mod parse;

pub use color::{Color, ColorType, Component, ComponentDetails, Components, Flags, Space};
pub use convert::{convert_color, get_color_type, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use derive::{
    change_color_opacity, generate_color_tonal_palette, generate_complementary_color,
    generate_contrast_safe_color,
};
pub use parse::{
    extract_data_from_hsl, extract_data_from_rgb, is_hex_color, is_hsl_color, is_hsl_form,
    is_hsla_form, is_rgb_color, is_rgb_form, is_rgba_form, ParseError,
};
