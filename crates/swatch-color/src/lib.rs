//! Color model, CSS color/gradient parsing, and canonical CSS output for the
//! swatch picker.
//!
//! Everything here is synchronous and pure. The one piece of shared state is
//! the [`StopId`] counter.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `Rgba`, `Hsla`, RGB ⇄ HSL math |
//! | [`css`] | color string reading (strict and permissive), hex, `rgba()`/`hsla()` writing |
//! | [`gradient`] | `GradientStop`, `Gradient`, stop interpolation |
//! | [`lexer`] | depth-aware `Scanner`, stop splitting |
//! | [`parser`] | `parse_gradient`, `extract_angle` |
//! | [`paint`] | `Paint` (solid or gradient) with the single-stop collapse rule |
//! | [`normalize`] | canonical CSS for swatch comparison |
//! | [`error`] | `ParseError` |
//!
//! # Quick start
//!
//! ```rust
//! use swatch_color::{normalize, parse_gradient, Rgba};
//!
//! let g = parse_gradient("linear-gradient(to right, #f00, rgba(0, 0, 255, 0.5))").unwrap();
//! assert_eq!(g.angle, 90);
//! assert_eq!(g.color_at(0.0), Rgba::rgb(255, 0, 0));
//!
//! assert_eq!(
//!     normalize("linear-gradient(90deg, red 0%, #00f 100%)"),
//!     "linear-gradient(90deg, rgba(0, 0, 0, 1) 0%, rgba(0, 0, 255, 1) 100%)",
//! );
//! ```

pub mod color;
pub mod css;
pub mod error;
pub mod gradient;
pub mod lexer;
pub mod normalize;
pub mod paint;
pub mod parser;

pub use color::{Hsla, Rgba};
pub use css::{
    hex_to_rgba, hsla_to_rgba, hsla_to_string, parse_color, rgba_to_hex, rgba_to_hsla,
    rgba_to_string, string_to_rgba,
};
pub use error::ParseError;
pub use gradient::{interpolate, Gradient, GradientKind, GradientStop, StopId, DEFAULT_ANGLE};
pub use normalize::{normalize, same_swatch};
pub use paint::Paint;
pub use parser::{extract_angle, is_gradient, parse_gradient};
