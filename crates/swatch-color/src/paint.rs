use crate::color::Rgba;
use crate::css::{rgba_to_string, string_to_rgba};
use crate::gradient::Gradient;
use crate::parser::{is_gradient, parse_gradient};

/// A solid color or a gradient, as held by a picker and stored in a swatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Gradient(Gradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Rgba) -> Self {
        Paint::Solid(color)
    }

    /// Reads any CSS color or gradient string. Never fails.
    ///
    /// A gradient with at least two stops stays a gradient. A single stop
    /// collapses to a solid of that stop's color. No stops, or a gradient
    /// that cannot be parsed, becomes a solid of [`string_to_rgba`]'s result
    /// (opaque black).
    pub fn from_css(css: &str) -> Self {
        if !is_gradient(css) {
            return Paint::Solid(string_to_rgba(css));
        }
        match parse_gradient(css) {
            Ok(g) if g.stops.len() >= 2 => Paint::Gradient(g),
            Ok(g) => match g.stops.first() {
                Some(stop) => Paint::Solid(stop.color),
                None => Paint::Solid(string_to_rgba(css)),
            },
            Err(e) => {
                log::debug!("treating {css:?} as a solid color: {e}");
                Paint::Solid(string_to_rgba(css))
            }
        }
    }

    /// Canonical CSS text, identical to what [`crate::normalize`] produces.
    pub fn to_css(&self) -> String {
        match self {
            Paint::Solid(c) => rgba_to_string(*c),
            Paint::Gradient(g) => g.to_css(),
        }
    }

    #[inline]
    pub fn is_gradient(&self) -> bool {
        matches!(self, Paint::Gradient(_))
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_opaque(),
            Paint::Gradient(g) => g.stops.iter().all(|s| s.color.is_opaque()),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Rgba::black())
    }
}
