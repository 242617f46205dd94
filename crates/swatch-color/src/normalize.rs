use crate::color::Rgba;
use crate::css::{rgba_to_string, string_to_rgba};
use crate::parser::{is_gradient, parse_gradient};

/// Canonical CSS text for any color or gradient string.
///
/// Solid colors become `rgba(r, g, b, a)`. Gradients are re-parsed and written
/// back with sorted `rgba(...) <offset>%` stops inside
/// `linear-gradient(<angle>deg, ...)` or `radial-gradient(circle, ...)`, so
/// two spellings of the same gradient produce the same string. A gradient
/// that cannot be parsed normalizes like any unreadable color, to opaque black.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(css: &str) -> String {
    if !is_gradient(css) {
        return rgba_to_string(string_to_rgba(css));
    }
    match parse_gradient(css) {
        Ok(g) => g.to_css(),
        Err(e) => {
            log::debug!("normalizing unreadable gradient {css:?} to black: {e}");
            rgba_to_string(Rgba::black())
        }
    }
}

/// True when two CSS strings describe the same swatch.
pub fn same_swatch(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
