//! CSS color text ⇄ [`Rgba`] / [`Hsla`].
//!
//! Two reading modes share one code path:
//! - strict: [`parse_color`] / `str::parse::<Rgba>()` return [`ParseError`];
//! - permissive: [`string_to_rgba`] / [`hex_to_rgba`] never fail and fall back
//!   to opaque black, so half-typed input in a picker field cannot crash it.

use std::fmt;
use std::str::FromStr;

use crate::color::{Hsla, Rgba};
use crate::error::ParseError;
use crate::lexer::{Scanner, Token};

// ── Reading ───────────────────────────────────────────────────────────────

/// Strictly parses a solid CSS color: `#RGB`, `#RRGGBB`, `rgb()/rgba()`, or
/// `hsl()/hsla()`.
///
/// Named colors and gradient functions are rejected.
pub fn parse_color(src: &str) -> Result<Rgba, ParseError> {
    let src = src.trim();
    if src.is_empty() {
        return Err(ParseError::new("empty color", 0));
    }
    let lower = src.to_ascii_lowercase();
    if lower.contains("gradient") {
        return Err(ParseError::new("gradient is not a solid color", 0));
    }
    if let Some(digits) = src.strip_prefix('#') {
        return parse_hex_digits(digits);
    }
    if lower.starts_with("rgb") {
        return parse_rgb_args(src);
    }
    if lower.starts_with("hsl") {
        return parse_hsl_args(src);
    }
    Err(ParseError::new(format!("unsupported color {src:?}"), 0))
}

/// Reads any CSS color string; unrecognized input yields opaque black.
///
/// Gradient functions also yield opaque black: they have no single color.
pub fn string_to_rgba(src: &str) -> Rgba {
    parse_color(src).unwrap_or_else(|e| {
        log::debug!("using opaque black for {src:?}: {e}");
        Rgba::black()
    })
}

/// Reads `#RGB` / `#RRGGBB` (leading `#` optional). Alpha is always 1.
///
/// Any other length or a non-hex digit yields opaque black.
pub fn hex_to_rgba(hex: &str) -> Rgba {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    parse_hex_digits(digits).unwrap_or_else(|e| {
        log::debug!("using opaque black for hex {hex:?}: {e}");
        Rgba::black()
    })
}

fn parse_hex_digits(digits: &str) -> Result<Rgba, ParseError> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseError::new(format!("invalid hex digits {digits:?}"), 1));
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_owned(),
        n => {
            return Err(ParseError::new(
                format!("hex color must have 3 or 6 digits, got {n}"),
                1,
            ));
        }
    };
    let value = u32::from_str_radix(&expanded, 16)
        .map_err(|e| ParseError::new(format!("invalid hex {expanded:?}: {e}"), 1))?;
    Ok(Rgba::rgb(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

fn parse_rgb_args(src: &str) -> Result<Rgba, ParseError> {
    let tokens = Scanner::new(src).numbers()?;
    if tokens.len() < 3 {
        return Err(ParseError::new(
            format!("rgb() needs 3 channels, got {}", tokens.len()),
            src.len(),
        ));
    }
    let byte = |t: Token| match t {
        Token::Number(v) | Token::Angle(v) => v,
        Token::Percentage(v) => v * 255.0 / 100.0,
    };
    Ok(Rgba::from_f32(
        byte(tokens[0]),
        byte(tokens[1]),
        byte(tokens[2]),
        alpha_arg(tokens.get(3).copied()),
    ))
}

fn parse_hsl_args(src: &str) -> Result<Rgba, ParseError> {
    let tokens = Scanner::new(src).numbers()?;
    if tokens.len() < 3 {
        return Err(ParseError::new(
            format!("hsl() needs 3 components, got {}", tokens.len()),
            src.len(),
        ));
    }
    let hsla = Hsla::from_f32(
        tokens[0].value(),
        tokens[1].value(),
        tokens[2].value(),
        alpha_arg(tokens.get(3).copied()),
    );
    Ok(hsla.to_rgba())
}

fn alpha_arg(token: Option<Token>) -> f32 {
    match token {
        None => 1.0,
        Some(Token::Number(v) | Token::Angle(v)) => v,
        Some(Token::Percentage(v)) => v / 100.0,
    }
}

impl FromStr for Rgba {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

/// `#RRGGBB`, uppercase. Alpha is dropped.
pub fn rgba_to_hex(c: Rgba) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

#[inline]
pub fn rgba_to_hsla(c: Rgba) -> Hsla {
    c.to_hsla()
}

#[inline]
pub fn hsla_to_rgba(c: Hsla) -> Rgba {
    c.to_rgba()
}

// ── Writing ───────────────────────────────────────────────────────────────

/// `rgba(r, g, b, a)` with alpha rounded to two decimals.
pub fn rgba_to_string(c: Rgba) -> String {
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, format_decimal(c.a))
}

/// `hsla(h, s%, l%, a)` with alpha rounded to two decimals.
pub fn hsla_to_string(c: Hsla) -> String {
    format!("hsla({}, {}%, {}%, {})", c.h, c.s, c.l, format_decimal(c.a))
}

/// Rounds to two decimals and prints without trailing zeros (`1`, `0.5`, `33.33`).
pub fn format_decimal(v: f32) -> String {
    let rounded = (v as f64 * 100.0).round() / 100.0;
    // `+ 0.0` folds -0 into 0.
    format!("{}", rounded + 0.0)
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rgba_to_string(*self))
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hsla_to_string(*self))
    }
}
