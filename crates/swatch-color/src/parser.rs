use crate::css::string_to_rgba;
use crate::error::ParseError;
use crate::gradient::{DEFAULT_ANGLE, Gradient, GradientKind, GradientStop};
use crate::lexer::{Scanner, Segment, angle_degrees, first_percentage, split_stop};

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse a `linear-gradient(...)` / `radial-gradient(...)` string.
///
/// Errors only on structure: an unknown function name or unbalanced
/// parentheses. Stops whose color cannot be read become opaque black, and
/// stops without a percentage get positional offsets (first 0, last 100,
/// interior evenly spaced). A gradient with fewer than two stops is returned
/// as-is; collapsing it to a solid color is up to the caller.
pub fn parse_gradient(src: &str) -> Result<Gradient, ParseError> {
    let src = src.trim();
    let call = Scanner::new(src).function_call()?;
    let kind = gradient_kind(call.name)?;

    let mut segments = Scanner::new(call.body).split_top_level(',');
    let angle = take_prelude(&mut segments).and_then(|p| angle_of(p.text));

    let count = segments.len();
    let stops = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let (color, position) = split_stop(segment.text);
            let offset = position
                .and_then(first_percentage)
                .unwrap_or_else(|| default_offset(index, count));
            GradientStop::new(offset, string_to_rgba(color))
        })
        .collect();

    Ok(match kind {
        GradientKind::Linear => Gradient::linear(angle.unwrap_or(DEFAULT_ANGLE), stops),
        GradientKind::Radial => Gradient::radial(stops),
    })
}

/// Angle of a gradient string in whole degrees, `[0, 360)`.
///
/// Reads a leading `<n>deg|turn|rad|grad` or `to <side> [<side>]`; anything
/// else, including input that is not a gradient at all, gives
/// [`DEFAULT_ANGLE`].
pub fn extract_angle(src: &str) -> i32 {
    Scanner::new(src.trim())
        .function_call()
        .ok()
        .and_then(|call| {
            let mut segments = Scanner::new(call.body).split_top_level(',');
            take_prelude(&mut segments).and_then(|p| angle_of(p.text))
        })
        .unwrap_or(DEFAULT_ANGLE)
}

/// True when `src` names a gradient function rather than a solid color.
pub fn is_gradient(src: &str) -> bool {
    src.to_ascii_lowercase().contains("gradient")
}

// ── Helpers ───────────────────────────────────────────────────────────────

fn gradient_kind(name: &str) -> Result<GradientKind, ParseError> {
    match name.to_ascii_lowercase().as_str() {
        "linear-gradient" => Ok(GradientKind::Linear),
        "radial-gradient" => Ok(GradientKind::Radial),
        other => Err(ParseError::new(format!("unsupported gradient function {other:?}"), 0)),
    }
}

/// Removes and returns the first segment when it is an angle, a direction,
/// or a radial shape description rather than a color stop.
fn take_prelude<'s>(segments: &mut Vec<Segment<'s>>) -> Option<Segment<'s>> {
    match segments.first() {
        Some(first) if is_prelude(first.text) => Some(segments.remove(0)),
        _ => None,
    }
}

const RADIAL_KEYWORDS: &[&str] = &[
    "circle",
    "ellipse",
    "closest-side",
    "closest-corner",
    "farthest-side",
    "farthest-corner",
    "at",
    "center",
    "top",
    "bottom",
    "left",
    "right",
];

fn is_prelude(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    if angle_of(&lower).is_some() || lower.starts_with("to ") {
        return true;
    }
    let mut saw_keyword = false;
    for word in lower.split_whitespace() {
        if RADIAL_KEYWORDS.contains(&word) {
            saw_keyword = true;
        } else if !is_length(word) {
            return false;
        }
    }
    saw_keyword
}

fn is_length(word: &str) -> bool {
    let unit_start = word
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
        .unwrap_or(word.len());
    let (number, unit) = word.split_at(unit_start);
    number.parse::<f32>().is_ok()
        && matches!(unit, "" | "%" | "px" | "em" | "rem" | "vw" | "vh" | "vmin" | "vmax")
}

/// Degrees for an angle or direction token, wrapped into `[0, 360)`.
fn angle_of(text: &str) -> Option<i32> {
    let lower = text.trim().to_ascii_lowercase();
    if let Some(sides) = lower.strip_prefix("to ") {
        return direction_angle(sides);
    }

    let unit_start = lower
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
        .unwrap_or(lower.len());
    let (number, unit) = lower.split_at(unit_start);
    let value: f32 = number.parse().ok()?;
    let degrees = match unit {
        "" if value == 0.0 => 0.0,
        _ => angle_degrees(value, unit)?,
    };
    Some((degrees.round() as i32).rem_euclid(360))
}

fn direction_angle(sides: &str) -> Option<i32> {
    let mut vertical = None;
    let mut horizontal = None;
    for word in sides.split_whitespace() {
        match word {
            "top" | "bottom" if vertical.is_none() => vertical = Some(word),
            "left" | "right" if horizontal.is_none() => horizontal = Some(word),
            _ => return None,
        }
    }
    match (vertical, horizontal) {
        (Some("top"), None) => Some(0),
        (None, Some("right")) => Some(90),
        (Some("bottom"), None) => Some(180),
        (None, Some("left")) => Some(270),
        (Some("top"), Some("right")) => Some(45),
        (Some("bottom"), Some("right")) => Some(135),
        (Some("bottom"), Some("left")) => Some(225),
        (Some("top"), Some("left")) => Some(315),
        _ => None,
    }
}

fn default_offset(index: usize, count: usize) -> f32 {
    if count <= 1 {
        0.0
    } else {
        index as f32 / (count - 1) as f32 * 100.0
    }
}
