//! Plain-text renderings printed by the CLI.

use swatch_color::{GradientKind, Paint, Rgba, rgba_to_hex, rgba_to_hsla};
use swatch_picker::store::{Palette, Swatch};

/// The three notations of one color on a line each.
pub fn color_lines(c: Rgba) -> String {
    format!("rgba  {c}\nhex   {}\nhsla  {}\n", rgba_to_hex(c), rgba_to_hsla(c))
}

/// Kind, angle and stop table of a paint.
pub fn inspect(paint: &Paint) -> String {
    let g = match paint {
        Paint::Solid(c) => return format!("solid\n{}", color_lines(*c)),
        Paint::Gradient(g) => g,
    };
    let mut out = match g.kind {
        GradientKind::Linear => format!("linear  {}deg\n", g.angle),
        GradientKind::Radial => "radial  circle\n".to_owned(),
    };
    for stop in g.sorted_stops() {
        out.push_str(&format!(
            "  {:>6}%  {}  {}  {}\n",
            swatch_color::css::format_decimal(stop.offset),
            stop.color,
            rgba_to_hex(stop.color),
            rgba_to_hsla(stop.color),
        ));
    }
    out
}

pub fn palette_line(p: &Palette) -> String {
    format!("{:>4}  {}", p.id.0, p.name)
}

pub fn swatch_line(s: &Swatch) -> String {
    format!("{:>4}  {}", s.id.0, s.value)
}
