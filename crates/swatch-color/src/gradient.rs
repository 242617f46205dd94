use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Rgba;
use crate::css::{format_decimal, rgba_to_string};

/// Angle used by linear gradients that name no angle or direction.
pub const DEFAULT_ANGLE: i32 = 45;

static NEXT_STOP_ID: AtomicU64 = AtomicU64::new(1);

// ── StopId ────────────────────────────────────────────────────────────────

/// Opaque correlation token for a stop.
///
/// Not derived from content, so two stops with the same color and offset are
/// still distinct for selection state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct StopId(u64);

impl StopId {
    /// Allocate a new, process-unique `StopId`.
    pub fn new() -> Self {
        StopId(NEXT_STOP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for StopId {
    fn default() -> Self {
        Self::new()
    }
}

// ── GradientStop ──────────────────────────────────────────────────────────

/// A single gradient stop.
///
/// `offset` is a percentage along the gradient axis, kept in `[0, 100]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub id: StopId,
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    /// Creates a stop with a fresh id; `offset` is clamped into `[0, 100]`.
    pub fn new(offset: f32, color: Rgba) -> Self {
        Self { id: StopId::new(), offset: clamp_offset(offset), color }
    }
}

#[inline]
pub fn clamp_offset(offset: f32) -> f32 {
    if offset.is_nan() { 0.0 } else { offset.clamp(0.0, 100.0) }
}

// ── Gradient ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GradientKind {
    Linear,
    Radial,
}

impl GradientKind {
    /// CSS function name.
    pub fn function_name(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::Radial => "radial-gradient",
        }
    }
}

/// Gradient definition as edited and serialized.
///
/// Semantics:
/// - `angle` is in whole degrees and only meaningful for [`GradientKind::Linear`].
/// - `stops` may be in any order; readers sort a copy by offset at point of use.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub angle: i32,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn linear(angle: i32, stops: Vec<GradientStop>) -> Self {
        Self { kind: GradientKind::Linear, angle: angle.rem_euclid(360), stops }
    }

    pub fn radial(stops: Vec<GradientStop>) -> Self {
        Self { kind: GradientKind::Radial, angle: DEFAULT_ANGLE, stops }
    }

    /// Stops sorted ascending by offset. Ties keep their original order.
    pub fn sorted_stops(&self) -> Vec<GradientStop> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        stops
    }

    #[inline]
    pub fn color_at(&self, offset: f32) -> Rgba {
        interpolate(&self.stops, offset)
    }

    pub fn stop(&self, id: StopId) -> Option<&GradientStop> {
        self.stops.iter().find(|s| s.id == id)
    }

    pub fn stop_mut(&mut self, id: StopId) -> Option<&mut GradientStop> {
        self.stops.iter_mut().find(|s| s.id == id)
    }

    /// Canonical CSS text: stops sorted, colors as `rgba(...)`, offsets in
    /// percent with at most two decimals.
    ///
    /// Linear: `linear-gradient(<angle>deg, <stop>, ...)`.
    /// Radial: `radial-gradient(circle, <stop>, ...)`.
    pub fn to_css(&self) -> String {
        let prelude = match self.kind {
            GradientKind::Linear => format!("{}deg", self.angle),
            GradientKind::Radial => "circle".to_owned(),
        };
        let mut parts = vec![prelude];
        parts.extend(
            self.sorted_stops()
                .iter()
                .map(|s| format!("{} {}%", rgba_to_string(s.color), format_decimal(s.offset))),
        );
        format!("{}({})", self.kind.function_name(), parts.join(", "))
    }
}

// ── Interpolation ─────────────────────────────────────────────────────────

/// Color at `offset` (percent) along piecewise-linear `stops`.
///
/// Offsets at or beyond the first / last stop return that stop's color
/// unchanged. Two stops sharing an offset resolve to the earlier one. An empty
/// list yields opaque black.
pub fn interpolate(stops: &[GradientStop], offset: f32) -> Rgba {
    let mut sorted: Vec<&GradientStop> = stops.iter().collect();
    sorted.sort_by(|a, b| a.offset.total_cmp(&b.offset));

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Rgba::black();
    };
    if offset <= first.offset {
        return first.color;
    }
    if offset >= last.offset {
        return last.color;
    }

    for pair in sorted.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if offset >= lo.offset && offset <= hi.offset {
            let span = hi.offset - lo.offset;
            if span <= 0.0 {
                return lo.color;
            }
            return lo.color.lerp(hi.color, (offset - lo.offset) / span);
        }
    }
    last.color
}
