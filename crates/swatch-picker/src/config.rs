use swatch_color::Rgba;

/// Tunables for a [`crate::editor::GradientEditor`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Color of a fresh editor, and what `current_color` reports for a
    /// gradient with no stops. Loaded CSS that reads as nothing is still black.
    pub default_color: Rgba,
    /// Color given to the second stop when a solid is switched to a gradient.
    pub seed_end_color: Rgba,
    /// A stop cannot be removed once the gradient is down to this many stops.
    pub min_stops: usize,
}

impl EditorConfig {
    pub fn default_color(mut self, c: Rgba) -> Self { self.default_color = c; self }
    pub fn seed_end_color(mut self, c: Rgba) -> Self { self.seed_end_color = c; self }
    pub fn min_stops(mut self, n: usize) -> Self { self.min_stops = n.max(1); self }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_color: Rgba::black(),
            seed_end_color: Rgba::white(),
            min_stops: 2,
        }
    }
}
