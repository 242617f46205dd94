use swatch_color::gradient::clamp_offset;
use swatch_color::{
    DEFAULT_ANGLE, Gradient, GradientKind, GradientStop, Hsla, Paint, Rgba, StopId, hex_to_rgba,
    interpolate, same_swatch, string_to_rgba,
};

use crate::clipboard::Clipboard;
use crate::config::EditorConfig;
use crate::eyedropper::EyeDropper;
use crate::store::{PaletteId, PaletteStore, StoreError, Swatch};

/// Which tab of the picker is active.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EditorMode {
    Solid,
    Linear,
    Radial,
}

/// A color typed or dragged into one of the picker's inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// Hex field (`#RGB` / `#RRGGBB`, `#` optional).
    Hex(String),
    /// RGBA sliders.
    Rgba(Rgba),
    /// HSLA sliders.
    Hsla(Hsla),
    /// Free-form CSS color text.
    Css(String),
}

impl ColorInput {
    /// The color this input stands for. Unreadable text resolves to opaque black.
    pub fn resolve(&self) -> Rgba {
        match self {
            ColorInput::Hex(s) => hex_to_rgba(s),
            ColorInput::Rgba(c) => *c,
            ColorInput::Hsla(c) => c.to_rgba(),
            ColorInput::Css(s) => string_to_rgba(s),
        }
    }
}

/// State of one color/gradient picker instance.
///
/// Every mutation that changes the paint reports the new canonical CSS to the
/// `on_change` listener.
///
/// # Example
/// ```rust
/// use swatch_picker::editor::{EditorMode, GradientEditor};
///
/// let mut editor = GradientEditor::new().on_change(|css| println!("{css}"));
/// editor.set_mode(EditorMode::Linear);
/// editor.set_angle(90);
/// editor.add_stop(50.0, None);
/// assert_eq!(editor.stops().len(), 3);
/// ```
pub struct GradientEditor {
    paint: Paint,
    selected: Option<StopId>,
    config: EditorConfig,
    eyedropper: Option<Box<dyn EyeDropper>>,
    on_change: Option<Box<dyn FnMut(&str)>>,
}

impl GradientEditor {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            paint: Paint::Solid(config.default_color),
            selected: None,
            config,
            eyedropper: None,
            on_change: None,
        }
    }

    /// Editor preloaded with `css`, following [`Paint::from_css`].
    pub fn from_css(css: &str) -> Self {
        let mut editor = Self::new();
        editor.replace_paint(Paint::from_css(css));
        editor
    }

    pub fn eyedropper(mut self, dropper: impl EyeDropper + 'static) -> Self {
        self.eyedropper = Some(Box::new(dropper));
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> EditorMode {
        match &self.paint {
            Paint::Solid(_) => EditorMode::Solid,
            Paint::Gradient(g) => match g.kind {
                GradientKind::Linear => EditorMode::Linear,
                GradientKind::Radial => EditorMode::Radial,
            },
        }
    }

    /// Stops in insertion order; empty in solid mode.
    pub fn stops(&self) -> &[GradientStop] {
        match &self.paint {
            Paint::Solid(_) => &[],
            Paint::Gradient(g) => &g.stops,
        }
    }

    #[inline]
    pub fn selected(&self) -> Option<StopId> {
        self.selected
    }

    /// Linear angle in degrees; `None` unless in linear mode.
    pub fn angle(&self) -> Option<i32> {
        match &self.paint {
            Paint::Gradient(g) if g.kind == GradientKind::Linear => Some(g.angle),
            _ => None,
        }
    }

    /// Color shown in the picker's inputs: the solid color, or the selected
    /// stop's color (first stop when nothing is selected).
    pub fn current_color(&self) -> Rgba {
        match &self.paint {
            Paint::Solid(c) => *c,
            Paint::Gradient(g) => self
                .selected
                .and_then(|id| g.stop(id))
                .or_else(|| first_stop(g))
                .map(|s| s.color)
                .unwrap_or(self.config.default_color),
        }
    }

    /// Canonical CSS for the current paint.
    pub fn css(&self) -> String {
        self.paint.to_css()
    }

    /// True when `swatch` holds the same color or gradient as the editor,
    /// however either was spelled.
    pub fn is_selected_swatch(&self, swatch: &Swatch) -> bool {
        same_swatch(&self.css(), &swatch.value)
    }

    #[inline]
    pub fn has_eyedropper(&self) -> bool {
        self.eyedropper.is_some()
    }

    // ── transitions ───────────────────────────────────────────────────────

    /// Switches tabs.
    ///
    /// Solid → gradient seeds two stops: the current color at 0% and
    /// `seed_end_color` at 100%. Gradient → solid keeps the current color.
    /// Linear ⇄ radial keeps the stops.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode == self.mode() {
            return;
        }
        let kind = match mode {
            EditorMode::Solid => {
                self.paint = Paint::Solid(self.current_color());
                self.selected = None;
                self.notify();
                return;
            }
            EditorMode::Linear => GradientKind::Linear,
            EditorMode::Radial => GradientKind::Radial,
        };

        let seed = match &mut self.paint {
            Paint::Gradient(g) => {
                g.kind = kind;
                None
            }
            Paint::Solid(c) => Some(*c),
        };
        if let Some(start) = seed {
            let stops = vec![
                GradientStop::new(0.0, start),
                GradientStop::new(100.0, self.config.seed_end_color),
            ];
            self.selected = stops.first().map(|s| s.id);
            self.paint = Paint::Gradient(match kind {
                GradientKind::Linear => Gradient::linear(DEFAULT_ANGLE, stops),
                GradientKind::Radial => Gradient::radial(stops),
            });
        }
        self.notify();
    }

    /// Selects a stop. Unknown ids are ignored and return `false`.
    pub fn select(&mut self, id: StopId) -> bool {
        if self.stops().iter().any(|s| s.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Inserts a stop at `offset` (clamped to `[0, 100]`) and selects it.
    ///
    /// Without an explicit color the stop takes the color the gradient
    /// already shows at that offset. Returns `None` in solid mode.
    pub fn add_stop(&mut self, offset: f32, color: Option<Rgba>) -> Option<StopId> {
        let Paint::Gradient(g) = &mut self.paint else {
            return None;
        };
        let offset = clamp_offset(offset);
        let color = color.unwrap_or_else(|| interpolate(&g.stops, offset));
        let stop = GradientStop::new(offset, color);
        let id = stop.id;
        g.stops.push(stop);
        self.selected = Some(id);
        self.notify();
        Some(id)
    }

    /// Moves a stop to `offset` (clamped to `[0, 100]`).
    pub fn move_stop(&mut self, id: StopId, offset: f32) -> bool {
        let Paint::Gradient(g) = &mut self.paint else {
            return false;
        };
        let Some(stop) = g.stop_mut(id) else {
            return false;
        };
        stop.offset = clamp_offset(offset);
        self.notify();
        true
    }

    /// Removes a stop unless that would leave fewer than `min_stops`.
    ///
    /// If the removed stop was selected, the lowest-offset remaining stop
    /// becomes selected.
    pub fn remove_stop(&mut self, id: StopId) -> bool {
        let Paint::Gradient(g) = &mut self.paint else {
            return false;
        };
        let Some(index) = g.stops.iter().position(|s| s.id == id) else {
            return false;
        };
        if g.stops.len() <= self.config.min_stops {
            log::debug!("keeping stop: gradient is at its minimum of {} stops", self.config.min_stops);
            return false;
        }
        g.stops.remove(index);
        if self.selected == Some(id) {
            self.selected = first_stop(g).map(|s| s.id);
        }
        self.notify();
        true
    }

    /// Sets the linear angle, wrapped into `[0, 360)`. Ignored outside linear mode.
    pub fn set_angle(&mut self, degrees: i32) -> bool {
        match &mut self.paint {
            Paint::Gradient(g) if g.kind == GradientKind::Linear => {
                g.angle = degrees.rem_euclid(360);
            }
            _ => return false,
        }
        self.notify();
        true
    }

    /// Applies an input color to the solid color or to the selected stop.
    ///
    /// With no stop selected, the lowest-offset stop is selected and edited.
    pub fn apply(&mut self, input: ColorInput) -> bool {
        let color = input.resolve();
        match &mut self.paint {
            Paint::Solid(c) => *c = color,
            Paint::Gradient(g) => {
                let target = self
                    .selected
                    .filter(|id| g.stop(*id).is_some())
                    .or_else(|| first_stop(g).map(|s| s.id));
                let Some(id) = target else {
                    return false;
                };
                if let Some(stop) = g.stop_mut(id) {
                    stop.color = color;
                }
                self.selected = Some(id);
            }
        }
        self.notify();
        true
    }

    /// Replaces the whole state from CSS text. A one-stop gradient becomes a
    /// solid of that stop's color.
    pub fn load_css(&mut self, css: &str) {
        self.replace_paint(Paint::from_css(css));
        self.notify();
    }

    pub fn load_swatch(&mut self, swatch: &Swatch) {
        self.load_css(&swatch.value);
    }

    // ── host capabilities ─────────────────────────────────────────────────

    /// Samples a screen color into the current target.
    ///
    /// Returns `false` without side effects when no eyedropper is installed
    /// or the user cancelled.
    pub fn pick_with_eyedropper(&mut self) -> bool {
        let picked = match self.eyedropper.as_mut() {
            Some(dropper) => dropper.open(),
            None => {
                log::debug!("eyedropper unavailable on this host");
                return false;
            }
        };
        match picked {
            Some(hex) => self.apply(ColorInput::Hex(hex)),
            None => false,
        }
    }

    pub fn copy_css(&self, clipboard: &mut dyn Clipboard) {
        clipboard.write_text(&self.css());
    }

    /// Saves the canonical CSS as a new swatch.
    ///
    /// Failures are logged and handed back for the UI layer to surface.
    pub fn save_to(
        &self,
        store: &mut dyn PaletteStore,
        palette: PaletteId,
    ) -> Result<Swatch, StoreError> {
        store.add_color(palette, &self.css()).inspect_err(|e| {
            log::warn!("saving swatch to palette {} failed: {e}", palette.0);
        })
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn replace_paint(&mut self, paint: Paint) {
        self.selected = match &paint {
            Paint::Gradient(g) => first_stop(g).map(|s| s.id),
            Paint::Solid(_) => None,
        };
        self.paint = paint;
    }

    fn notify(&mut self) {
        if self.on_change.is_none() {
            return;
        }
        let css = self.css();
        if let Some(f) = &mut self.on_change {
            f(&css);
        }
    }
}

impl Default for GradientEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowest-offset stop; ties resolve to the earlier stop.
fn first_stop(g: &Gradient) -> Option<&GradientStop> {
    g.stops.iter().reduce(|best, s| if s.offset < best.offset { s } else { best })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::store::{MemoryStore, SwatchId};

    fn recording() -> (GradientEditor, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let editor = GradientEditor::new().on_change(move |css| sink.borrow_mut().push(css.to_owned()));
        (editor, log)
    }

    fn linear() -> GradientEditor {
        GradientEditor::from_css("linear-gradient(90deg, #ff0000 0%, #0000ff 100%)")
    }

    // ── modes ─────────────────────────────────────────────────────────────

    #[test]
    fn starts_solid_black() {
        let editor = GradientEditor::new();
        assert_eq!(editor.mode(), EditorMode::Solid);
        assert_eq!(editor.css(), "rgba(0, 0, 0, 1)");
        assert!(editor.stops().is_empty());
    }

    #[test]
    fn solid_to_linear_seeds_two_stops() {
        let mut editor = GradientEditor::new();
        editor.apply(ColorInput::Hex("#336699".into()));
        editor.set_mode(EditorMode::Linear);
        assert_eq!(
            editor.css(),
            "linear-gradient(45deg, rgba(51, 102, 153, 1) 0%, rgba(255, 255, 255, 1) 100%)"
        );
        assert_eq!(editor.selected(), Some(editor.stops()[0].id));
    }

    #[test]
    fn linear_to_radial_keeps_stops() {
        let mut editor = linear();
        let ids: Vec<StopId> = editor.stops().iter().map(|s| s.id).collect();
        editor.set_mode(EditorMode::Radial);
        assert_eq!(editor.mode(), EditorMode::Radial);
        assert_eq!(editor.stops().iter().map(|s| s.id).collect::<Vec<_>>(), ids);
        assert_eq!(editor.angle(), None);
    }

    #[test]
    fn gradient_to_solid_keeps_selected_color() {
        let mut editor = linear();
        let blue = editor.stops()[1].id;
        editor.select(blue);
        editor.set_mode(EditorMode::Solid);
        assert_eq!(editor.paint(), &Paint::Solid(Rgba::rgb(0, 0, 255)));
        assert_eq!(editor.selected(), None);
    }

    #[test]
    fn same_mode_is_a_no_op() {
        let (mut editor, log) = recording();
        editor.set_mode(EditorMode::Solid);
        assert!(log.borrow().is_empty());
    }

    // ── stops ─────────────────────────────────────────────────────────────

    #[test]
    fn add_stop_interpolates_color_and_selects() {
        let mut editor = linear();
        let id = editor.add_stop(50.0, None).unwrap();
        let stop = editor.stops().iter().find(|s| s.id == id).unwrap();
        assert_eq!(stop.color, Rgba::rgb(128, 0, 128));
        assert_eq!(editor.selected(), Some(id));
    }

    #[test]
    fn add_stop_clamps_offset_and_honours_color() {
        let mut editor = linear();
        let id = editor.add_stop(130.0, Some(Rgba::white())).unwrap();
        let stop = editor.stops().iter().find(|s| s.id == id).unwrap();
        assert_eq!((stop.offset, stop.color), (100.0, Rgba::white()));
    }

    #[test]
    fn add_stop_in_solid_mode_is_refused() {
        assert_eq!(GradientEditor::new().add_stop(10.0, None), None);
    }

    #[test]
    fn move_stop_clamps() {
        let mut editor = linear();
        let id = editor.stops()[0].id;
        assert!(editor.move_stop(id, -40.0));
        assert_eq!(editor.stops()[0].offset, 0.0);
        assert!(editor.move_stop(id, 60.0));
        assert_eq!(editor.stops()[0].offset, 60.0);
        assert!(!editor.move_stop(StopId::new(), 10.0));
    }

    #[test]
    fn remove_stop_respects_minimum() {
        let mut editor = linear();
        let first = editor.stops()[0].id;
        assert!(!editor.remove_stop(first));
        let extra = editor.add_stop(50.0, None).unwrap();
        assert!(editor.remove_stop(extra));
        assert_eq!(editor.stops().len(), 2);
        assert_eq!(editor.selected(), Some(first));
    }

    #[test]
    fn select_unknown_stop_is_ignored() {
        let mut editor = linear();
        let before = editor.selected();
        assert!(!editor.select(StopId::new()));
        assert_eq!(editor.selected(), before);
    }

    // ── angle ─────────────────────────────────────────────────────────────

    #[test]
    fn set_angle_wraps_and_is_linear_only() {
        let mut editor = linear();
        assert!(editor.set_angle(-90));
        assert_eq!(editor.angle(), Some(270));
        editor.set_mode(EditorMode::Radial);
        assert!(!editor.set_angle(10));
    }

    // ── color input ───────────────────────────────────────────────────────

    #[test]
    fn apply_targets_selected_stop() {
        let mut editor = linear();
        let blue = editor.stops()[1].id;
        editor.select(blue);
        editor.apply(ColorInput::Hsla(Hsla::new(120, 100, 50, 0.5)));
        assert_eq!(editor.stops()[1].color, Rgba::new(0, 255, 0, 0.5));
        assert_eq!(editor.stops()[0].color, Rgba::rgb(255, 0, 0));
        assert_eq!(editor.current_color(), Rgba::new(0, 255, 0, 0.5));
    }

    #[test]
    fn apply_to_solid() {
        let mut editor = GradientEditor::new();
        editor.apply(ColorInput::Css("rgba(10, 20, 30, 0.25)".into()));
        assert_eq!(editor.css(), "rgba(10, 20, 30, 0.25)");
        editor.apply(ColorInput::Css("not a color".into()));
        assert_eq!(editor.current_color(), Rgba::black());
    }

    // ── loading ───────────────────────────────────────────────────────────

    #[test]
    fn load_single_stop_gradient_collapses() {
        let mut editor = linear();
        editor.load_css("linear-gradient(#abcdef 30%)");
        assert_eq!(editor.mode(), EditorMode::Solid);
        assert_eq!(editor.current_color(), Rgba::rgb(0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn default_color_seeds_new_editor_but_not_unreadable_loads() {
        let config = EditorConfig::default().default_color(Rgba::rgb(255, 0, 0));
        let mut editor = GradientEditor::with_config(config);
        assert_eq!(editor.current_color(), Rgba::rgb(255, 0, 0));
        editor.load_css("linear-gradient(0deg)");
        assert_eq!(editor.paint(), &Paint::Solid(Rgba::black()));
    }

    #[test]
    fn load_selects_lowest_offset_stop() {
        let mut editor = GradientEditor::new();
        editor.load_css("linear-gradient(#fff 80%, #000 10%)");
        assert_eq!(editor.current_color(), Rgba::black());
    }

    // ── notifications ─────────────────────────────────────────────────────

    #[test]
    fn every_mutation_reports_canonical_css() {
        let (mut editor, log) = recording();
        editor.set_mode(EditorMode::Linear);
        editor.set_angle(90);
        let id = editor.add_stop(50.0, Some(Rgba::rgb(255, 0, 0))).unwrap();
        editor.remove_stop(id);
        let log = log.borrow();
        assert_eq!(log.len(), 4);
        assert_eq!(
            log[3],
            "linear-gradient(90deg, rgba(0, 0, 0, 1) 0%, rgba(255, 255, 255, 1) 100%)"
        );
    }

    // ── swatches & host capabilities ──────────────────────────────────────

    #[test]
    fn swatch_selection_ignores_spelling() {
        let editor = linear();
        let swatch = Swatch {
            id: SwatchId(1),
            value: "linear-gradient(to right, rgb(255,0,0), #00f)".into(),
            palette_id: PaletteId(1),
        };
        assert!(editor.is_selected_swatch(&swatch));
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let palette = store.add_palette("Test").unwrap().id;
        let editor = linear();
        let swatch = editor.save_to(&mut store, palette).unwrap();
        let mut other = GradientEditor::new();
        other.load_swatch(&swatch);
        assert_eq!(other.css(), editor.css());
    }

    #[test]
    fn save_to_unknown_palette_errors() {
        let mut store = MemoryStore::new();
        let err = GradientEditor::new().save_to(&mut store, PaletteId(42)).unwrap_err();
        assert!(matches!(err, StoreError::UnknownPalette(PaletteId(42))));
    }

    #[test]
    fn eyedropper_absent_is_a_no_op() {
        let (mut editor, log) = recording();
        assert!(!editor.has_eyedropper());
        assert!(!editor.pick_with_eyedropper());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn eyedropper_applies_picked_hex() {
        let mut editor = GradientEditor::new().eyedropper(|| Some("#10A0F0".to_owned()));
        assert!(editor.pick_with_eyedropper());
        assert_eq!(editor.current_color(), Rgba::rgb(0x10, 0xA0, 0xF0));
    }

    #[test]
    fn eyedropper_cancel_changes_nothing() {
        let mut editor = GradientEditor::new().eyedropper(|| None);
        assert!(!editor.pick_with_eyedropper());
        assert_eq!(editor.current_color(), Rgba::black());
    }

    #[test]
    fn copy_writes_canonical_css() {
        let mut clipboard = MemoryClipboard::default();
        GradientEditor::from_css("#0f0").copy_css(&mut clipboard);
        assert_eq!(clipboard.contents.as_deref(), Some("rgba(0, 255, 0, 1)"));
    }
}
