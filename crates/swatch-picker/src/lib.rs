//! Swatch picker: editor state for a color/gradient picker, saved palettes,
//! and the host capabilities (clipboard, eyedropper) it relies on.
//!
//! Rendering is left to the host. This crate owns the state machine behind
//! the picker's tabs, stop bar, angle dial and color inputs, and reports the
//! resulting CSS through a callback.
//!
//! # Quick start
//!
//! ```rust
//! use swatch_picker::prelude::*;
//!
//! let mut store = MemoryStore::new();
//! let palette = store.add_palette("Brand").unwrap();
//!
//! let mut editor = GradientEditor::new();
//! editor.apply(ColorInput::Hex("#1e90ff".into()));
//! editor.set_mode(EditorMode::Radial);
//!
//! let swatch = editor.save_to(&mut store, palette.id).unwrap();
//! assert!(editor.is_selected_swatch(&swatch));
//! ```

pub mod clipboard;
pub mod config;
pub mod editor;
pub mod eyedropper;
pub mod logging;
pub mod store;

pub use editor::{ColorInput, EditorMode, GradientEditor};

/// Everything a host needs to drive a picker.
pub mod prelude {
    pub use crate::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
    pub use crate::config::EditorConfig;
    pub use crate::editor::{ColorInput, EditorMode, GradientEditor};
    pub use crate::eyedropper::EyeDropper;
    pub use crate::logging::{LoggingConfig, init_logging};
    pub use crate::store::{
        JsonFileStore, MemoryStore, Palette, PaletteId, PaletteStore, StoreError, StoreEvent,
        Swatch, SwatchId,
    };

    pub use swatch_color::{Gradient, GradientKind, GradientStop, Hsla, Paint, Rgba, StopId};
}
