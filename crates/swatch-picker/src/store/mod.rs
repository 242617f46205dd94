//! Saved palettes and swatches.
//!
//! The picker never talks to a backend directly. It goes through
//! [`PaletteStore`]: pull the current records, push mutations, and subscribe
//! to a change channel. Swatch values are opaque CSS strings to the store.
//!
//! Two implementations ship:
//! - [`MemoryStore`]: in-process, used by tests and as the core of the file store;
//! - [`JsonFileStore`]: a [`MemoryStore`] persisted to a JSON document after
//!   every mutation.

mod error;
mod json_file;
mod memory;

use std::sync::mpsc::Receiver;

use serde::{Deserialize, Serialize};

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

// ── Records ───────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteId(pub u64);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwatchId(pub u64);

/// A named group of swatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub id: PaletteId,
    pub name: String,
}

/// A saved color or gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub id: SwatchId,
    /// CSS color or gradient text.
    pub value: String,
    #[serde(rename = "paletteId")]
    pub palette_id: PaletteId,
}

/// Change notification delivered to subscribers after a mutation succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    PaletteAdded(PaletteId),
    PaletteDeleted(PaletteId),
    ColorAdded { id: SwatchId, palette: PaletteId },
    ColorDeleted { id: SwatchId, palette: PaletteId },
}

// ── PaletteStore ──────────────────────────────────────────────────────────

/// Pull/subscribe access to palettes and their swatches.
pub trait PaletteStore {
    /// All palettes in creation order.
    fn palettes(&self) -> Vec<Palette>;

    /// Swatches of one palette in creation order.
    fn swatches(&self, palette: PaletteId) -> Result<Vec<Swatch>, StoreError>;

    fn add_palette(&mut self, name: &str) -> Result<Palette, StoreError>;

    /// Deletes a palette together with its swatches.
    fn delete_palette(&mut self, id: PaletteId) -> Result<(), StoreError>;

    fn add_color(&mut self, palette: PaletteId, value: &str) -> Result<Swatch, StoreError>;

    fn delete_color(&mut self, id: SwatchId) -> Result<(), StoreError>;

    /// Channel receiving every [`StoreEvent`] from now on. Dropping the
    /// receiver unsubscribes.
    fn subscribe(&mut self) -> Receiver<StoreEvent>;
}
