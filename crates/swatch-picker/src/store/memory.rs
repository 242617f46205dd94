use std::sync::mpsc::{self, Receiver, Sender};

use super::{Palette, PaletteId, PaletteStore, StoreError, StoreEvent, Swatch, SwatchId};

/// In-process palette store.
///
/// Ids come from one per-store counter shared by palettes and swatches, so a
/// reloaded store keeps handing out ids above everything it already holds.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    palettes: Vec<Palette>,
    swatches: Vec<Swatch>,
    next_id: u64,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from saved records.
    ///
    /// Swatches pointing at a missing palette are dropped with a warning.
    pub fn from_records(palettes: Vec<Palette>, swatches: Vec<Swatch>) -> Self {
        let (swatches, orphans): (Vec<_>, Vec<_>) = swatches
            .into_iter()
            .partition(|s| palettes.iter().any(|p| p.id == s.palette_id));
        for orphan in &orphans {
            log::warn!(
                "dropping swatch {} of missing palette {}",
                orphan.id.0,
                orphan.palette_id.0
            );
        }

        let max_palette = palettes.iter().map(|p| p.id.0).max().unwrap_or(0);
        let max_swatch = swatches.iter().map(|s| s.id.0).max().unwrap_or(0);
        Self {
            palettes,
            swatches,
            next_id: max_palette.max(max_swatch),
            subscribers: Vec::new(),
        }
    }

    /// Snapshot of every record, palettes first.
    pub fn records(&self) -> (Vec<Palette>, Vec<Swatch>) {
        (self.palettes.clone(), self.swatches.clone())
    }

    pub(super) fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn has_palette(&self, id: PaletteId) -> bool {
        self.palettes.iter().any(|p| p.id == id)
    }

    fn emit(&mut self, event: StoreEvent) {
        // Disconnected receivers are pruned here.
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl PaletteStore for MemoryStore {
    fn palettes(&self) -> Vec<Palette> {
        self.palettes.clone()
    }

    fn swatches(&self, palette: PaletteId) -> Result<Vec<Swatch>, StoreError> {
        if !self.has_palette(palette) {
            return Err(StoreError::UnknownPalette(palette));
        }
        Ok(self.swatches.iter().filter(|s| s.palette_id == palette).cloned().collect())
    }

    fn add_palette(&mut self, name: &str) -> Result<Palette, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let palette = Palette { id: PaletteId(self.alloc_id()), name: name.to_owned() };
        self.palettes.push(palette.clone());
        log::debug!("added palette {} ({:?})", palette.id.0, palette.name);
        self.emit(StoreEvent::PaletteAdded(palette.id));
        Ok(palette)
    }

    fn delete_palette(&mut self, id: PaletteId) -> Result<(), StoreError> {
        if !self.has_palette(id) {
            return Err(StoreError::UnknownPalette(id));
        }
        self.palettes.retain(|p| p.id != id);
        let before = self.swatches.len();
        self.swatches.retain(|s| s.palette_id != id);
        log::debug!("deleted palette {} and {} swatches", id.0, before - self.swatches.len());
        self.emit(StoreEvent::PaletteDeleted(id));
        Ok(())
    }

    fn add_color(&mut self, palette: PaletteId, value: &str) -> Result<Swatch, StoreError> {
        if !self.has_palette(palette) {
            return Err(StoreError::UnknownPalette(palette));
        }
        let swatch = Swatch { id: SwatchId(self.alloc_id()), value: value.to_owned(), palette_id: palette };
        self.swatches.push(swatch.clone());
        self.emit(StoreEvent::ColorAdded { id: swatch.id, palette });
        Ok(swatch)
    }

    fn delete_color(&mut self, id: SwatchId) -> Result<(), StoreError> {
        let index = self
            .swatches
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::UnknownSwatch(id))?;
        let removed = self.swatches.remove(index);
        self.emit(StoreEvent::ColorDeleted { id, palette: removed.palette_id });
        Ok(())
    }

    fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }
}
