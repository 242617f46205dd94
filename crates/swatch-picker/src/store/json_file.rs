use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::{MemoryStore, Palette, PaletteId, PaletteStore, StoreError, StoreEvent, Swatch, SwatchId};

/// On-disk layout of a palette file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PaletteDocument {
    #[serde(default)]
    palettes: Vec<Palette>,
    #[serde(default)]
    swatches: Vec<Swatch>,
}

/// A [`MemoryStore`] persisted to a pretty-printed JSON file.
///
/// Every mutation is applied to a copy of the records and written out first.
/// Only when the file write succeeds does the copy replace the live records
/// and are subscribers notified, so a failed write leaves the store exactly
/// as it was. The file is replaced by rename, never truncated in place.
///
/// A missing file is treated as an empty store and only created on the first
/// write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let inner = if path.exists() {
            let text = fs::read_to_string(&path)?;
            let doc: PaletteDocument = if text.trim().is_empty() {
                PaletteDocument::default()
            } else {
                serde_json::from_str(&text)?
            };
            log::debug!(
                "loaded {} palettes and {} swatches from {}",
                doc.palettes.len(),
                doc.swatches.len(),
                path.display()
            );
            MemoryStore::from_records(doc.palettes, doc.swatches)
        } else {
            MemoryStore::new()
        };
        Ok(Self { path, inner, subscribers: Vec::new() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `op` on a copy of the records, persists the copy, then commits it.
    fn commit<T>(
        &mut self,
        op: impl FnOnce(&mut MemoryStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.inner.clone();
        let events = next.subscribe();
        let value = op(&mut next)?;
        if let Err(e) = self.write(&next) {
            log::warn!("palette file {} not updated: {e}", self.path.display());
            return Err(e);
        }

        self.inner = next;
        self.inner.clear_subscribers();
        for event in events.try_iter() {
            self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        }
        Ok(value)
    }

    fn write(&self, store: &MemoryStore) -> Result<(), StoreError> {
        let (palettes, swatches) = store.records();
        let json = serde_json::to_string_pretty(&PaletteDocument { palettes, swatches })?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl PaletteStore for JsonFileStore {
    fn palettes(&self) -> Vec<Palette> {
        self.inner.palettes()
    }

    fn swatches(&self, palette: PaletteId) -> Result<Vec<Swatch>, StoreError> {
        self.inner.swatches(palette)
    }

    fn add_palette(&mut self, name: &str) -> Result<Palette, StoreError> {
        self.commit(|store| store.add_palette(name))
    }

    fn delete_palette(&mut self, id: PaletteId) -> Result<(), StoreError> {
        self.commit(|store| store.delete_palette(id))
    }

    fn add_color(&mut self, palette: PaletteId, value: &str) -> Result<Swatch, StoreError> {
        self.commit(|store| store.add_color(palette, value))
    }

    fn delete_color(&mut self, id: SwatchId) -> Result<(), StoreError> {
        self.commit(|store| store.delete_color(id))
    }

    fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }
}
