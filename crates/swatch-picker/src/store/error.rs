use std::fmt;

use super::{PaletteId, SwatchId};

/// Failure of a palette store mutation or load.
#[derive(Debug)]
pub enum StoreError {
    UnknownPalette(PaletteId),
    UnknownSwatch(SwatchId),
    /// Palette names must contain something other than whitespace.
    EmptyName,
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::UnknownPalette(id) => write!(f, "no palette with id {}", id.0),
            StoreError::UnknownSwatch(id) => write!(f, "no swatch with id {}", id.0),
            StoreError::EmptyName => f.write_str("palette name is empty"),
            StoreError::Io(e) => write!(f, "palette file i/o failed: {e}"),
            StoreError::Json(e) => write!(f, "palette file is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}
