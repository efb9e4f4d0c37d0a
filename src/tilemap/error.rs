use std::io;
use std::path::PathBuf;

use derive_more::Display;

#[derive(Debug, Display)]
pub enum MapError {
    #[display(fmt = "Failed to create directory {}: {}", "path.display()", error)]
    CreateDir { path: PathBuf, error: io::Error },
    #[display(fmt = "Failed to write map {}: {}", "path.display()", error)]
    Write { path: PathBuf, error: io::Error },
    #[display(fmt = "Failed to read map {}: {}", "path.display()", error)]
    Read { path: PathBuf, error: io::Error },
    #[display(fmt = "Invalid map JSON: {}", _0)]
    Json(serde_json::Error),
    #[display(fmt = "Tilesets '{}' and '{}' share global tile ids", first, second)]
    GidOverlap { first: String, second: String },
    #[display(
        fmt = "Layer '{}' uses tile id {} at index {}, which no tileset covers",
        layer,
        gid,
        index
    )]
    GidOutOfRange {
        layer: String,
        gid: u32,
        index: usize,
    },
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::CreateDir { error, .. }
            | MapError::Write { error, .. }
            | MapError::Read { error, .. } => Some(error),
            MapError::Json(error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MapError {
    fn from(error: serde_json::Error) -> Self {
        MapError::Json(error)
    }
}
