use std::io;
use std::path::PathBuf;

use derive_more::Display;

#[derive(Debug, Display)]
pub enum SeamlessError {
    #[display(fmt = "File not found: {}", "_0.display()")]
    NotFound(PathBuf),
    #[display(fmt = "Tile size must be between 1 and 1024, got {}", _0)]
    InvalidTileSize(u32),
    #[display(fmt = "Failed to open image {}: {}", "path.display()", error)]
    Decode {
        path: PathBuf,
        error: ::image::ImageError,
    },
    #[display(fmt = "Failed to save image {}: {}", "path.display()", error)]
    Save {
        path: PathBuf,
        error: ::image::ImageError,
    },
    #[display(fmt = "Failed to create directory {}: {}", "path.display()", error)]
    CreateDir { path: PathBuf, error: io::Error },
    #[display(fmt = "Failed to open {} in the image viewer: {}", "path.display()", error)]
    Viewer { path: PathBuf, error: io::Error },
}

impl std::error::Error for SeamlessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeamlessError::NotFound(_) | SeamlessError::InvalidTileSize(_) => None,
            SeamlessError::Decode { error, .. } | SeamlessError::Save { error, .. } => Some(error),
            SeamlessError::CreateDir { error, .. } | SeamlessError::Viewer { error, .. } => {
                Some(error)
            }
        }
    }
}
