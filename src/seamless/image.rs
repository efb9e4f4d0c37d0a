use std::path::{Path, PathBuf};

use ::image::{ImageFormat, RgbaImage};

use super::error::SeamlessError;

/// Load the image at `path` as RGBA, whatever its stored pixel format.
pub fn open_rgba(path: &Path) -> Result<RgbaImage, SeamlessError> {
    if !path.exists() {
        return Err(SeamlessError::NotFound(path.to_owned()));
    }
    let img = ::image::open(path).map_err(|error| SeamlessError::Decode {
        path: path.to_owned(),
        error,
    })?;
    Ok(img.to_rgba8())
}

pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), SeamlessError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|error| SeamlessError::Save {
            path: path.to_owned(),
            error,
        })
}

/// File stem of `path`, lossily converted. Empty when the path has no file name.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `<dir>/<stem><suffix>.png`, next to the source image.
pub fn sibling_png(path: &Path, suffix: &str) -> PathBuf {
    path.with_file_name(format!("{}{}.png", base_name(path), suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_png_replaces_extension() {
        let out = sibling_png(Path::new("tiles/workspace/grass.png"), "_2x2");
        assert_eq!(out, PathBuf::from("tiles/workspace/grass_2x2.png"));
    }

    #[test]
    fn test_sibling_png_without_extension() {
        let out = sibling_png(Path::new("river"), "_offset");
        assert_eq!(out, PathBuf::from("river_offset.png"));
    }

    #[test]
    fn test_base_name_keeps_inner_dots() {
        assert_eq!(base_name(Path::new("a/grass.v2.png")), "grass.v2");
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_rgba(Path::new("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, SeamlessError::NotFound(_)));
    }

    #[test]
    fn test_open_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not really a png").unwrap();
        let err = open_rgba(&path).unwrap_err();
        assert!(matches!(err, SeamlessError::Decode { .. }));
    }
}
