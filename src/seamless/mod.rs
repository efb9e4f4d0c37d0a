pub mod error;
pub mod image;
pub mod viewer;

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use ::image::{imageops, RgbaImage};
use indicatif::{ProgressBar, ProgressStyle};

use error::SeamlessError;
use self::image::{base_name, open_rgba, save_png, sibling_png};

pub const DEFAULT_TILE_SIZE: u32 = 64;
pub const MAX_TILE_SIZE: u32 = 1024;

/// Where `slice_to_tiles` wrote its tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceOutput {
    pub dir: PathBuf,
    pub count: usize,
}

/// Repeat `img` in a 2x2 grid with no gaps, so the edges meet in the middle.
pub fn tile_2x2(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    let mut output = RgbaImage::new(w * 2, h * 2);
    for &(x, y) in &[(0, 0), (w, 0), (0, h), (w, h)] {
        imageops::replace(&mut output, img, i64::from(x), i64::from(y));
    }
    output
}

/// Swap diagonally opposite quadrants, moving the original corners to the
/// centre of an image of the same size.
///
/// Quadrants are split at `w / 2` and `h / 2`. For odd dimensions the right and
/// bottom quadrants are one pixel larger; pasting them at the half offsets
/// overlaps the neighbouring quadrant and leaves the last column/row
/// transparent, so the transform only round-trips for even sizes.
pub fn offset_quadrants(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    let (half_w, half_h) = (w / 2, h / 2);

    let top_left = imageops::crop_imm(img, 0, 0, half_w, half_h).to_image();
    let top_right = imageops::crop_imm(img, half_w, 0, w - half_w, half_h).to_image();
    let bottom_left = imageops::crop_imm(img, 0, half_h, half_w, h - half_h).to_image();
    let bottom_right = imageops::crop_imm(img, half_w, half_h, w - half_w, h - half_h).to_image();

    let (hx, hy) = (i64::from(half_w), i64::from(half_h));
    let mut output = RgbaImage::new(w, h);
    imageops::replace(&mut output, &bottom_right, 0, 0);
    imageops::replace(&mut output, &bottom_left, hx, 0);
    imageops::replace(&mut output, &top_right, 0, hy);
    imageops::replace(&mut output, &top_left, hx, hy);
    output
}

/// Cut `img` into `tile_size` squares, row by row. Returned as `(row, col, tile)`.
/// Right and bottom strips narrower than a tile are dropped.
pub fn slice_grid(img: &RgbaImage, tile_size: u32) -> Vec<(u32, u32, RgbaImage)> {
    let tiles_x = img.width() / tile_size;
    let tiles_y = img.height() / tile_size;
    let mut tiles = Vec::with_capacity((tiles_x * tiles_y) as usize);
    for y in 0..tiles_y {
        for x in 0..tiles_x {
            let tile =
                imageops::crop_imm(img, x * tile_size, y * tile_size, tile_size, tile_size)
                    .to_image();
            tiles.push((y, x, tile));
        }
    }
    tiles
}

/// Tile the image 2x2 and save it as `<base>_2x2.png` next to the source.
pub fn check(path: &Path) -> Result<PathBuf, SeamlessError> {
    let img = open_rgba(path)?;
    let output = tile_2x2(&img);
    let output_path = sibling_png(path, "_2x2");
    save_png(&output, &output_path)?;

    eprintln!("✅ Saved: {}", output_path.display());
    eprintln!("   Source size: {}x{}", img.width(), img.height());
    eprintln!("   Result size: {}x{}", output.width(), output.height());
    Ok(output_path)
}

/// Move the seams to the centre and save the result as `<base>_offset.png`.
pub fn offset_preview(path: &Path) -> Result<PathBuf, SeamlessError> {
    let img = open_rgba(path)?;
    let output = offset_quadrants(&img);
    let output_path = sibling_png(path, "_offset");
    save_png(&output, &output_path)?;

    eprintln!("✅ Offset saved: {}", output_path.display());
    eprintln!("   -> fix the cross-shaped seam in the centre with your image editor");
    Ok(output_path)
}

/// Slice into `<base>_tiles/tile_<row>_<col>.png` under the current directory.
pub fn slice_to_tiles(path: &Path, tile_size: u32) -> Result<SliceOutput, SeamlessError> {
    slice_to_tiles_in(path, tile_size, Path::new("."))
}

/// Slice into `<parent>/<base>_tiles`, creating the directory if needed.
/// Existing tiles with the same names are overwritten.
pub fn slice_to_tiles_in(
    path: &Path,
    tile_size: u32,
    parent: &Path,
) -> Result<SliceOutput, SeamlessError> {
    validate_tile_size(tile_size)?;
    let img = open_rgba(path)?;

    let dir = parent.join(format!("{}_tiles", base_name(path)));
    create_dir_all(&dir).map_err(|error| SeamlessError::CreateDir {
        path: dir.clone(),
        error,
    })?;

    let tiles = slice_grid(&img, tile_size);
    let pb = ProgressBar::new(tiles.len() as u64)
        .with_message("Slicing")
        .with_style(
            ProgressStyle::default_bar()
                .template("{msg} {wide_bar} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
    for (row, col, tile) in tiles.iter() {
        save_png(tile, &dir.join(format!("tile_{}_{}.png", row, col)))?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    eprintln!("✅ {} tiles written to {}/", tiles.len(), dir.display());
    eprintln!("   Tile size: {}x{}", tile_size, tile_size);
    Ok(SliceOutput {
        dir,
        count: tiles.len(),
    })
}

pub fn validate_tile_size(tile_size: u32) -> Result<(), SeamlessError> {
    if tile_size == 0 || tile_size > MAX_TILE_SIZE {
        return Err(SeamlessError::InvalidTileSize(tile_size));
    }
    Ok(())
}
