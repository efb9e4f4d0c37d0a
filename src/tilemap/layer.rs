use std::ops::Range;

use serde::{Deserialize, Serialize, Serializer};

pub const TILE_LAYER: &str = "tilelayer";

/// A Tiled tile layer. `data` is row-major, 0 marks an empty cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub visible: bool,
    #[serde(serialize_with = "whole_as_integer")]
    pub opacity: f64,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u32>,
}

/// Tiled writes `1` rather than `1.0` for a fully opaque layer.
fn whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl Layer {
    fn new(id: u32, name: &str, width: u32, height: u32, data: Vec<u32>) -> Layer {
        Layer {
            id,
            name: name.to_owned(),
            kind: TILE_LAYER.to_owned(),
            visible: true,
            opacity: 1.0,
            x: 0,
            y: 0,
            width,
            height,
            data,
        }
    }

    /// Every cell set to `gid`.
    pub fn filled(id: u32, name: &str, width: u32, height: u32, gid: u32) -> Layer {
        Layer::new(id, name, width, height, vec![gid; (width * height) as usize])
    }

    /// Cells in `columns` set to `gid` on every row, the rest empty.
    /// Columns past the right edge are ignored.
    pub fn column_band(
        id: u32,
        name: &str,
        width: u32,
        height: u32,
        columns: Range<u32>,
        gid: u32,
    ) -> Layer {
        let mut data = vec![0; (width * height) as usize];
        for y in 0..height {
            for x in columns.start..columns.end.min(width) {
                data[(y * width + x) as usize] = gid;
            }
        }
        Layer::new(id, name, width, height, data)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get((y * self.width + x) as usize).copied()
    }
}
