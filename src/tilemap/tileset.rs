use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::config::MapConfig;

/// An embedded tileset entry of a Tiled JSON map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilesetRef {
    pub columns: u32,
    pub firstgid: u32,
    pub image: String,
    pub imageheight: u32,
    pub imagewidth: u32,
    pub margin: u32,
    pub name: String,
    pub spacing: u32,
    pub tilecount: u32,
    pub tileheight: u32,
    pub tilewidth: u32,
}

impl TilesetRef {
    /// Global ids owned by this tileset.
    pub fn gid_range(&self) -> Range<u32> {
        self.firstgid..self.firstgid + self.tilecount
    }

    pub fn contains(&self, gid: u32) -> bool {
        self.gid_range().contains(&gid)
    }

    /// Global id of the tile at `local` within this tileset.
    pub fn gid(&self, local: u32) -> u32 {
        self.firstgid + local
    }
}

/// Build the configured tilesets back to back, the first one starting at gid 1.
pub fn build_tilesets(config: &MapConfig) -> Vec<TilesetRef> {
    let mut firstgid = 1;
    let names = config.tileset_names();
    names
        .iter()
        .map(|name| {
            let tileset = TilesetRef {
                columns: config.tileset_columns,
                firstgid,
                image: format!("{}/{}.png", config.image_dir, name),
                imageheight: config.tileset_image_size,
                imagewidth: config.tileset_image_size,
                margin: 0,
                name: (*name).to_owned(),
                spacing: 0,
                tilecount: config.tileset_tile_count,
                tileheight: config.tile_size,
                tilewidth: config.tile_size,
            };
            firstgid += config.tileset_tile_count;
            tileset
        })
        .collect()
}
