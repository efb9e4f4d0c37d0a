/// Where the generator writes the map when no `--output` is given.
pub const DEFAULT_OUTPUT_PATH: &str = "/Volumes/ELITE SE880/cg-town/frontend/public/maps/main.json";

pub const GRASS: &str = "grass";
pub const RIVER: &str = "river";
pub const GRASS_RIVER_EDGE: &str = "grass_river_edge";

/// Knobs for the generated map and the tilesets it references.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Tile edge in pixels, shared by the map and every tileset.
    pub tile_size: u32,
    pub tileset_columns: u32,
    pub tileset_tile_count: u32,
    pub tileset_image_size: u32,
    /// Tileset image directory, relative to the map file.
    pub image_dir: String,
    /// Tileset painted on every cell of the ground layer.
    pub ground_tileset: String,
    /// Tileset painted in the river band.
    pub water_tileset: String,
    /// Tileset painted on the grass/river edge column.
    pub edge_tileset: String,
    /// First tile column of the river band; it runs to the right edge.
    pub river_start_column: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            width: 24,
            height: 12,
            tile_size: 64,
            tileset_columns: 16,
            tileset_tile_count: 256,
            tileset_image_size: 1024,
            image_dir: String::from("../images/tiles/workspace"),
            ground_tileset: String::from(GRASS),
            water_tileset: String::from(RIVER),
            edge_tileset: String::from(GRASS_RIVER_EDGE),
            river_start_column: 20,
        }
    }
}

impl MapConfig {
    /// Tileset names in `firstgid` order. Each image is `<image_dir>/<name>.png`.
    pub fn tileset_names(&self) -> [&str; 3] {
        [
            self.ground_tileset.as_str(),
            self.water_tileset.as_str(),
            self.edge_tileset.as_str(),
        ]
    }

    /// The grass/river edge runs along the column just left of the river.
    pub fn edge_column(&self) -> u32 {
        self.river_start_column.saturating_sub(1)
    }
}
