pub mod config;
pub mod error;
pub mod layer;
pub mod tileset;

use std::fmt;
use std::fs::{self, create_dir_all};
use std::path::Path;

use serde::{Deserialize, Serialize};

use config::MapConfig;
use error::MapError;
use layer::Layer;
use tileset::{build_tilesets, TilesetRef};

/// An orthogonal, finite Tiled map in the JSON layout Tiled 1.10 reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    pub compressionlevel: i32,
    pub height: u32,
    pub width: u32,
    pub infinite: bool,
    pub orientation: String,
    pub renderorder: String,
    pub tiledversion: String,
    pub tileheight: u32,
    pub tilewidth: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub layers: Vec<Layer>,
    pub tilesets: Vec<TilesetRef>,
}

/// The starter map: grass everywhere, a river along the right edge and an
/// edge strip between them.
pub fn create_tilemap() -> TileMap {
    create_tilemap_with(&MapConfig::default())
}

pub fn create_tilemap_with(config: &MapConfig) -> TileMap {
    let tilesets = build_tilesets(config);
    let (width, height) = (config.width, config.height);

    // each layer paints the first tile of its own tileset
    let ground = Layer::filled(1, "ground", width, height, tilesets[0].gid(0));
    let water = Layer::column_band(
        2,
        "water",
        width,
        height,
        config.river_start_column..width,
        tilesets[1].gid(0),
    );
    let edge_column = config.edge_column();
    let edge = Layer::column_band(
        3,
        "edge",
        width,
        height,
        edge_column..edge_column + 1,
        tilesets[2].gid(0),
    );

    TileMap {
        compressionlevel: -1,
        height,
        width,
        infinite: false,
        orientation: String::from("orthogonal"),
        renderorder: String::from("right-down"),
        tiledversion: String::from("1.11.2"),
        tileheight: config.tile_size,
        tilewidth: config.tile_size,
        kind: String::from("map"),
        version: String::from("1.10"),
        layers: vec![ground, water, edge],
        tilesets,
    }
}

impl TileMap {
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// The tileset whose gid range holds `gid`. Empty cells (0) have none.
    pub fn tileset_for_gid(&self, gid: u32) -> Option<&TilesetRef> {
        self.tilesets.iter().find(|tileset| tileset.contains(gid))
    }

    /// Check that tileset gid ranges are disjoint and that every placed tile
    /// belongs to one of them.
    pub fn validate(&self) -> Result<(), MapError> {
        for (i, first) in self.tilesets.iter().enumerate() {
            for second in &self.tilesets[i + 1..] {
                let (a, b) = (first.gid_range(), second.gid_range());
                if a.start < b.end && b.start < a.end {
                    return Err(MapError::GidOverlap {
                        first: first.name.clone(),
                        second: second.name.clone(),
                    });
                }
            }
        }
        for layer in &self.layers {
            let stray = layer
                .data
                .iter()
                .enumerate()
                .find(|&(_, &gid)| gid != 0 && self.tileset_for_gid(gid).is_none());
            if let Some((index, &gid)) = stray {
                return Err(MapError::GidOutOfRange {
                    layer: layer.name.clone(),
                    gid,
                    index,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<&str> = self.layers.iter().map(|l| l.name.as_str()).collect();
        let tilesets: Vec<&str> = self.tilesets.iter().map(|t| t.name.as_str()).collect();
        writeln!(f, "Map info:")?;
        writeln!(f, "  - Size: {} x {} tiles", self.width, self.height)?;
        writeln!(f, "  - Tile size: {}px", self.tilewidth)?;
        writeln!(f, "  - Layers: {}", layers.join(", "))?;
        write!(f, "  - Tilesets: {}", tilesets.join(", "))
    }
}

/// Write `tilemap` as pretty-printed JSON, creating parent directories.
pub fn save(tilemap: &TileMap, output_path: &Path) -> Result<(), MapError> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|error| MapError::CreateDir {
            path: parent.to_owned(),
            error,
        })?;
    }
    let json = serde_json::to_string_pretty(tilemap)?;
    fs::write(output_path, json).map_err(|error| MapError::Write {
        path: output_path.to_owned(),
        error,
    })?;
    eprintln!("✅ Map saved: {}", output_path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<TileMap, MapError> {
    let json = fs::read_to_string(path).map_err(|error| MapError::Read {
        path: path.to_owned(),
        error,
    })?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const WIDTH: usize = 24;

    #[test]
    fn test_layers_cover_the_whole_map() {
        let map = create_tilemap();
        assert_eq!((map.width, map.height), (24, 12));
        assert_eq!((map.tilewidth, map.tileheight), (64, 64));
        let names: Vec<&str> = map.layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["ground", "water", "edge"]);
        for layer in &map.layers {
            assert_eq!(layer.data.len(), 288);
            assert_eq!((layer.width, layer.height), (24, 12));
        }
    }

    #[test]
    fn test_ground_is_all_grass() {
        let map = create_tilemap();
        assert!(map.layer("ground").unwrap().data.iter().all(|&gid| gid == 1));
    }

    #[test]
    fn test_water_occupies_columns_20_to_23() {
        let map = create_tilemap();
        let water = map.layer("water").unwrap();
        for (i, &gid) in water.data.iter().enumerate() {
            let column = i % WIDTH;
            if (20..24).contains(&column) {
                assert_eq!(gid, 257, "index {}", i);
            } else {
                assert_eq!(gid, 0, "index {}", i);
            }
        }
    }

    #[test]
    fn test_edge_occupies_column_19() {
        let map = create_tilemap();
        let edge = map.layer("edge").unwrap();
        for (i, &gid) in edge.data.iter().enumerate() {
            let expected = if i % WIDTH == 19 { 513 } else { 0 };
            assert_eq!(gid, expected, "index {}", i);
        }
    }

    #[test]
    fn test_layer_ids_follow_tileset_firstgids() {
        let config = MapConfig {
            tileset_tile_count: 100,
            ..MapConfig::default()
        };
        let map = create_tilemap_with(&config);
        assert_eq!(map.layer("water").unwrap().get(20, 0), Some(101));
        assert_eq!(map.layer("edge").unwrap().get(19, 5), Some(201));
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_default_map_is_valid() {
        let map = create_tilemap();
        assert!(map.validate().is_ok());
        assert_eq!(map.tileset_for_gid(257).unwrap().name, "river");
        assert!(map.tileset_for_gid(0).is_none());
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let mut map = create_tilemap();
        map.tilesets[1].firstgid = 200;
        assert!(matches!(map.validate(), Err(MapError::GidOverlap { .. })));
    }

    #[test]
    fn test_validate_rejects_stray_gid() {
        let mut map = create_tilemap();
        map.layers[2].data[5] = 9999;
        match map.validate() {
            Err(MapError::GidOutOfRange { layer, gid, index }) => {
                assert_eq!((layer.as_str(), gid, index), ("edge", 9999, 5));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_json_schema_keys() {
        let json = serde_json::to_value(create_tilemap()).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "compressionlevel",
                "height",
                "infinite",
                "layers",
                "orientation",
                "renderorder",
                "tiledversion",
                "tileheight",
                "tilesets",
                "tilewidth",
                "type",
                "version",
                "width",
            ]
        );
        assert_eq!(json["type"], "map");
        assert_eq!(json["orientation"], "orthogonal");
        assert_eq!(json["renderorder"], "right-down");
        assert_eq!(json["compressionlevel"], -1);
        assert_eq!(json["infinite"], false);
        assert_eq!(json["tilesets"][2]["firstgid"], 513);
        assert_eq!(
            json["tilesets"][0]["image"],
            "../images/tiles/workspace/grass.png"
        );
        assert!(matches!(json["layers"][0]["data"], Value::Array(ref a) if a.len() == 288));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("maps").join("main.json");
        let map = create_tilemap();
        save(&map, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, map);
        for (a, b) in loaded.layers.iter().zip(map.layers.iter()) {
            assert_eq!(a.data, b.data);
        }
        assert_eq!(loaded.tilesets, map.tilesets);
    }

    #[test]
    fn test_save_into_file_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("maps");
        fs::write(&blocker, b"").unwrap();
        let err = save(&create_tilemap(), &blocker.join("main.json")).unwrap_err();
        assert!(matches!(err, MapError::CreateDir { .. }));
    }

    #[test]
    fn test_summary() {
        let summary = create_tilemap().to_string();
        assert!(summary.contains("24 x 12 tiles"));
        assert!(summary.contains("64px"));
        assert!(summary.contains("ground, water, edge"));
        assert!(summary.contains("grass, river, grass_river_edge"));
    }
}
