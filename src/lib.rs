//! Asset workspace helpers for the tile artists: seamless texture checks and
//! a generator for the starter Tiled map.

pub mod seamless;
pub mod tilemap;
