//! Hexmap is a small library for building rectangular maps of pointy-topped
//! hexagon tiles and randomly generating land and sea on them. This crate
//! holds all the grid math and generation logic. Rendering and user
//! interaction are left to the caller.
//!
//! ```
//! use hexmap::{HexMap, MapConfig, Point2};
//!
//! let config = MapConfig::default();
//! let map = HexMap::generate(config).unwrap();
//! println!("{}", map.len());
//!
//! // Figure out which tile a mouse click landed on
//! if let Some(tile) = map.pixel2hex(Point2::new(100.0, 100.0)) {
//!     for neighbor in map.find_neighbors(tile) {
//!         println!("{}", neighbor);
//!     }
//! }
//! ```
//!
//! See [MapConfig] for details on how generation can be customized, and
//! [DoubledCoords] for how tiles are addressed.

mod config;
mod map;
mod util;

pub use crate::{
    config::{MapConfig, Seed, TerrainConfig},
    map::{
        hex::{
            AxialCoords, CubeCoords, DoubledCoords, DoubledVector,
            FractionalAxial, FractionalCube, Point2, TileDirection,
        },
        tile::{HexTile, TileType},
        HexMap,
    },
};
