use crate::{Point2, TileType};
use derive_more::Display;
use fnv::FnvHasher;
use serde::{Deserialize, Serialize};
use std::hash::Hasher;
use validator::Validate;

/// Configuration that defines a map generation process. Two maps generated
/// with the same config will always be identical.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MapConfig {
    /// RNG seed to use for all randomized processes during generation. See
    /// [Seed] for the accepted formats.
    pub seed: Seed,

    /// Number of tiles in each row
    #[validate(range(min = 1, max = 4096))]
    pub width: u16,

    /// Number of rows
    #[validate(range(min = 1, max = 4096))]
    pub height: u16,

    /// Distance from the center of each tile to any of its corners, in
    /// pixels. This is also the length of each side of a tile.
    #[validate(range(min = 0.01))]
    pub hex_size: f64,

    /// Where the center of the top-left tile should land, in pixels. Every
    /// other tile is laid out relative to this.
    pub first_hex: Point2,

    /// Config for how tile types get assigned
    #[validate]
    pub terrain: TerrainConfig,
}

/// RNG seed for map generation. Config files and the command line can give a
/// number, or any string (so maps can be shared by name, e.g. "islands").
/// Text that reads as a `u64` is stored as that number. Any other text is
/// hashed into one when the RNG gets seeded.
///
/// Seeds are always written out as strings. JSON and TOML can't hold every
/// `u64`, and the string form parses back to the same seed.
#[derive(Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SeedRepr", into = "String")]
pub enum Seed {
    Int(u64),
    Text(String),
}

/// What a seed can look like in a config file
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedRepr {
    Int(u64),
    Text(String),
}

impl Seed {
    /// The value to seed the map RNG with
    pub fn to_u64(&self) -> u64 {
        match self {
            Self::Int(seed) => *seed,
            Self::Text(text) => {
                let mut hasher = FnvHasher::default();
                hasher.write(text.as_bytes());
                hasher.finish()
            }
        }
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Self::Int(seed)
    }
}

impl From<&str> for Seed {
    fn from(seed: &str) -> Self {
        seed.parse().map_or_else(|_| Self::Text(seed.into()), Self::Int)
    }
}

impl From<SeedRepr> for Seed {
    fn from(repr: SeedRepr) -> Self {
        match repr {
            SeedRepr::Int(seed) => Self::Int(seed),
            SeedRepr::Text(text) => text.as_str().into(),
        }
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.to_string()
    }
}

/// Configuration for the terrain generators. First every tile gets a random
/// type based on `land_probability`, then a set of random walkers paint
/// `walk_type` across the map.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TerrainConfig {
    /// The odds that any single tile will start out as land (instead of sea)
    /// during the initial fill. 0.0 means the map starts out all sea, 1.0
    /// means all land.
    #[validate(range(min = 0.0, max = 1.0))]
    pub land_probability: f64,

    /// Number of random walkers to send out. Each one starts on a random tile.
    pub walkers: u32,

    /// Number of steps each walker takes. Each step paints one tile.
    pub walk_length: u32,

    /// The tile type that walkers paint
    pub walk_type: TileType,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Danger! This means the default will vary between calls!
            seed: Seed::Int(rand::random()),

            width: 80,
            height: 80,
            hex_size: 10.0,
            first_hex: Point2::new(20.0, 20.0),
            terrain: TerrainConfig::default(),
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            land_probability: 0.0,
            walkers: 25,
            walk_length: 150,
            walk_type: TileType::Land,
        }
    }
}
