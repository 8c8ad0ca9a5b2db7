use crate::map::hex::{AxialCoords, CubeCoords, DoubledCoords, Point2};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    f64::consts::PI,
    hash::{Hash, Hasher},
};
use strum::{EnumIter, EnumString};

/// The terrain category of a tile. Every tile has exactly one type. Tiles
/// start out as [TileType::Sea] and get converted by the map generators.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TileType {
    Land,
    Sea,
}

impl Default for TileType {
    fn default() -> Self {
        Self::Sea
    }
}

/// A map is comprised of tiles. Each tile is a pointy-topped hexagon with a
/// fixed center and size in screen space, plus a logical position in the grid.
///
/// Everything except the tile type is fixed at construction. Geometry (corner
/// positions) is calculated up front, so reading it back is free. The tile
/// type can only be changed from within this crate, by the map generators.
///
/// Two tiles are considered equal if they have the same [DoubledCoords]. The
/// geometry plays no part in a tile's identity.
#[derive(Clone, Debug, Display)]
#[display(fmt = "{} tile at {}", "self.tile_type", "self.doubled")]
pub struct HexTile {
    /// Center of the tile, in screen space
    position: Point2,

    /// Distance from the center to any corner. Also the length of each side.
    size: f64,

    /// Logical position within the map. See [DoubledCoords] for a description
    /// of the coordinate system.
    doubled: DoubledCoords,

    /// All 6 corners, rounded to whole pixels. See [Self::corners].
    corners: [Point2; 6],

    /// What kind of terrain this tile is. This is `pub(crate)` so generators
    /// can modify it.
    pub(crate) tile_type: TileType,
}

impl HexTile {
    /// Create a new tile centered on `position`, with the given size (distance
    /// from center to corner). The tile type will be the default,
    /// [TileType::Sea].
    pub fn new(position: Point2, size: f64, doubled: DoubledCoords) -> Self {
        debug_assert!(size > 0.0, "tile size must be positive, got {}", size);
        Self {
            position,
            size,
            doubled,
            corners: Self::calculate_corners(position, size),
            tile_type: TileType::default(),
        }
    }

    /// Width of a tile with the given size. The tile is measured flat side to
    /// flat side, so this is `sqrt(3) * size` (twice the sine of 60 degrees).
    pub fn width_for_size(size: f64) -> f64 {
        3.0_f64.sqrt() * size
    }

    /// Height of a tile with the given size. The tile is measured vertex to
    /// vertex, so this is just `2 * size`.
    pub fn height_for_size(size: f64) -> f64 {
        2.0 * size
    }

    fn calculate_corners(position: Point2, size: f64) -> [Point2; 6] {
        let mut corners = [Point2::ORIGIN; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            // Start 30 degrees off the x axis, so that we get a pointy top
            let angle = (60.0 * i as f64 + 30.0) * PI / 180.0;
            *corner = Point2::new(
                position.x + size * angle.cos(),
                position.y + size * angle.sin(),
            )
            .round();
        }
        corners
    }

    /// Center of the tile, in screen space
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Distance from the center of the tile to any of its corners
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Full width of the tile, from left side to right side
    pub fn width(&self) -> f64 {
        Self::width_for_size(self.size)
    }

    /// Full height of the tile, from top vertex to bottom vertex
    pub fn height(&self) -> f64 {
        Self::height_for_size(self.size)
    }

    /// The 6 corners of this tile, in screen space. Corners are rounded to the
    /// nearest pixel. The first corner is 30 degrees clockwise (on screen) from
    /// the positive x axis, i.e. the lower-right corner, and the rest proceed
    /// clockwise from there. Pass these straight to a polygon drawing function
    /// to render the tile.
    pub fn corners(&self) -> &[Point2; 6] {
        &self.corners
    }

    /// Position of the tile in doubled coordinates
    pub fn doubled(&self) -> DoubledCoords {
        self.doubled
    }

    /// Position of the tile in axial coordinates
    pub fn axial(&self) -> AxialCoords {
        self.doubled.to_axial()
    }

    /// Position of the tile in cube coordinates
    pub fn cube(&self) -> CubeCoords {
        self.axial().to_cube()
    }

    /// The terrain category of this tile
    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    /// Number of steps to get from this tile to the other one. Adjacent tiles
    /// are 1 step apart.
    pub fn distance_to(&self, other: &HexTile) -> usize {
        self.cube().distance_to(other.cube())
    }
}

impl PartialEq for HexTile {
    fn eq(&self, other: &Self) -> bool {
        self.doubled == other.doubled
    }
}

impl Eq for HexTile {}

impl Hash for HexTile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.doubled.hash(state);
    }
}
