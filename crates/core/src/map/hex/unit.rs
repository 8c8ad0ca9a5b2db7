//! This sub-module contains the basic value types for the three grid
//! coordinate systems, plus the screen-space point type. See the parent module
//! documentation for a description of each system and how they relate.

use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::cmp;
use strum::{EnumIter, IntoEnumIterator};

/// A 2D point in screen space, measured in pixels. `x` grows to the right and
/// `y` grows **downward**, matching pretty much every windowing and image
/// library out there.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    Neg,
    Add,
    Sub,
    Mul,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance between two points
    pub fn distance_to(self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Round both components to the nearest whole pixel
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<nalgebra::Vector2<f64>> for Point2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<Point2> for nalgebra::Vector2<f64> {
    fn from(other: Point2) -> Self {
        nalgebra::Vector2::new(other.x, other.y)
    }
}

/// A tile position in "doubled-width" offset coordinates. This is the system
/// that lines up with how a rectangular map is laid out on screen: `y` is the
/// row index, and `x` steps by 2 for every column. Odd rows are shifted half a
/// tile to the right, which is represented by adding 1 to `x`.
///
/// ```text
/// row 0:  (0,0)   (2,0)   (4,0)
/// row 1:      (1,1)   (3,1)   (5,1)
/// row 2:  (0,2)   (2,2)   (4,2)
/// ```
///
/// This means that only coordinates where `x` and `y` have the same parity
/// refer to a real tile. Coordinates like `(1, 0)` can be constructed, but
/// will never be found in a map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct DoubledCoords {
    x: i32,
    y: i32,
}

impl DoubledCoords {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the doubled coordinates of the tile at the given row and column of
    /// a rectangular map. Even rows get even `x` values, odd rows get odd `x`
    /// values.
    pub const fn from_offset(row: i32, column: i32) -> Self {
        Self::new(column * 2 + (row & 1), row)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// The row that this position falls in. Same as `y`.
    pub fn row(&self) -> i32 {
        self.y
    }

    /// The column that this position falls in, i.e. `x` with the doubling
    /// removed. Uses floor division, so `-1` maps to column `-1`, not `0`.
    pub fn column(&self) -> i32 {
        self.x.div_euclid(2)
    }

    /// Does this position have matching `x`/`y` parity? Only valid positions
    /// can refer to an actual tile.
    pub fn is_valid(&self) -> bool {
        (self.x - self.y).rem_euclid(2) == 0
    }

    /// Convert to axial coordinates. `q = floor((x - y) / 2)`, `r = y`.
    pub fn to_axial(self) -> AxialCoords {
        AxialCoords::new((self.x - self.y).div_euclid(2), self.y)
    }

    /// Get the position of the tile adjacent to this one in the given
    /// direction. **The returned position won't necessarily exist in any
    /// particular map.**
    pub fn adjacent(self, direction: TileDirection) -> DoubledCoords {
        self + direction.to_vector()
    }

    /// Get an iterator of all the positions directly adjacent to this one, in
    /// [TileDirection::CLOCKWISE] order. Always contains exactly 6 values.
    pub fn adjacents(self) -> impl Iterator<Item = DoubledCoords> {
        TileDirection::iter().map(move |dir| self.adjacent(dir))
    }
}

impl std::ops::Add<DoubledVector> for DoubledCoords {
    type Output = DoubledCoords;

    fn add(self, rhs: DoubledVector) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<AxialCoords> for DoubledCoords {
    fn from(axial: AxialCoords) -> Self {
        axial.to_doubled()
    }
}

/// A translation in doubled coordinate space. Used to step from one tile to
/// another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Add, Sub, Neg)]
#[display(fmt = "<{}, {}>", "self.x", "self.y")]
pub struct DoubledVector {
    pub x: i32,
    pub y: i32,
}

impl DoubledVector {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A tile position in axial coordinates. This is cube coordinates with the
/// redundant third axis dropped. `q` runs along the rows and `r` is the row
/// index.
///
/// https://www.redblobgames.com/grids/hexagons/#coordinates-axial
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
#[display(fmt = "({}, {})", "self.q", "self.r")]
pub struct AxialCoords {
    q: i32,
    r: i32,
}

impl AxialCoords {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    /// Convert to doubled coordinates. `x = 2q + r`, `y = r`. This is the
    /// exact inverse of [DoubledCoords::to_axial] for all valid doubled
    /// positions.
    pub fn to_doubled(self) -> DoubledCoords {
        DoubledCoords::new(2 * self.q + self.r, self.r)
    }

    /// Same as [Self::to_doubled], but returns `None` if `x` doesn't fit in
    /// an `i32`
    pub fn checked_to_doubled(self) -> Option<DoubledCoords> {
        let x = self.q.checked_mul(2)?.checked_add(self.r)?;
        Some(DoubledCoords::new(x, self.r))
    }

    /// Convert to cube coordinates. The third axis is derived so that
    /// `x + y + z = 0`.
    pub fn to_cube(self) -> CubeCoords {
        CubeCoords::new_xy(self.q, self.r)
    }
}

impl From<DoubledCoords> for AxialCoords {
    fn from(doubled: DoubledCoords) -> Self {
        doubled.to_axial()
    }
}

impl From<CubeCoords> for AxialCoords {
    fn from(cube: CubeCoords) -> Self {
        cube.to_axial()
    }
}

/// A tile position in cube coordinates. For every valid position,
/// `x + y + z = 0`; that's enforced at construction so any value of this type
/// is guaranteed to be on the plane.
///
/// https://www.redblobgames.com/grids/hexagons/#coordinates-cube
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct CubeCoords {
    x: i32,
    y: i32,
    z: i32,
}

impl CubeCoords {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Construct a new cube position, making sure it falls on the plane
    /// `x + y + z = 0`.
    pub fn new(x: i32, y: i32, z: i32) -> anyhow::Result<Self> {
        if x + y + z == 0 {
            Ok(Self { x, y, z })
        } else {
            Err(anyhow!(
                "Invalid cube coordinates ({}, {}, {}); must be on the plane \
                x+y+z=0",
                x,
                y,
                z
            ))
        }
    }

    /// Construct a new cube position from `x` and `y`. Since x+y+z=0 for all
    /// positions, we can derive z.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y, z: -x - y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    /// Convert to axial coordinates by dropping `z`
    pub fn to_axial(self) -> AxialCoords {
        AxialCoords::new(self.x, self.y)
    }

    /// Calculate the path distance between two positions, meaning the number
    /// of hops it takes to get from one to the other. 0 if the positions are
    /// equal, 1 if they're adjacent, etc.
    pub fn distance_to(self, other: CubeCoords) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances-cube
        cmp::max(
            (self.x - other.x).abs(),
            cmp::max((self.y - other.y).abs(), (self.z - other.z).abs()),
        ) as usize
    }
}

impl From<AxialCoords> for CubeCoords {
    fn from(axial: AxialCoords) -> Self {
        axial.to_cube()
    }
}

/// Axial coordinates with real components. These come out of pixel->hex
/// conversion and don't refer to any particular tile until they get rounded.
#[derive(Copy, Clone, Debug, PartialEq, Display)]
#[display(fmt = "({}, {})", "self.q", "self.r")]
pub struct FractionalAxial {
    pub q: f64,
    pub r: f64,
}

impl FractionalAxial {
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    pub fn to_cube(self) -> FractionalCube {
        FractionalCube {
            x: self.q,
            y: self.r,
            z: -self.q - self.r,
        }
    }
}

/// Cube coordinates with real components. Use [FractionalCube::round] to snap
/// to the tile containing this point.
#[derive(Copy, Clone, Debug, PartialEq, Display)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct FractionalCube {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl FractionalCube {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Round to the nearest whole tile. Each component is rounded on its own,
    /// then the component that moved the most gets recomputed from the other
    /// two to put the point back on the plane `x + y + z = 0`.
    ///
    /// Ties are broken in a fixed order: `x` is only recomputed if its error
    /// is *strictly* larger than both others, then `y` if it's strictly larger
    /// than `z`, and otherwise `z`. This order determines which tile wins for
    /// points that sit exactly on a boundary, so don't shuffle it around.
    ///
    /// Components must be within `i32` range. [crate::HexMap::pixel2hex]
    /// filters out anything that isn't before calling this.
    pub fn round(self) -> CubeCoords {
        // https://www.redblobgames.com/grids/hexagons/#rounding
        let rx = self.x.round();
        let ry = self.y.round();
        let rz = self.z.round();

        let x_diff = (rx - self.x).abs();
        let y_diff = (ry - self.y).abs();
        let z_diff = (rz - self.z).abs();

        let (x, y) = if x_diff > y_diff && x_diff > z_diff {
            (-ry - rz, ry)
        } else if y_diff > z_diff {
            (rx, -rx - rz)
        } else {
            (rx, ry)
        };
        // z is always derived from the other two, which covers the fallback
        // case of recomputing z
        CubeCoords::new_xy(x as i32, y as i32)
    }
}

/// The 6 directions in which hexes can line up side-to-side. For pointy-topped
/// tiles, each direction points from a tile's center to the center of one of
/// its neighbors (through the midpoint of a side).
///
/// "South" is down the screen, i.e. towards higher rows.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TileDirection {
    /// East
    E,
    /// Southeast
    SE,
    /// Southwest
    SW,
    /// West
    W,
    /// Northwest
    NW,
    /// Northeast
    NE,
}

impl TileDirection {
    /// All directions, clockwise (on screen) starting at east. Neighbor
    /// lookups always return results in this order.
    pub const CLOCKWISE: &'static [Self] =
        &[Self::E, Self::SE, Self::SW, Self::W, Self::NW, Self::NE];

    /// Get the index of this direction within [Self::CLOCKWISE]
    pub fn clockwise_index(self) -> usize {
        self as usize
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        let len = Self::CLOCKWISE.len();
        Self::CLOCKWISE[(self.clockwise_index() + len / 2) % len]
    }

    /// Get the doubled-coordinate offset that moves a position one tile in
    /// this direction
    pub fn to_vector(self) -> DoubledVector {
        match self {
            Self::E => DoubledVector::new(2, 0),
            Self::SE => DoubledVector::new(1, 1),
            Self::SW => DoubledVector::new(-1, 1),
            Self::W => DoubledVector::new(-2, 0),
            Self::NW => DoubledVector::new(-1, -1),
            Self::NE => DoubledVector::new(1, -1),
        }
    }
}
