//! This module holds the coordinate types used to address tiles in a hex map.
//!
//! ## Coordinate Systems
//!
//! All tiles are **pointy topped**, meaning each hexagon has a vertex at the
//! top and bottom, and flat sides on the left and right. Rows of tiles line up
//! horizontally, and every other row is pushed half a tile to the right to
//! form the honeycomb. We use three different systems to refer to the same
//! tile, because each one makes a different class of math easy. The
//! definitive reference on all of this is
//! [Amit Patel's hex grid guide](https://www.redblobgames.com/grids/hexagons/).
//!
//! ### Doubled Coordinates
//!
//! [DoubledCoords] are the storage-facing system. `y` is the row and `x` is the
//! column times two, plus one on odd rows. Doubling the column keeps the
//! half-tile stagger in integers, and makes neighbor offsets the same for every
//! row (unlike plain offset coordinates, where odd and even rows need separate
//! neighbor tables). The tradeoff is that half of all integer pairs aren't real
//! tiles: `x` and `y` must have the same parity.
//!
//! ### Axial Coordinates
//!
//! [AxialCoords] use two axes, `q` and `r`, that run along the hex grid's
//! natural directions instead of the screen's. `r` is still the row, but `q`
//! leans with the stagger. Conversion from doubled is
//! `q = floor((x - y) / 2), r = y`, and back is `x = 2q + r, y = r`.
//!
//! ### Cube Coordinates
//!
//! [CubeCoords] add a redundant third axis so that `x + y + z = 0`. The
//! symmetry makes distances and rounding simple: the distance between two
//! tiles is just the largest difference on any one axis. Cube `x` and `y` are
//! axial `q` and `r`, and `z = -q - r`.
//!
//! ## Screen Space
//!
//! Tile centers and corners live in screen space, as [Point2]s measured in
//! pixels. `y` grows downward. A tile of size `s` (the distance from its center
//! to any corner) is `sqrt(3) * s` wide and `2 * s` tall. Adjacent rows are
//! `0.75 * height` apart, since each row tucks into the one above it.
//!
//! Going from a pixel back to a tile is done by inverting that layout to get
//! *fractional* axial coordinates ([FractionalAxial]), then rounding in cube
//! space ([FractionalCube::round]) to find the tile that contains the pixel.

mod unit;

pub use self::unit::*;
