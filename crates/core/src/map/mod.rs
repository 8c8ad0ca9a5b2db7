mod generate;
pub mod hex;
pub mod tile;

use crate::{
    map::{
        generate::MapBuilder,
        hex::{AxialCoords, DoubledCoords, FractionalAxial, Point2},
        tile::HexTile,
    },
    timed, MapConfig,
};
use anyhow::{ensure, Context};
use log::{debug, info, trace};
use nalgebra::Matrix2;
use std::slice;
use validator::Validate;

/// A rectangular grid of hexagon tiles. Tiles are stored in a flat vector in
/// row-major order (row 0 first, left-to-right within each row), so the tile at
/// row `r` and column `c` lives at index `r * width + c`. Every other row is
/// pushed half a tile to the right, to form the honeycomb.
///
/// A map is built once, and can never be resized. The only thing that can
/// change after construction is each tile's [TileType](crate::TileType), and
/// that can only be done by the generators in this crate (see
/// [HexMap::generate]).
#[derive(Clone, Debug)]
pub struct HexMap {
    /// Number of tiles in each row
    width: u16,
    /// Number of rows
    height: u16,
    /// Distance from the center of each tile to any of its corners
    hex_size: f64,
    /// Center of the top-left tile, in screen space. Pixel lookups are all
    /// relative to this.
    first_hex: Point2,
    /// All tiles, in row-major order. Length is always `width * height`.
    tiles: Vec<HexTile>,
}

impl HexMap {
    /// Tile size used by [Self::with_dimensions]
    pub const DEFAULT_HEX_SIZE: f64 = 50.0;

    /// Build a new map of `width x height` tiles. The top-left tile will be
    /// centered on `first_hex`, and all other tiles are laid out from there.
    /// Every tile starts with the default tile type.
    ///
    /// Returns an error if either dimension is zero, if `hex_size` isn't a
    /// positive, finite number, or if `first_hex` isn't finite.
    pub fn new(
        width: u16,
        height: u16,
        hex_size: f64,
        first_hex: Point2,
    ) -> anyhow::Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "map dimensions must be non-zero, got {}x{}",
            width,
            height
        );
        ensure!(
            hex_size.is_finite() && hex_size > 0.0,
            "hex size must be a positive number, got {}",
            hex_size
        );
        ensure!(
            first_hex.x.is_finite() && first_hex.y.is_finite(),
            "first hex position must be finite, got {}",
            first_hex
        );

        let tile_width = HexTile::width_for_size(hex_size);
        // Rows overlap by a quarter of the tile height, since each row
        // tucks into the gaps of the one above it
        let vertical_step = HexTile::height_for_size(hex_size) * 0.75;

        let capacity = width as usize * height as usize;
        let mut tiles = Vec::with_capacity(capacity);
        for row in 0..height as i32 {
            // Odd rows get pushed right by half a tile
            let offset = if row % 2 == 1 { 0.5 * tile_width } else { 0.0 };
            for column in 0..width as i32 {
                let position = Point2::new(
                    first_hex.x + column as f64 * tile_width + offset,
                    first_hex.y + row as f64 * vertical_step,
                );
                tiles.push(HexTile::new(
                    position,
                    hex_size,
                    DoubledCoords::from_offset(row, column),
                ));
            }
        }
        debug_assert_eq!(tiles.len(), capacity, "expected width*height tiles");

        Ok(Self {
            width,
            height,
            hex_size,
            // This is just the first tile's position, but grab it from the
            // tile so the two can never disagree
            first_hex: tiles[0].position(),
            tiles,
        })
    }

    /// Build a new map with the default tile size, with the top-left tile
    /// centered on the origin. See [Self::new].
    pub fn with_dimensions(width: u16, height: u16) -> anyhow::Result<Self> {
        Self::new(width, height, Self::DEFAULT_HEX_SIZE, Point2::ORIGIN)
    }

    /// Build a new map from a config, then run the terrain generators over it.
    /// Generation is deterministic: two maps generated from the same config
    /// will always be identical. Returns an error if the given config is
    /// invalid. The validation error can be recovered with
    /// `err.downcast::<validator::ValidationErrors>()`.
    pub fn generate(config: MapConfig) -> anyhow::Result<Self> {
        info!("Generating map with config {:#?}", config);

        config.validate()?;

        let map = Self::new(
            config.width,
            config.height,
            config.hex_size,
            config.first_hex,
        )
        .context("error building map grid")?;

        let map = timed!(
            "Map generation",
            log::Level::Info,
            MapBuilder::new(&config, map).generate_map()
        )?;
        Ok(map)
    }

    /// Number of tiles in each row
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Distance from the center of each tile to any of its corners
    pub fn hex_size(&self) -> f64 {
        self.hex_size
    }

    /// Center of the top-left tile, in screen space
    pub fn first_hex(&self) -> Point2 {
        self.first_hex
    }

    /// Total number of tiles in the map. Always `width * height`.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the map has no tiles. Always `false`, since a map can't be
    /// built with zero tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in the map, in row-major order
    pub fn tiles(&self) -> &[HexTile] {
        &self.tiles
    }

    /// Iterate over all tiles in the map, in row-major order
    pub fn iter(&self) -> slice::Iter<'_, HexTile> {
        self.tiles.iter()
    }

    /// Get the tile at a particular row and column, or `None` if it's off the
    /// map
    pub fn tile_at(&self, row: i32, column: i32) -> Option<&HexTile> {
        self.get_hex(DoubledCoords::from_offset(row, column))
    }

    /// Get the tile with the given doubled coordinates. Returns `None` if the
    /// position is off the edge of the map, **or** if the position is invalid
    /// (`x` and `y` have different parity, e.g. `(1, 0)`). Positions off the
    /// map are totally normal (e.g. looking for the neighbors of a tile on the
    /// edge), so this is not considered an error.
    pub fn get_hex(&self, coords: DoubledCoords) -> Option<&HexTile> {
        self.index_of(coords).map(|index| &self.tiles[index])
    }

    /// Mutable version of [Self::get_hex]. Only available in this crate since
    /// tiles can only be modified during generation.
    pub(crate) fn get_hex_mut(
        &mut self,
        coords: DoubledCoords,
    ) -> Option<&mut HexTile> {
        let index = self.index_of(coords)?;
        Some(&mut self.tiles[index])
    }

    /// Convert doubled coordinates to an index in the tile vector. Returns
    /// `None` if the position is off the map or doesn't refer to a real tile.
    fn index_of(&self, coords: DoubledCoords) -> Option<usize> {
        let row = coords.row();
        let column = coords.column();
        if row < 0
            || row >= self.height as i32
            || column < 0
            || column >= self.width as i32
        {
            return None;
        }

        let index = row as usize * self.width as usize + column as usize;
        // Flooring out the doubling means two different x values map to the
        // same column, but only one of them is actually the tile there. This
        // weeds out positions with the wrong parity for their row.
        if self.tiles[index].doubled() == coords {
            Some(index)
        } else {
            None
        }
    }

    /// Find a tile by its axial coordinates. Returns `None` if there is no such
    /// tile in this map.
    pub fn find_by_axial(&self, coords: AxialCoords) -> Option<&HexTile> {
        // Axial->doubled is the exact inverse of doubled->axial, and positions
        // are unique, so this finds the same tile that a full scan would. If
        // the conversion overflows, the position is nowhere near the map.
        self.get_hex(coords.checked_to_doubled()?)
    }

    /// Get all the tiles adjacent to the given one. Neighbors are returned in
    /// [TileDirection::CLOCKWISE](hex::TileDirection::CLOCKWISE) order,
    /// starting at east. Interior tiles will always have 6 neighbors, tiles on
    /// the edge of the map will have fewer.
    pub fn find_neighbors(&self, tile: &HexTile) -> Vec<&HexTile> {
        tile.doubled()
            .adjacents()
            .filter_map(|coords| self.get_hex(coords))
            .collect()
    }

    /// Find the tile that contains the given pixel (e.g. from a mouse click).
    /// Returns `None` if the pixel doesn't fall on any tile in the map.
    pub fn pixel2hex(&self, pixel: Point2) -> Option<&HexTile> {
        // Anything this far out can't possibly be on the map, and would
        // overflow the integer coordinates when rounded
        const LIMIT: f64 = (i32::MAX / 4) as f64;

        let relative = pixel - self.first_hex;
        let fractional = self.pixel_to_axial(relative);
        // This also catches NaNs, since any comparison with NaN is false
        if !(fractional.q.abs() < LIMIT && fractional.r.abs() < LIMIT) {
            trace!("Pixel {} is way off the map", pixel);
            return None;
        }

        let doubled = fractional.to_cube().round().to_axial().to_doubled();
        trace!(
            "Pixel {} -> axial {} -> doubled {}",
            pixel,
            fractional,
            doubled
        );
        self.get_hex(doubled)
    }

    /// Convert a pixel (relative to the first tile's center) into fractional
    /// axial coordinates. This is the inverse of the layout used to place
    /// tiles: https://www.redblobgames.com/grids/hexagons/#pixel-to-hex
    fn pixel_to_axial(&self, relative: Point2) -> FractionalAxial {
        let inverse_layout = Matrix2::new(
            3.0_f64.sqrt() / 3.0,
            -1.0 / 3.0,
            0.0,
            2.0 / 3.0,
        );
        let axial = inverse_layout * nalgebra::Vector2::from(relative)
            / self.hex_size;
        FractionalAxial::new(axial.x, axial.y)
    }

    /// Get the smallest box that contains every corner of every tile, as a
    /// `(top_left, bottom_right)` pair. Useful for sizing a canvas to render
    /// the map onto.
    pub fn pixel_bounds(&self) -> (Point2, Point2) {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for corner in self.tiles.iter().flat_map(|tile| tile.corners()) {
            min.x = min.x.min(corner.x);
            min.y = min.y.min(corner.y);
            max.x = max.x.max(corner.x);
            max.y = max.y.max(corner.y);
        }
        debug!("Pixel bounds for map: {} to {}", min, max);
        (min, max)
    }
}

impl<'a> IntoIterator for &'a HexMap {
    type Item = &'a HexTile;
    type IntoIter = slice::Iter<'a, HexTile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::hex::TileDirection;
    use assert_approx_eq::assert_approx_eq;

    fn map_8x8() -> HexMap {
        HexMap::new(8, 8, 50.0, Point2::new(200.0, 200.0)).unwrap()
    }

    #[test]
    fn test_len() {
        assert_eq!(HexMap::with_dimensions(1, 1).unwrap().len(), 1);
        assert_eq!(HexMap::with_dimensions(8, 8).unwrap().len(), 64);
        assert_eq!(HexMap::with_dimensions(3, 7).unwrap().iter().count(), 21);
        // Iteration is restartable
        let map = map_8x8();
        assert_eq!(map.iter().count(), 64);
        assert_eq!((&map).into_iter().count(), 64);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(HexMap::with_dimensions(0, 5).is_err());
        assert!(HexMap::with_dimensions(5, 0).is_err());
        assert!(HexMap::new(5, 5, 0.0, Point2::ORIGIN).is_err());
        assert!(HexMap::new(5, 5, -1.0, Point2::ORIGIN).is_err());
        assert!(HexMap::new(5, 5, f64::NAN, Point2::ORIGIN).is_err());
        assert!(HexMap::new(5, 5, 10.0, Point2::new(f64::NAN, 0.0)).is_err());
        assert!(
            HexMap::new(5, 5, 10.0, Point2::new(0.0, f64::INFINITY)).is_err()
        );
        assert!(HexMap::new(5, 5, 10.0, Point2::new(-1e6, 1e6)).is_ok());
    }

    #[test]
    fn test_layout() {
        let map = map_8x8();
        assert_eq!(map.first_hex(), Point2::new(200.0, 200.0));

        let width = 3.0_f64.sqrt() * 50.0;
        for (index, tile) in map.iter().enumerate() {
            let row = (index / 8) as i32;
            let column = (index % 8) as i32;
            let doubled = tile.doubled();
            assert_eq!(doubled, DoubledCoords::from_offset(row, column));
            // Parity of x always matches the row
            assert_eq!(doubled.x().rem_euclid(2), row % 2);

            let offset = if row % 2 == 1 { width / 2.0 } else { 0.0 };
            assert_approx_eq!(
                tile.position().x,
                200.0 + column as f64 * width + offset
            );
            assert_approx_eq!(tile.position().y, 200.0 + row as f64 * 75.0);
        }
    }

    #[test]
    fn test_get_hex() {
        let map = map_8x8();
        assert_eq!(
            map.get_hex(DoubledCoords::new(0, 0)).unwrap().doubled(),
            DoubledCoords::new(0, 0)
        );
        assert_eq!(
            map.get_hex(DoubledCoords::new(5, 3)).unwrap().doubled(),
            DoubledCoords::new(5, 3)
        );
        assert_eq!(
            map.get_hex(DoubledCoords::new(14, 6)).unwrap().doubled(),
            DoubledCoords::new(14, 6)
        );

        // Off the map
        assert!(map.get_hex(DoubledCoords::new(-2, 0)).is_none());
        assert!(map.get_hex(DoubledCoords::new(16, 0)).is_none());
        assert!(map.get_hex(DoubledCoords::new(0, -1)).is_none());
        assert!(map.get_hex(DoubledCoords::new(0, 8)).is_none());
        assert!(map.get_hex(DoubledCoords::new(-1, 1)).is_none());
        assert!(map.get_hex(DoubledCoords::new(17, 1)).is_none());

        // Wrong parity
        assert!(map.get_hex(DoubledCoords::new(1, 0)).is_none());
        assert!(map.get_hex(DoubledCoords::new(0, 1)).is_none());
        assert!(map.get_hex(DoubledCoords::new(4, 3)).is_none());
    }

    #[test]
    fn test_tile_at() {
        let map = map_8x8();
        assert_eq!(
            map.tile_at(3, 2).unwrap().doubled(),
            DoubledCoords::new(5, 3)
        );
        assert!(map.tile_at(8, 0).is_none());
        assert!(map.tile_at(0, -1).is_none());
    }

    #[test]
    fn test_find_by_axial() {
        let map = map_8x8();
        for tile in &map {
            assert_eq!(map.find_by_axial(tile.axial()), Some(tile));
        }
        assert!(map.find_by_axial(AxialCoords::new(-1, 0)).is_none());
        assert!(map.find_by_axial(AxialCoords::new(0, 8)).is_none());
        // Row 7 starts at q = -3
        assert!(map.find_by_axial(AxialCoords::new(-3, 7)).is_some());
        assert!(map.find_by_axial(AxialCoords::new(-4, 7)).is_none());
        // Far enough out that converting to doubled would overflow
        assert!(map.find_by_axial(AxialCoords::new(i32::MAX, 0)).is_none());
        assert!(map.find_by_axial(AxialCoords::new(i32::MIN, 0)).is_none());
        assert!(map.find_by_axial(AxialCoords::new(0, i32::MAX)).is_none());
    }

    #[test]
    fn test_find_neighbors_interior() {
        let map = map_8x8();
        let tile = map.get_hex(DoubledCoords::new(5, 3)).unwrap();
        let neighbors: Vec<DoubledCoords> = map
            .find_neighbors(tile)
            .into_iter()
            .map(HexTile::doubled)
            .collect();
        assert_eq!(
            neighbors,
            vec![
                DoubledCoords::new(7, 3),
                DoubledCoords::new(6, 4),
                DoubledCoords::new(4, 4),
                DoubledCoords::new(3, 3),
                DoubledCoords::new(4, 2),
                DoubledCoords::new(6, 2),
            ]
        );
        for (dir, neighbor) in TileDirection::CLOCKWISE.iter().zip(neighbors) {
            assert_eq!(tile.doubled().adjacent(*dir), neighbor);
        }
    }

    #[test]
    fn test_find_neighbors_edges() {
        let map = map_8x8();
        let count = |x, y| {
            let tile = map.get_hex(DoubledCoords::new(x, y)).unwrap();
            map.find_neighbors(tile).len()
        };

        // Top-left sits flush against the left edge
        assert_eq!(count(0, 0), 2);
        // Top-right is tucked in by the odd row below it
        assert_eq!(count(14, 0), 3);
        // Bottom row is odd, so it's shifted right
        assert_eq!(count(1, 7), 3);
        assert_eq!(count(15, 7), 2);
        // Edges
        assert_eq!(count(6, 0), 4);
        assert_eq!(count(0, 4), 3);
        assert_eq!(count(15, 5), 3);
        assert_eq!(count(1, 5), 5);

        // 1x1 map has no neighbors at all
        let tiny = HexMap::with_dimensions(1, 1).unwrap();
        assert!(tiny.find_neighbors(&tiny.tiles()[0]).is_empty());
    }

    #[test]
    fn test_neighbors_are_symmetric() {
        let map = HexMap::with_dimensions(5, 4).unwrap();
        for tile in &map {
            for neighbor in map.find_neighbors(tile) {
                assert_eq!(tile.distance_to(neighbor), 1);
                assert!(
                    map.find_neighbors(neighbor).contains(&tile),
                    "{} is a neighbor of {} but not vice versa",
                    neighbor,
                    tile
                );
            }
        }
    }

    #[test]
    fn test_pixel2hex_center() {
        let map = map_8x8();
        assert_eq!(
            map.pixel2hex(Point2::new(200.0, 200.0)).unwrap().doubled(),
            DoubledCoords::new(0, 0)
        );
        // Every tile's center should map back to that tile
        for tile in &map {
            assert_eq!(map.pixel2hex(tile.position()), Some(tile));
        }
    }

    #[test]
    fn test_pixel2hex_inside() {
        let map = map_8x8();
        // Points well inside the tile (80% of the way to each corner) should
        // all resolve to that tile
        for tile in &map {
            let center = tile.position();
            for corner in tile.corners() {
                let pixel = center + (*corner - center) * 0.8;
                assert_eq!(
                    map.pixel2hex(pixel),
                    Some(tile),
                    "pixel {} should be in {}",
                    pixel,
                    tile
                );
            }
        }
    }

    #[test]
    fn test_pixel2hex_outside() {
        let map = map_8x8();
        assert!(map.pixel2hex(Point2::new(-10000.0, -10000.0)).is_none());
        assert!(map.pixel2hex(Point2::new(10000.0, 10000.0)).is_none());
        // Just left of the first tile
        assert!(map.pixel2hex(Point2::new(150.0, 200.0)).is_none());
        // Just above the first tile
        assert!(map.pixel2hex(Point2::new(200.0, 140.0)).is_none());
        assert!(map.pixel2hex(Point2::new(f64::NAN, 0.0)).is_none());
        assert!(map.pixel2hex(Point2::new(f64::INFINITY, 0.0)).is_none());
        assert!(map.pixel2hex(Point2::new(1e300, -1e300)).is_none());
    }

    #[test]
    fn test_pixel_bounds() {
        let map = map_8x8();
        let (min, max) = map.pixel_bounds();
        // Left edge of row 0, top vertex of row 0
        assert_eq!(min, Point2::new(157.0, 150.0));
        for tile in &map {
            for corner in tile.corners() {
                assert!(corner.x >= min.x && corner.y >= min.y);
                assert!(corner.x <= max.x && corner.y <= max.y);
            }
        }
    }
}
