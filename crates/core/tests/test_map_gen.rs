use hexmap::{
    DoubledCoords, HexMap, MapConfig, Point2, Seed, TerrainConfig, TileType,
};
use std::collections::HashSet;

fn land_count(map: &HexMap) -> usize {
    map.iter()
        .filter(|tile| tile.tile_type() == TileType::Land)
        .count()
}

/// Sanity check, make sure the default config doesn't crash and burn.
///
/// **NOTE:** the default config uses a random seed, so a failure here might
/// not reproduce on the next run. The config is logged in the assertion.
#[test]
fn test_map_gen_default() {
    let config = MapConfig::default();
    let map = HexMap::generate(config.clone()).unwrap();
    assert_eq!(map.len(), 6400, "Default config failed: {:?}", config);
    assert!(land_count(&map) > 0, "Default config failed: {:?}", config);
}

/// The layout from the classic demo: an 8x8 grid of size 50 tiles, with the
/// first tile at (200, 200)
#[test]
fn test_map_gen_click_lookup() {
    let config = MapConfig {
        seed: "clicks".into(),
        width: 8,
        height: 8,
        hex_size: 50.0,
        first_hex: Point2::new(200.0, 200.0),
        ..Default::default()
    };
    let map = HexMap::generate(config).unwrap();

    let tile = map.pixel2hex(Point2::new(200.0, 200.0)).unwrap();
    assert_eq!(tile.doubled(), DoubledCoords::ORIGIN);
    let corners: HashSet<(i64, i64)> = tile
        .corners()
        .iter()
        .map(|corner| (corner.x as i64, corner.y as i64))
        .collect();
    let expected: HashSet<(i64, i64)> = [
        (243, 225),
        (200, 250),
        (157, 225),
        (157, 175),
        (200, 150),
        (243, 175),
    ]
    .iter()
    .copied()
    .collect();
    assert_eq!(corners, expected);

    assert!(map.pixel2hex(Point2::new(-10000.0, -10000.0)).is_none());

    // Clicking each neighbor's center resolves back to that neighbor
    for neighbor in map.find_neighbors(tile) {
        assert_eq!(map.pixel2hex(neighbor.position()), Some(neighbor));
    }
}

#[test]
fn test_map_gen_deterministic() {
    let config = MapConfig {
        seed: 8675309.into(),
        width: 30,
        height: 20,
        terrain: TerrainConfig {
            land_probability: 0.2,
            ..Default::default()
        },
        ..Default::default()
    };
    let a = HexMap::generate(config.clone()).unwrap();
    let b = HexMap::generate(config).unwrap();
    let types = |map: &HexMap| -> Vec<TileType> {
        map.iter().map(|tile| tile.tile_type()).collect()
    };
    assert_eq!(types(&a), types(&b));
}

#[test]
fn test_map_gen_sea_walkers() {
    // Start out all land, then carve lakes into it
    let config = MapConfig {
        seed: "lakes".into(),
        width: 25,
        height: 25,
        terrain: TerrainConfig {
            land_probability: 1.0,
            walkers: 4,
            walk_length: 20,
            walk_type: TileType::Sea,
        },
        ..Default::default()
    };
    let map = HexMap::generate(config).unwrap();
    let sea = map.len() - land_count(&map);
    assert!(sea >= 1 && sea <= 80, "got {} sea tiles", sea);
}

#[test]
fn test_map_gen_single_tile() {
    let config = MapConfig {
        seed: 1.into(),
        width: 1,
        height: 1,
        ..Default::default()
    };
    let map = HexMap::generate(config).unwrap();
    assert_eq!(map.len(), 1);
    // Every walker lands on the only tile there is
    assert_eq!(land_count(&map), 1);
}
