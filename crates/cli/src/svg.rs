use hexmap::{HexMap, HexTile, MapConfig, TileType};
use svg::{
    node::{element::Polygon, Comment},
    Document,
};

const BACKGROUND_COLOR: &str = "rgb(245, 222, 179)";
const OUTLINE_COLOR: &str = "rgb(0, 0, 0)";

/// Fill color for each tile type
fn tile_color(tile_type: TileType) -> &'static str {
    match tile_type {
        TileType::Land => "rgb(205, 133, 63)",
        TileType::Sea => "rgb(64, 135, 206)",
    }
}

/// Generate an SVG document for a map. The view box is sized to fit every
/// tile, so pixel coordinates in the document match the map's screen space.
pub fn draw_map(map: &HexMap, config: &MapConfig) -> Document {
    let (min, max) = map.pixel_bounds();
    let mut document = Document::new()
        .set("viewBox", (min.x, min.y, max.x - min.x, max.y - min.y))
        .set("style", format!("background-color: {}", BACKGROUND_COLOR))
        .add(Comment::new(format!("\n{:#?}\n", config)));

    for tile in map {
        document = document.add(draw_tile(tile));
    }

    document
}

/// Generate an SVG polygon for a single tile, using its precomputed corners
fn draw_tile(tile: &HexTile) -> Polygon {
    Polygon::new()
        .set(
            "points",
            tile.corners()
                .iter()
                .map(|corner| (corner.x, corner.y))
                .collect::<Vec<_>>(),
        )
        .set("fill", tile_color(tile.tile_type()))
        .set("stroke", OUTLINE_COLOR)
        .set("stroke-width", 1)
}
