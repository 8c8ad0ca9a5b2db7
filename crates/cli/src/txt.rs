use hexmap::{HexMap, TileType};

/// Render a map as text, one line per row. Land is `#` and sea is `~`. Odd
/// rows are indented by one character so the stagger lines up the same way it
/// does on screen.
pub fn draw_map(map: &HexMap) -> String {
    let mut output = String::new();
    for row in 0..map.height() as i32 {
        if row % 2 == 1 {
            output.push(' ');
        }
        let line: Vec<&str> = (0..map.width() as i32)
            .filter_map(|column| map.tile_at(row, column))
            .map(|tile| match tile.tile_type() {
                TileType::Land => "#",
                TileType::Sea => "~",
            })
            .collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmap::{MapConfig, TerrainConfig};

    #[test]
    fn test_draw_map() {
        let config = MapConfig {
            seed: 0.into(),
            width: 3,
            height: 3,
            terrain: TerrainConfig {
                land_probability: 1.0,
                walkers: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let map = HexMap::generate(config).unwrap();
        assert_eq!(draw_map(&map), "# # #\n # # #\n# # #\n");
    }
}
