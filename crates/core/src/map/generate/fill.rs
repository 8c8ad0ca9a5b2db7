use crate::{
    map::generate::{Generate, MapBuilder},
    TileType,
};
use log::debug;
use rand::Rng;

/// A generator that flips a (weighted) coin for every tile to decide whether
/// it's land or sea. With a probability of 0 this leaves every tile as sea,
/// which gives the random walk a blank slate to draw on.
#[derive(Debug)]
pub struct RandomFillGenerator;

impl Generate for RandomFillGenerator {
    fn generate(&self, builder: &mut MapBuilder) -> anyhow::Result<()> {
        let probability = builder.config.terrain.land_probability;
        let rng = &mut builder.rng;
        let mut land_count = 0;
        for tile in builder.map.tiles.iter_mut() {
            tile.tile_type = if rng.gen_bool(probability) {
                land_count += 1;
                TileType::Land
            } else {
                TileType::Sea
            };
        }

        debug!(
            "Random fill created {} land tiles out of {}",
            land_count,
            builder.map.len()
        );
        Ok(())
    }
}
