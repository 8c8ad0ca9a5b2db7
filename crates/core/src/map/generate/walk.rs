use crate::{
    map::generate::{Generate, MapBuilder},
    DoubledCoords, HexTile,
};
use anyhow::anyhow;
use log::{debug, trace};
use rand::{seq::SliceRandom, Rng};

/// A generator that sends out a series of random walkers to paint terrain.
/// Each walker starts on a random tile, then repeatedly paints its current tile
/// and steps onto a random neighbor. Walkers can double back and cross paths,
/// so the result is a set of blobby, connected landmasses (or lakes, depending
/// on the configured tile type).
///
/// Walkers only ever move via neighbor lookups on the map, so every tile they
/// touch is guaranteed to exist.
#[derive(Debug)]
pub struct RandomWalkGenerator;

impl Generate for RandomWalkGenerator {
    fn generate(&self, builder: &mut MapBuilder) -> anyhow::Result<()> {
        let terrain = &builder.config.terrain;
        let walk_type = terrain.walk_type;

        for walker in 0..terrain.walkers {
            let start = builder.rng.gen_range(0..builder.map.len());
            let mut current = builder.map.tiles[start].doubled();
            trace!("Walker {} starting at {}", walker, current);

            for _ in 0..terrain.walk_length {
                let tile = builder.map.get_hex(current).ok_or_else(|| {
                    anyhow!(
                        "walker {} stepped off the map at {}",
                        walker,
                        current
                    )
                })?;
                // Grab the positions up front, so we aren't holding a borrow
                // of the map while we paint the tile
                let neighbors: Vec<DoubledCoords> = builder
                    .map
                    .find_neighbors(tile)
                    .into_iter()
                    .map(HexTile::doubled)
                    .collect();

                if let Some(tile) = builder.map.get_hex_mut(current) {
                    tile.tile_type = walk_type;
                }

                match neighbors.choose(&mut builder.rng) {
                    Some(next) => current = *next,
                    // Only possible on a 1x1 map
                    None => break,
                }
            }
        }

        debug!(
            "Sent out {} walkers of length {}, painting {}",
            terrain.walkers, terrain.walk_length, walk_type
        );
        Ok(())
    }
}
