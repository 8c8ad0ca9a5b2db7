mod fill;
mod walk;

use crate::{
    map::{
        generate::{fill::RandomFillGenerator, walk::RandomWalkGenerator},
        HexMap,
    },
    timed, MapConfig,
};
use anyhow::Context;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::fmt::Debug;

/// A container for generating terrain on a new map. This applies a series of
/// generators in sequence. These fields are public to allow for disjoint
/// borrowing of multiple fields at once.
pub struct MapBuilder<'a> {
    /// The config that controls generation. Two maps generated from the same
    /// config will always be identical (provided they were generated on the
    /// same version of the code).
    pub config: &'a MapConfig,

    /// RNG provider. Seeded from the config, and shared by all generators so
    /// that the order they run in matters.
    pub rng: Pcg64,

    /// The map being generated. Generators can change tile types, but tiles
    /// can never be added/removed/moved!
    pub map: HexMap,
}

impl<'a> MapBuilder<'a> {
    pub fn new(config: &'a MapConfig, map: HexMap) -> Self {
        Self {
            config,
            rng: Pcg64::seed_from_u64(config.seed.to_u64()),
            map,
        }
    }

    /// Generate terrain by running each generation step sequentially. Outputs
    /// the finished map.
    pub fn generate_map(mut self) -> anyhow::Result<HexMap> {
        // Order matters here! The walk paints over the random fill
        self.apply_generator(RandomFillGenerator)?;
        self.apply_generator(RandomWalkGenerator)?;
        Ok(self.map)
    }

    /// A helper to run a generation step on this builder.
    fn apply_generator(
        &mut self,
        generator: impl Debug + Generate,
    ) -> anyhow::Result<()> {
        timed!(&format!("{:?}", generator), generator.generate(self))
            .with_context(|| format!("error in {:?}", generator))
    }
}

/// A type that generates some sort of data for the map. Generators are chained
/// together, with each one building on the tile types left behind by the
/// previous.
trait Generate {
    /// Apply some generation step to the given map. This can mutate the map's
    /// tiles, but can never add/remove tiles, or change their positions in any
    /// way. Any error returned here indicates a bug in the generator, rather
    /// than anything wrong with the input.
    fn generate(&self, builder: &mut MapBuilder) -> anyhow::Result<()>;
}
