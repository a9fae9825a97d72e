//! Seeded tile and token supply

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::tile::{HabitatTile, TileIdAllocator, MAX_TOKEN_OPTIONS};
use crate::wildlife::{Habitat, Wildlife, HABITATS, WILDLIFE};

/// Tokens of each species in a fresh bag
pub const TOKENS_PER_SPECIES: usize = 20;

/// One in this many generated tiles is a keystone
const KEYSTONE_ODDS: u32 = 5;

/// Fewest token options a non-keystone tile shows
const MIN_TOKEN_OPTIONS: usize = 2;

/// Produces habitat tiles and owns the id allocator
#[derive(Clone, Debug)]
pub struct TileGenerator {
    rng: ChaCha8Rng,
    ids: TileIdAllocator,
    token_options: usize,
}

impl TileGenerator {
    /// `token_options` is clamped to 2..=3
    pub fn new(seed: u64, token_options: usize) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            ids: TileIdAllocator::new(),
            token_options: token_options.clamp(MIN_TOKEN_OPTIONS, MAX_TOKEN_OPTIONS),
        }
    }

    /// Allocator for ids that must not collide with generated tiles
    pub fn ids_mut(&mut self) -> &mut TileIdAllocator {
        &mut self.ids
    }

    /// Next tile from the supply
    pub fn next_tile(&mut self) -> Result<HabitatTile> {
        if self.rng.gen_ratio(1, KEYSTONE_ODDS) {
            self.keystone_tile()
        } else {
            self.split_tile()
        }
    }

    /// Ordered starter triple: one keystone, then two split tiles
    pub fn starter_tiles(&mut self) -> Result<[HabitatTile; 3]> {
        Ok([self.keystone_tile()?, self.split_tile()?, self.split_tile()?])
    }

    fn random_habitat(&mut self) -> Habitat {
        HABITATS[self.rng.gen_range(0..HABITATS.len())]
    }

    fn keystone_tile(&mut self) -> Result<HabitatTile> {
        let habitat = self.random_habitat();
        let species = WILDLIFE[self.rng.gen_range(0..WILDLIFE.len())];
        HabitatTile::new(self.ids.allocate(), habitat, habitat, vec![species])
    }

    fn split_tile(&mut self) -> Result<HabitatTile> {
        let habitat1 = self.random_habitat();
        let mut habitat2 = self.random_habitat();
        while habitat2 == habitat1 {
            habitat2 = self.random_habitat();
        }
        let options: Vec<Wildlife> = WILDLIFE
            .choose_multiple(&mut self.rng, self.token_options)
            .copied()
            .collect();
        HabitatTile::new(self.ids.allocate(), habitat1, habitat2, options)
    }
}

/// Bag of wildlife tokens, drawn without replacement
#[derive(Clone, Debug)]
pub struct TokenBag {
    rng: ChaCha8Rng,
    tokens: Vec<Wildlife>,
}

impl TokenBag {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut tokens: Vec<Wildlife> = WILDLIFE
            .iter()
            .flat_map(|&w| std::iter::repeat(w).take(TOKENS_PER_SPECIES))
            .collect();
        tokens.shuffle(&mut rng);
        Self { rng, tokens }
    }

    pub fn draw(&mut self) -> Option<Wildlife> {
        self.tokens.pop()
    }

    /// Put a token back at a random position
    pub fn return_token(&mut self, token: Wildlife) {
        let at = self.rng.gen_range(0..=self.tokens.len());
        self.tokens.insert(at, token);
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    pub fn count_of(&self, species: Wildlife) -> usize {
        self.tokens.iter().filter(|&&w| w == species).count()
    }
}
