//! Wildlife scoring
//!
//! Scoring is a read-only traversal of a finished (or in-progress) board.
//! Each category is a [`WildlifeScoring`] card; the engine sums the cards in
//! play and can score independent player boards in parallel.

pub mod runs;
pub mod salmon;

use std::fmt;

use rayon::prelude::*;

use crate::config::GameConfig;
use crate::tile_board::TileBoard;
use crate::wildlife::Wildlife;
use salmon::{SalmonOption, SalmonScoring};

/// A scoring card for one species
pub trait WildlifeScoring: Send + Sync {
    fn species(&self) -> Wildlife;

    /// Points this card awards for the board. Never fails.
    fn calculate_score(&self, board: &TileBoard) -> u32;
}

/// Set of scoring cards in play
#[derive(Default)]
pub struct ScoringEngine {
    cards: Vec<Box<dyn WildlifeScoring>>,
}

impl ScoringEngine {
    /// Engine with no cards
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards selected by the game configuration
    pub fn for_config(config: &GameConfig) -> Self {
        Self::new().with_card(SalmonScoring::new(config.salmon_option))
    }

    pub fn with_card(mut self, card: impl WildlifeScoring + 'static) -> Self {
        self.cards.push(Box::new(card));
        self
    }

    /// Salmon score under a single option
    pub fn calculate_score(board: &TileBoard, option: SalmonOption) -> u32 {
        salmon::calculate_score(board, option)
    }

    /// Salmon score under every option, for setup previews
    pub fn score_all_options(board: &TileBoard) -> Vec<(SalmonOption, u32)> {
        SalmonOption::ALL
            .into_iter()
            .map(|option| (option, salmon::calculate_score(board, option)))
            .collect()
    }

    /// Per-card points
    pub fn breakdown(&self, board: &TileBoard) -> Vec<(Wildlife, u32)> {
        self.cards
            .iter()
            .map(|card| (card.species(), card.calculate_score(board)))
            .collect()
    }

    /// Sum over all cards
    pub fn total(&self, board: &TileBoard) -> u32 {
        let total: u32 = self.cards.iter().map(|card| card.calculate_score(board)).sum();
        tracing::debug!(tiles = board.len(), total, "scored board");
        total
    }

    /// Score independent player boards in parallel, in input order
    pub fn score_boards(&self, boards: &[TileBoard]) -> Vec<u32> {
        boards.par_iter().map(|board| self.total(board)).collect()
    }
}

impl fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.cards.iter().map(|card| card.species()))
            .finish()
    }
}
