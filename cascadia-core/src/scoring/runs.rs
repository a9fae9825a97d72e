//! Run detection: chains of same-species tokens on adjacent tiles
//!
//! A run is a connected group of tiles holding the same species. Runs must
//! be simple chains: if any member has more than two same-species
//! neighbors, the whole group scores nothing.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::board::HexCoord;
use crate::tile_board::TileBoard;
use crate::wildlife::Wildlife;

/// Most same-species neighbors a tile in a valid run may have
pub const MAX_RUN_NEIGHBORS: usize = 2;

/// Run length -> points. Lengths past the end score the last entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunTable(&'static [u32]);

impl RunTable {
    pub const fn new(points: &'static [u32]) -> Self {
        Self(points)
    }

    /// Points for a run of `len` tiles
    pub fn points(&self, len: usize) -> u32 {
        if len == 0 || self.0.is_empty() {
            return 0;
        }
        self.0[len.min(self.0.len()) - 1]
    }

    /// Entries, index 0 = run of one
    pub fn entries(&self) -> &'static [u32] {
        self.0
    }
}

/// A connected group of same-species tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    /// Member coordinates, sorted
    pub tiles: Vec<HexCoord>,
    /// False if some member is a branch point
    pub valid: bool,
}

impl Run {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// All connected groups of `species` tokens, ordered by their first tile
pub fn find_runs(board: &TileBoard, species: Wildlife) -> Vec<Run> {
    let mut starts: Vec<HexCoord> = board.tokens_of(species).collect();
    starts.sort();

    let mut visited: FxHashSet<HexCoord> = FxHashSet::default();
    let mut runs = Vec::new();

    for start in starts {
        if !visited.insert(start) {
            continue;
        }

        let mut tiles = Vec::new();
        let mut valid = true;
        let mut queue = VecDeque::from([start]);

        while let Some(coord) = queue.pop_front() {
            tiles.push(coord);
            let mut degree = 0;
            for n in coord.neighbors() {
                if board.token_at(n) != Some(species) {
                    continue;
                }
                degree += 1;
                if visited.insert(n) {
                    queue.push_back(n);
                }
            }
            if degree > MAX_RUN_NEIGHBORS {
                valid = false;
            }
        }

        tiles.sort();
        runs.push(Run { tiles, valid });
    }

    runs
}

/// Sum of table points over every valid run of `species`
pub fn score_runs(board: &TileBoard, species: Wildlife, table: RunTable) -> u32 {
    find_runs(board, species)
        .iter()
        .map(|run| {
            if run.valid {
                table.points(run.len())
            } else {
                tracing::debug!(%species, len = run.len(), "branching run scores nothing");
                0
            }
        })
        .sum()
}
