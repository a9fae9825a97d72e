//! Per-player tile board
//!
//! Sparse map from coordinate to tile. Empty cells are absent; the only
//! bound is the configured extent.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::board::{BoardExtent, HexCoord, STARTER_COORDS};
use crate::edge::{EdgeIndex, EdgeLink};
use crate::error::{CascadiaError, Result};
use crate::tile::{HabitatTile, TileId, TileIdAllocator};
use crate::wildlife::{Habitat, Wildlife};

/// Outcome of a successful token placement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenPlacement {
    pub tile: TileId,
    pub species: Wildlife,
    /// Token matched a keystone tile's species
    pub earned_nature_token: bool,
}

/// A player's board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBoard {
    extent: BoardExtent,
    /// Board: coord -> tile
    tiles: FxHashMap<HexCoord, HabitatTile>,
    /// Tile id -> coord for id lookups
    positions: FxHashMap<TileId, HexCoord>,
}

impl TileBoard {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Empty board
    pub fn new(extent: BoardExtent) -> Self {
        Self {
            extent,
            tiles: FxHashMap::default(),
            positions: FxHashMap::default(),
        }
    }

    /// Board seeded with the three starter tiles, in order
    pub fn with_starter_tiles(extent: BoardExtent, starters: [HabitatTile; 3]) -> Result<Self> {
        let mut board = Self::new(extent);
        for (tile, coord) in starters.into_iter().zip(STARTER_COORDS) {
            board.place(tile, coord)?;
        }
        Ok(board)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn extent(&self) -> BoardExtent {
        self.extent
    }

    /// Number of placed tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_occupied(&self, coord: HexCoord) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// Get tile at coord
    pub fn tile_at(&self, coord: HexCoord) -> Option<&HabitatTile> {
        self.tiles.get(&coord)
    }

    pub fn tile_by_id(&self, id: TileId) -> Option<&HabitatTile> {
        self.positions.get(&id).and_then(|coord| self.tiles.get(coord))
    }

    pub fn coord_of(&self, id: TileId) -> Option<HexCoord> {
        self.positions.get(&id).copied()
    }

    /// Iterate placed tiles
    pub fn tiles(&self) -> impl Iterator<Item = (HexCoord, &HabitatTile)> + '_ {
        self.tiles.iter().map(|(&coord, tile)| (coord, tile))
    }

    /// Species of the token at coord, if any
    pub fn token_at(&self, coord: HexCoord) -> Option<Wildlife> {
        self.tiles.get(&coord).and_then(HabitatTile::placed_token)
    }

    /// Coordinates holding a token of `species`
    pub fn tokens_of(&self, species: Wildlife) -> impl Iterator<Item = HexCoord> + '_ {
        self.tiles
            .iter()
            .filter(move |(_, tile)| tile.placed_token() == Some(species))
            .map(|(&coord, _)| coord)
    }

    /// How many neighbors of `coord` hold a `species` token
    pub fn same_species_neighbors(&self, coord: HexCoord, species: Wildlife) -> usize {
        coord
            .neighbors()
            .iter()
            .filter(|&&n| self.token_at(n) == Some(species))
            .count()
    }

    /// Habitat on the neighboring tile's edge facing `edge` of the tile at `coord`
    pub fn habitat_across(&self, coord: HexCoord, edge: EdgeIndex) -> Option<Habitat> {
        self.tiles
            .get(&coord.neighbor(edge))
            .and_then(|tile| tile.edge(edge.opposite()))
            .map(|facing| facing.habitat())
    }

    // ========================================================================
    // PLACEMENT
    // ========================================================================

    /// Place a tile and link its edges to every occupied neighbor.
    ///
    /// Fails without touching the board if the cell is taken, outside the
    /// extent, the tile is a placeholder, or its id is already on the board.
    pub fn place(&mut self, mut tile: HabitatTile, coord: HexCoord) -> Result<()> {
        if tile.is_fake() {
            return Err(CascadiaError::invalid_argument(format!(
                "placeholder tile {} cannot be placed",
                tile.id()
            )));
        }
        if !self.extent.contains(coord) {
            return Err(CascadiaError::invalid_argument(format!(
                "{} is outside the {}x{} board",
                coord, self.extent.rows, self.extent.cols
            )));
        }
        if self.tiles.contains_key(&coord) {
            return Err(CascadiaError::OccupiedCell(coord));
        }
        if let Some(existing) = self.positions.get(&tile.id()) {
            return Err(CascadiaError::invalid_argument(format!(
                "tile {} is already placed at {}",
                tile.id(),
                existing
            )));
        }

        let id = tile.id();
        for edge in EdgeIndex::all() {
            let Some(neighbor) = self.tiles.get_mut(&coord.neighbor(edge)) else {
                continue;
            };
            let link = EdgeLink {
                first_tile: id,
                first_edge: edge,
                second_tile: neighbor.id(),
                second_edge: edge.opposite(),
            };
            if let Some(facing) = neighbor.edge_mut(edge.opposite()) {
                facing.set_link(link.reversed());
            }
            if let Some(own) = tile.edge_mut(edge) {
                own.set_link(link);
            }
        }

        tracing::trace!(tile = %id, %coord, "placed tile");
        self.positions.insert(id, coord);
        self.tiles.insert(coord, tile);
        Ok(())
    }

    /// Rotate the tile at coord; see [`HabitatTile::rotate`]
    pub fn rotate_tile(&mut self, coord: HexCoord, steps: u8) -> Result<bool> {
        self.tiles
            .get_mut(&coord)
            .ok_or_else(|| CascadiaError::invalid_argument(format!("no tile at {}", coord)))?
            .rotate(steps)
    }

    /// Place a wildlife token on a placed tile
    pub fn place_token(&mut self, id: TileId, species: Wildlife) -> Result<TokenPlacement> {
        let tile = self
            .positions
            .get(&id)
            .and_then(|coord| self.tiles.get_mut(coord))
            .ok_or_else(|| CascadiaError::invalid_placement(format!("tile {} is not on this board", id)))?;

        tile.place_token(species)?;
        let earned_nature_token = tile.is_keystone_match(species);
        tracing::debug!(tile = %id, %species, earned_nature_token, "placed token");

        Ok(TokenPlacement {
            tile: id,
            species,
            earned_nature_token,
        })
    }

    /// Take the token off a placed tile, returning it
    pub fn remove_token(&mut self, id: TileId) -> Result<Option<Wildlife>> {
        self.positions
            .get(&id)
            .and_then(|coord| self.tiles.get_mut(coord))
            .map(HabitatTile::remove_token)
            .ok_or_else(|| CascadiaError::invalid_argument(format!("tile {} is not on this board", id)))
    }

    // ========================================================================
    // FRONTIER
    // ========================================================================

    /// Empty in-extent cells next to at least one placed tile, sorted
    pub fn candidate_frontier(&self) -> Vec<HexCoord> {
        let frontier: BTreeSet<HexCoord> = self
            .tiles
            .keys()
            .flat_map(|coord| coord.neighbors())
            .filter(|n| self.extent.contains(*n) && !self.tiles.contains_key(n))
            .collect();
        frontier.into_iter().collect()
    }

    /// Placeholder tiles for each frontier cell, for display
    pub fn frontier_placeholders(&self, ids: &mut TileIdAllocator) -> Vec<(HexCoord, HabitatTile)> {
        self.candidate_frontier()
            .into_iter()
            .map(|coord| (coord, HabitatTile::placeholder(ids.allocate())))
            .collect()
    }
}

impl Default for TileBoard {
    fn default() -> Self {
        Self::new(BoardExtent::default())
    }
}
