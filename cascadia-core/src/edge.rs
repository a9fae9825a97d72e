//! Tile edges and the links between adjacent tiles
//!
//! Edges are numbered 1 (upper-right) to 6 (upper-left), clockwise.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::NEIGHBOR_COUNT;
use crate::error::{CascadiaError, Result};
use crate::tile::TileId;
use crate::wildlife::Habitat;

/// Edge number in 1..=6
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct EdgeIndex(u8);

impl EdgeIndex {
    /// Validate an edge number
    pub fn new(index: i64) -> Result<Self> {
        if (1..=NEIGHBOR_COUNT as i64).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(CascadiaError::invalid_argument(format!(
                "edge index {} is outside the range 1-6",
                index
            )))
        }
    }

    /// Edge for a 0-based slot; slot is taken modulo 6
    pub(crate) fn from_slot(slot: usize) -> Self {
        Self((slot % NEIGHBOR_COUNT) as u8 + 1)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// 0-based position in edge arrays
    pub fn slot(self) -> usize {
        self.0 as usize - 1
    }

    /// The edge on the neighboring tile that faces this one
    pub fn opposite(self) -> Self {
        Self::from_slot(self.slot() + NEIGHBOR_COUNT / 2)
    }

    /// Edges 1..=6 in order
    pub fn all() -> impl Iterator<Item = EdgeIndex> {
        (0..NEIGHBOR_COUNT).map(Self::from_slot)
    }
}

impl TryFrom<i64> for EdgeIndex {
    type Error = CascadiaError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<EdgeIndex> for u8 {
    fn from(edge: EdgeIndex) -> u8 {
        edge.0
    }
}

impl fmt::Display for EdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection between two tiles: `first_tile`'s `first_edge` faces
/// `second_tile`'s `second_edge`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeLink {
    pub first_tile: TileId,
    pub first_edge: EdgeIndex,
    pub second_tile: TileId,
    pub second_edge: EdgeIndex,
}

impl EdgeLink {
    /// Build a link from raw numbers, rejecting negative tiles and bad edges
    pub fn new(first_tile: i64, first_edge: i64, second_tile: i64, second_edge: i64) -> Result<Self> {
        Ok(Self {
            first_tile: TileId::try_from(first_tile)?,
            first_edge: EdgeIndex::new(first_edge)?,
            second_tile: TileId::try_from(second_tile)?,
            second_edge: EdgeIndex::new(second_edge)?,
        })
    }

    /// Same link seen from the other tile
    pub fn reversed(&self) -> Self {
        Self {
            first_tile: self.second_tile,
            first_edge: self.second_edge,
            second_tile: self.first_tile,
            second_edge: self.first_edge,
        }
    }
}

/// One of a tile's six borders
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    index: EdgeIndex,
    habitat: Habitat,
    link: Option<EdgeLink>,
}

impl Edge {
    pub(crate) fn new(index: EdgeIndex, habitat: Habitat) -> Self {
        Self { index, habitat, link: None }
    }

    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    /// Habitat along this edge
    pub fn habitat(&self) -> Habitat {
        self.habitat
    }

    /// Relabel; only rotation does this
    pub(crate) fn set_habitat(&mut self, habitat: Habitat) {
        self.habitat = habitat;
    }

    /// Link to the adjacent tile, if one has been placed there
    pub fn link(&self) -> Option<EdgeLink> {
        self.link
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_some()
    }

    pub(crate) fn set_link(&mut self, link: EdgeLink) {
        self.link = Some(link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_index_range() {
        assert!(EdgeIndex::new(0).is_err());
        assert!(EdgeIndex::new(7).is_err());
        assert!(EdgeIndex::new(-1).is_err());
        assert_eq!(EdgeIndex::new(6).unwrap().slot(), 5);
    }

    #[test]
    fn test_opposite() {
        let pairs = [(1, 4), (2, 5), (3, 6), (4, 1), (5, 2), (6, 3)];
        for (a, b) in pairs {
            assert_eq!(EdgeIndex::new(a).unwrap().opposite(), EdgeIndex::new(b).unwrap());
        }
    }

    #[test]
    fn test_link_validation() {
        assert!(EdgeLink::new(0, 1, 1, 4).is_ok());
        assert!(matches!(EdgeLink::new(-1, 1, 1, 4), Err(CascadiaError::InvalidArgument(_))));
        assert!(matches!(EdgeLink::new(0, 0, 1, 4), Err(CascadiaError::InvalidArgument(_))));
        assert!(matches!(EdgeLink::new(0, 1, 1, 7), Err(CascadiaError::InvalidArgument(_))));
    }

    #[test]
    fn test_link_reversed() {
        let link = EdgeLink::new(3, 2, 9, 5).unwrap();
        let back = link.reversed();
        assert_eq!(back.first_tile, link.second_tile);
        assert_eq!(back.first_edge, link.second_edge);
        assert_eq!(back.reversed(), link);
    }
}
