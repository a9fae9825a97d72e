//! Hex board geometry with offset row coordinates
//!
//! Tiles are pointy-top hexagons laid out in rows. Even rows sit half a cell
//! to the right of odd rows, so the column offset of the diagonal neighbors
//! depends on row parity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edge::EdgeIndex;

/// Number of neighbors (and edges) of a hex
pub const NEIGHBOR_COUNT: usize = 6;

/// Default board extent, matching the physical play area
pub const DEFAULT_ROWS: i32 = 20;
pub const DEFAULT_COLS: i32 = 20;

/// Where the three starter tiles go, in starter-triple order.
/// The three cells are mutually adjacent.
pub const STARTER_COORDS: [HexCoord; 3] = [
    HexCoord::new(8, 10),
    HexCoord::new(9, 10),
    HexCoord::new(9, 11),
];

/// Neighbor offsets (drow, dcol) for even rows
/// Index: 0=NE, 1=E, 2=SE, 3=SW, 4=W, 5=NW (edge index - 1)
const EVEN_ROW_OFFSETS: [(i32, i32); NEIGHBOR_COUNT] = [
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // SW
    (0, -1),  // W
    (-1, 0),  // NW
];

/// Neighbor offsets (drow, dcol) for odd rows
const ODD_ROW_OFFSETS: [(i32, i32); NEIGHBOR_COUNT] = [
    (-1, 0),  // NE
    (0, 1),   // E
    (1, 0),   // SE
    (1, -1),  // SW
    (0, -1),  // W
    (-1, -1), // NW
];

/// Offset hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub row: i32,
    pub col: i32,
}

impl HexCoord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    fn offsets(&self) -> &'static [(i32, i32); NEIGHBOR_COUNT] {
        if self.row.rem_euclid(2) == 0 {
            &EVEN_ROW_OFFSETS
        } else {
            &ODD_ROW_OFFSETS
        }
    }

    /// The six neighbors, clockwise from the upper-right one.
    ///
    /// Edge `i` of a tile at this coordinate faces `neighbors()[i - 1]`.
    /// Total for any coordinate; bounds are the board's concern.
    pub fn neighbors(&self) -> [HexCoord; NEIGHBOR_COUNT] {
        let offsets = self.offsets();
        std::array::from_fn(|i| {
            let (dr, dc) = offsets[i];
            HexCoord::new(self.row + dr, self.col + dc)
        })
    }

    /// Neighbor across the given edge
    pub fn neighbor(&self, edge: EdgeIndex) -> HexCoord {
        let (dr, dc) = self.offsets()[edge.slot()];
        HexCoord::new(self.row + dr, self.col + dc)
    }

    /// Edge of this hex that faces `other`, if they are adjacent
    pub fn edge_towards(&self, other: HexCoord) -> Option<EdgeIndex> {
        EdgeIndex::all().find(|&edge| self.neighbor(edge) == other)
    }

    pub fn is_adjacent(&self, other: HexCoord) -> bool {
        self.edge_towards(other).is_some()
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular extent of a player's board: rows `0..rows`, cols `0..cols`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardExtent {
    pub rows: i32,
    pub cols: i32,
}

impl BoardExtent {
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Check if a coordinate is inside the extent
    pub fn contains(&self, coord: HexCoord) -> bool {
        (0..self.rows).contains(&coord.row) && (0..self.cols).contains(&coord.col)
    }
}

impl Default for BoardExtent {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_even_row() {
        let n = HexCoord::new(8, 11).neighbors();
        assert_eq!(n[0], HexCoord::new(7, 12));
        assert_eq!(n[1], HexCoord::new(8, 12));
        assert_eq!(n[2], HexCoord::new(9, 12));
        assert_eq!(n[3], HexCoord::new(9, 11));
        assert_eq!(n[4], HexCoord::new(8, 10));
        assert_eq!(n[5], HexCoord::new(7, 11));
    }

    #[test]
    fn test_neighbors_odd_row() {
        let n = HexCoord::new(9, 12).neighbors();
        assert_eq!(n[0], HexCoord::new(8, 12));
        assert_eq!(n[5], HexCoord::new(8, 11));
        assert_eq!(n[3], HexCoord::new(10, 11));
    }

    #[test]
    fn test_adjacency_symmetry() {
        for row in -4..6 {
            for col in -4..6 {
                let a = HexCoord::new(row, col);
                for b in a.neighbors() {
                    assert!(b.neighbors().contains(&a), "{} -> {} not symmetric", a, b);
                }
            }
        }
    }

    #[test]
    fn test_opposite_edges_face_back() {
        let a = HexCoord::new(-3, 2);
        for edge in EdgeIndex::all() {
            let b = a.neighbor(edge);
            assert_eq!(b.neighbor(edge.opposite()), a);
            assert_eq!(a.edge_towards(b), Some(edge));
        }
    }

    #[test]
    fn test_starters_mutually_adjacent() {
        let [a, b, c] = STARTER_COORDS;
        assert!(a.is_adjacent(b));
        assert!(a.is_adjacent(c));
        assert!(b.is_adjacent(c));
    }

    #[test]
    fn test_extent() {
        let extent = BoardExtent::default();
        assert!(extent.contains(HexCoord::new(0, 0)));
        assert!(extent.contains(HexCoord::new(19, 19)));
        assert!(!extent.contains(HexCoord::new(20, 0)));
        assert!(!extent.contains(HexCoord::new(0, -1)));
    }
}
