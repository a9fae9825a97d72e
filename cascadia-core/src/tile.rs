//! Habitat tiles: habitat halves, edges, rotation and token slots

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::NEIGHBOR_COUNT;
use crate::edge::{Edge, EdgeIndex};
use crate::error::{CascadiaError, Result};
use crate::wildlife::{Habitat, Wildlife};

/// Most token options a non-keystone tile can show
pub const MAX_TOKEN_OPTIONS: usize = 3;

/// Globally unique tile identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl TryFrom<i64> for TileId {
    type Error = CascadiaError;

    fn try_from(value: i64) -> Result<Self> {
        u32::try_from(value)
            .map(TileId)
            .map_err(|_| CascadiaError::invalid_argument(format!("tile id {} is out of range", value)))
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out tile ids; ids are never reused
#[derive(Clone, Debug, Default)]
pub struct TileIdAllocator {
    next: u32,
}

impl TileIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start numbering at `first` (e.g. to keep placeholder ids apart)
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn allocate(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u32 {
        self.next
    }
}

/// Tile classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Both halves share a habitat; exactly one token option
    Keystone,
    NonKeystone,
    /// Placeholder for an empty legal slot; holds no game data
    Fake,
}

/// A habitat tile
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitatTile {
    id: TileId,
    kind: TileKind,
    habitats: Option<(Habitat, Habitat)>,
    edges: Option<[Edge; NEIGHBOR_COUNT]>,
    token_options: Vec<Wildlife>,
    placed_token: Option<Wildlife>,
}

impl HabitatTile {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a real tile.
    ///
    /// Keystone tiles (`habitat1 == habitat2`) take exactly one token option;
    /// others take 1 to 3 distinct options. Edges 1-3 start out as
    /// `habitat1`, edges 4-6 as `habitat2`.
    pub fn new(
        id: TileId,
        habitat1: Habitat,
        habitat2: Habitat,
        token_options: Vec<Wildlife>,
    ) -> Result<Self> {
        let kind = if habitat1 == habitat2 {
            TileKind::Keystone
        } else {
            TileKind::NonKeystone
        };

        match kind {
            TileKind::Keystone if token_options.len() != 1 => {
                return Err(CascadiaError::invalid_argument(format!(
                    "keystone tile needs exactly one token option, got {}",
                    token_options.len()
                )));
            }
            _ if token_options.is_empty() || token_options.len() > MAX_TOKEN_OPTIONS => {
                return Err(CascadiaError::invalid_argument(format!(
                    "tile needs 1-{} token options, got {}",
                    MAX_TOKEN_OPTIONS,
                    token_options.len()
                )));
            }
            _ => {}
        }
        for (i, w) in token_options.iter().enumerate() {
            if token_options[..i].contains(w) {
                return Err(CascadiaError::invalid_argument(format!(
                    "duplicate token option {}",
                    w
                )));
            }
        }

        let edges = std::array::from_fn(|slot| {
            let habitat = if slot < NEIGHBOR_COUNT / 2 { habitat1 } else { habitat2 };
            Edge::new(EdgeIndex::from_slot(slot), habitat)
        });

        Ok(Self {
            id,
            kind,
            habitats: Some((habitat1, habitat2)),
            edges: Some(edges),
            token_options,
            placed_token: None,
        })
    }

    /// Create a placeholder marking an empty legal slot
    pub fn placeholder(id: TileId) -> Self {
        Self {
            id,
            kind: TileKind::Fake,
            habitats: None,
            edges: None,
            token_options: Vec::new(),
            placed_token: None,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn is_keystone(&self) -> bool {
        self.kind == TileKind::Keystone
    }

    pub fn is_fake(&self) -> bool {
        self.kind == TileKind::Fake
    }

    /// The two habitat halves (None for placeholders)
    pub fn habitats(&self) -> Option<(Habitat, Habitat)> {
        self.habitats
    }

    /// The six edges in order 1..=6 (empty for placeholders)
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_ref().map_or(&[], |edges| edges.as_slice())
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&Edge> {
        self.edges.as_ref().map(|edges| &edges[index.slot()])
    }

    pub(crate) fn edge_mut(&mut self, index: EdgeIndex) -> Option<&mut Edge> {
        self.edges.as_mut().map(|edges| &mut edges[index.slot()])
    }

    /// Habitat label of each edge, 1..=6
    pub fn edge_habitats(&self) -> Option<[Habitat; NEIGHBOR_COUNT]> {
        self.edges
            .as_ref()
            .map(|edges| std::array::from_fn(|slot| edges[slot].habitat()))
    }

    pub fn token_options(&self) -> &[Wildlife] {
        &self.token_options
    }

    pub fn placed_token(&self) -> Option<Wildlife> {
        self.placed_token
    }

    pub fn has_token(&self) -> bool {
        self.placed_token.is_some()
    }

    /// Whether `species` could be placed right now
    pub fn accepts(&self, species: Wildlife) -> bool {
        !self.is_fake() && !self.has_token() && self.token_options.contains(&species)
    }

    /// Keystone tile whose only option is `species`; placing it there
    /// earns a nature token
    pub fn is_keystone_match(&self, species: Wildlife) -> bool {
        self.is_keystone() && self.token_options.first() == Some(&species)
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Rotate clockwise by `steps` (0..=5).
    ///
    /// Keystone and placeholder tiles are left untouched and return
    /// `Ok(false)`. Links are positional and do not move.
    pub fn rotate(&mut self, steps: u8) -> Result<bool> {
        if steps as usize >= NEIGHBOR_COUNT {
            return Err(CascadiaError::invalid_argument(format!(
                "rotation of {} steps is outside 0-5",
                steps
            )));
        }
        if self.kind != TileKind::NonKeystone {
            return Ok(false);
        }

        let Some(edges) = self.edges.as_mut() else {
            return Ok(false);
        };
        let before: [Habitat; NEIGHBOR_COUNT] = std::array::from_fn(|slot| edges[slot].habitat());
        let shift = steps as usize;
        for (slot, edge) in edges.iter_mut().enumerate() {
            edge.set_habitat(before[(slot + NEIGHBOR_COUNT - shift) % NEIGHBOR_COUNT]);
        }
        Ok(true)
    }

    /// Rotate using a player-facing value in 1..=6 (1 = no rotation)
    pub fn rotate_prompted(&mut self, value: u8) -> Result<bool> {
        if !(1..=NEIGHBOR_COUNT as u8).contains(&value) {
            return Err(CascadiaError::invalid_argument(format!(
                "rotation choice {} is outside 1-6",
                value
            )));
        }
        self.rotate(value - 1)
    }

    /// Place a wildlife token.
    ///
    /// Fails without changing the tile if it is a placeholder, already
    /// holds a token, or does not offer `species`.
    pub fn place_token(&mut self, species: Wildlife) -> Result<()> {
        if self.is_fake() {
            return Err(CascadiaError::invalid_placement(format!(
                "tile {} is a placeholder",
                self.id
            )));
        }
        if let Some(existing) = self.placed_token {
            return Err(CascadiaError::invalid_placement(format!(
                "tile {} already holds a {}",
                self.id, existing
            )));
        }
        if !self.token_options.contains(&species) {
            return Err(CascadiaError::invalid_placement(format!(
                "tile {} does not accept {}",
                self.id, species
            )));
        }
        self.placed_token = Some(species);
        Ok(())
    }

    /// Take the placed token off again
    pub fn remove_token(&mut self) -> Option<Wildlife> {
        self.placed_token.take()
    }
}

impl fmt::Display for HabitatTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.habitats {
            Some((h1, h2)) => write!(f, "{} + {}", h1, h2),
            None => write!(f, "placeholder {}", self.id),
        }
    }
}
