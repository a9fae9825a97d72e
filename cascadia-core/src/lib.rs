//! Cascadia Core - Board model and scoring engine
//!
//! This crate provides the core logic for the Cascadia tile-laying game:
//! - Board geometry (hex grid with offset row coordinates)
//! - Habitat tiles with edge-aware rotation and wildlife token slots
//! - Sparse per-player tile board with placement frontier
//! - Seeded tile and token generation
//! - Wildlife run scoring (salmon pattern)

pub mod board;
pub mod wildlife;
pub mod edge;
pub mod tile;
pub mod tile_board;
pub mod generation;
pub mod config;
pub mod error;
pub mod scoring;

// Re-exports for convenient access
pub use board::{HexCoord, BoardExtent, NEIGHBOR_COUNT, STARTER_COORDS};
pub use wildlife::{Habitat, Wildlife, HABITATS, WILDLIFE};
pub use edge::{Edge, EdgeIndex, EdgeLink};
pub use tile::{HabitatTile, TileId, TileIdAllocator, TileKind};
pub use tile_board::{TileBoard, TokenPlacement};
pub use generation::{TileGenerator, TokenBag};
pub use config::GameConfig;
pub use error::{CascadiaError, Result};
pub use scoring::{ScoringEngine, WildlifeScoring};
pub use scoring::runs::{find_runs, score_runs, Run, RunTable};
pub use scoring::salmon::{SalmonOption, SalmonScoring};
