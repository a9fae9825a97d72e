//! Game configuration, loaded from JSON

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::BoardExtent;
use crate::scoring::salmon::SalmonOption;

/// Settings chosen at game setup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub extent: BoardExtent,
    /// Salmon scoring card in play
    pub salmon_option: SalmonOption,
    /// Token options shown on non-keystone tiles (2 or 3)
    pub token_options: usize,
    /// Tiles each player places after the starter triple
    pub tiles_per_player: usize,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            extent: BoardExtent::default(),
            salmon_option: SalmonOption::S1,
            token_options: 3,
            tiles_per_player: 20,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load from JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        if config.extent.rows <= 0 || config.extent.cols <= 0 {
            anyhow::bail!(
                "board extent must be positive, got {}x{}",
                config.extent.rows,
                config.extent.cols
            );
        }
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn with_salmon_option(mut self, option: SalmonOption) -> Self {
        self.salmon_option = option;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tiles_per_player(mut self, tiles: usize) -> Self {
        self.tiles_per_player = tiles;
        self
    }
}
