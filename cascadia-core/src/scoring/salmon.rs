//! Salmon scoring cards
//!
//! Salmon score by run length. The three cards differ only in their table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::runs::{score_runs, RunTable};
use super::WildlifeScoring;
use crate::tile_board::TileBoard;
use crate::wildlife::Wildlife;

/// Points by run length for each card (index 0 = run of one)
const S1_POINTS: RunTable = RunTable::new(&[2, 4, 7, 11, 15, 20, 26]);
const S2_POINTS: RunTable = RunTable::new(&[2, 4, 8, 12, 12]);
const S3_POINTS: RunTable = RunTable::new(&[2, 4, 9, 11, 17]);

/// Salmon scoring card chosen at setup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalmonOption {
    S1,
    S2,
    S3,
}

impl SalmonOption {
    pub const ALL: [SalmonOption; 3] = [SalmonOption::S1, SalmonOption::S2, SalmonOption::S3];

    pub fn table(self) -> RunTable {
        match self {
            SalmonOption::S1 => S1_POINTS,
            SalmonOption::S2 => S2_POINTS,
            SalmonOption::S3 => S3_POINTS,
        }
    }
}

impl fmt::Display for SalmonOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SalmonOption::S1 => "S1",
            SalmonOption::S2 => "S2",
            SalmonOption::S3 => "S3",
        };
        f.write_str(name)
    }
}

impl FromStr for SalmonOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SalmonOption::ALL
            .into_iter()
            .find(|option| option.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown salmon option '{}' (expected S1, S2 or S3)", s))
    }
}

/// Score every salmon run on the board under `option`
pub fn calculate_score(board: &TileBoard, option: SalmonOption) -> u32 {
    score_runs(board, Wildlife::Salmon, option.table())
}

/// Salmon card as a pluggable scoring category
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SalmonScoring {
    pub option: SalmonOption,
}

impl SalmonScoring {
    pub fn new(option: SalmonOption) -> Self {
        Self { option }
    }
}

impl WildlifeScoring for SalmonScoring {
    fn species(&self) -> Wildlife {
        Wildlife::Salmon
    }

    fn calculate_score(&self, board: &TileBoard) -> u32 {
        calculate_score(board, self.option)
    }
}
