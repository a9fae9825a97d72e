//! Habitat and wildlife definitions
//!
//! Pure semantic identities. Colours and glyphs belong to whatever renders
//! the board.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Habitat type on a tile half (and on each of its edges)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Habitat {
    Forest,
    Wetland,
    River,
    Mountain,
    Prairie,
}

/// Wildlife species; tokens of one species are interchangeable
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Wildlife {
    Bear,
    Elk,
    Salmon,
    Hawk,
    Fox,
}

/// All habitats
pub static HABITATS: [Habitat; 5] = [
    Habitat::Forest,
    Habitat::Wetland,
    Habitat::River,
    Habitat::Mountain,
    Habitat::Prairie,
];

/// All wildlife species
pub static WILDLIFE: [Wildlife; 5] = [
    Wildlife::Bear,
    Wildlife::Elk,
    Wildlife::Salmon,
    Wildlife::Hawk,
    Wildlife::Fox,
];

impl Habitat {
    pub fn name(self) -> &'static str {
        match self {
            Habitat::Forest => "Forest",
            Habitat::Wetland => "Wetland",
            Habitat::River => "River",
            Habitat::Mountain => "Mountain",
            Habitat::Prairie => "Prairie",
        }
    }
}

impl Wildlife {
    pub fn name(self) -> &'static str {
        match self {
            Wildlife::Bear => "Bear",
            Wildlife::Elk => "Elk",
            Wildlife::Salmon => "Salmon",
            Wildlife::Hawk => "Hawk",
            Wildlife::Fox => "Fox",
        }
    }

    /// Single-letter code
    pub fn to_char(self) -> char {
        match self {
            Wildlife::Bear => 'B',
            Wildlife::Elk => 'E',
            Wildlife::Salmon => 'S',
            Wildlife::Hawk => 'H',
            Wildlife::Fox => 'F',
        }
    }

    /// Parse from a name or single-letter code (case-insensitive)
    pub fn parse(s: &str) -> Option<Wildlife> {
        WILDLIFE.iter().copied().find(|w| {
            w.name().eq_ignore_ascii_case(s)
                || (s.len() == 1 && s.chars().next().map(|c| c.to_ascii_uppercase()) == Some(w.to_char()))
        })
    }
}

impl fmt::Display for Habitat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Wildlife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
