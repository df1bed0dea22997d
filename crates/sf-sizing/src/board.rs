//! Transducer boards and their frequency classes.

use serde::{Deserialize, Serialize};
use sf_core::units::{Power, in_watts, watts};
use std::fmt;

/// Operating frequency of a head. Every board carries heads of one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FrequencyClass {
    /// 28 kHz: large bubbles, strong impact, best for heavy flux.
    #[serde(rename = "28")]
    K28,
    /// 40 kHz: small bubbles, better reach into holes and bores.
    #[serde(rename = "40")]
    K40,
}

impl FrequencyClass {
    pub const ALL: [FrequencyClass; 2] = [FrequencyClass::K28, FrequencyClass::K40];

    /// Nominal frequency in kHz, also used as the marker label.
    pub fn khz(self) -> u32 {
        match self {
            FrequencyClass::K28 => 28,
            FrequencyClass::K40 => 40,
        }
    }
}

impl fmt::Display for FrequencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kHz", self.khz())
    }
}

/// Hardware rating of one board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardSpec {
    /// Electrical power drawn by one board
    pub power: Power,
    /// Number of heads mounted on one board
    pub heads: u32,
}

impl BoardSpec {
    pub fn new(watts_per_board: f64, heads_per_board: u32) -> Self {
        Self {
            power: watts(watts_per_board),
            heads: heads_per_board,
        }
    }

    pub fn watts_per_board(&self) -> f64 {
        in_watts(self.power)
    }
}

/// One board spec per frequency class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPair {
    pub k28: BoardSpec,
    pub k40: BoardSpec,
}

impl BoardPair {
    pub fn get(&self, class: FrequencyClass) -> &BoardSpec {
        match class {
            FrequencyClass::K28 => &self.k28,
            FrequencyClass::K40 => &self.k40,
        }
    }
}
