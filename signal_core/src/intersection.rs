//! # Intersection Directions
//!
//! The four fixed approaches of the intersection and their stable lane
//! indices. The analysis endpoint flags emergency lanes by index
//! (0=north, 1=south, 2=west, 3=east), and all rendering walks
//! [`Direction::APPROACH_ORDER`] so the output order never depends on
//! anything in the response payload.

use serde::{Deserialize, Serialize};

/// One of the four intersection approaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Fixed rendering and lane-index order: north, south, west, east
    pub const APPROACH_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Stable lane index used by the endpoint's `ambulance_info.lanes`
    pub fn lane_index(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::West => 2,
            Direction::East => 3,
        }
    }

    /// Direction for a lane index, if it is in range
    pub fn from_lane_index(index: u8) -> Option<Direction> {
        Direction::APPROACH_ORDER.get(index as usize).copied()
    }

    /// Human-readable name for display
    pub fn display_name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::West => "West",
            Direction::East => "East",
        }
    }
}
