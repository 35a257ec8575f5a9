//! # Analysis Response Types
//!
//! Wire types for the analysis endpoint's success payload:
//!
//! ```json
//! { "timings": { "north": 30, "south": 25, "west": 20, "east": 35 },
//!   "ambulance_info": { "detected": false, "lanes": [] } }
//! ```
//!
//! All four direction keys in `timings` are required; a body missing any of
//! them fails to parse and surfaces as a malformed-response failure. The
//! `ambulance_info` object is defensively defaulted when absent so a server
//! that omits it still renders (no lanes flagged, no banner).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::intersection::Direction;

/// Recommended green time in whole seconds for each approach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingPlan {
    pub north: u32,
    pub south: u32,
    pub west: u32,
    pub east: u32,
}

impl TimingPlan {
    /// Green time for one approach
    pub fn seconds_for(&self, direction: Direction) -> u32 {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::West => self.west,
            Direction::East => self.east,
        }
    }
}

/// Emergency-vehicle detection summary.
///
/// `detected` and `lanes` are independently authoritative: the service
/// contract never promises that one implies the other, so neither field is
/// derived from the other here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbulanceInfo {
    #[serde(default)]
    pub detected: bool,
    #[serde(default)]
    pub lanes: BTreeSet<u8>,
}

impl AmbulanceInfo {
    /// Whether this approach's lane index is flagged
    pub fn flags_lane(&self, direction: Direction) -> bool {
        self.lanes.contains(&direction.lane_index())
    }
}

/// Parsed success payload from the analysis endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub timings: TimingPlan,
    #[serde(default)]
    pub ambulance_info: AmbulanceInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let json = r#"{
            "timings": { "north": 30, "south": 25, "west": 20, "east": 35 },
            "ambulance_info": { "detected": true, "lanes": [2] }
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.timings.seconds_for(Direction::North), 30);
        assert_eq!(result.timings.seconds_for(Direction::East), 35);
        assert!(result.ambulance_info.detected);
        assert!(result.ambulance_info.flags_lane(Direction::West));
        assert!(!result.ambulance_info.flags_lane(Direction::North));
    }

    #[test]
    fn test_missing_ambulance_info_coerces_to_default() {
        let json = r#"{ "timings": { "north": 1, "south": 2, "west": 3, "east": 4 } }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(!result.ambulance_info.detected);
        assert!(result.ambulance_info.lanes.is_empty());
    }

    #[test]
    fn test_partial_ambulance_info_coerces_missing_fields() {
        let json = r#"{
            "timings": { "north": 1, "south": 2, "west": 3, "east": 4 },
            "ambulance_info": { "detected": true }
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        // detected=true with no lanes is valid server behavior
        assert!(result.ambulance_info.detected);
        assert!(result.ambulance_info.lanes.is_empty());
    }

    #[test]
    fn test_missing_timing_key_is_an_error() {
        let json = r#"{ "timings": { "north": 1, "south": 2, "west": 3 } }"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_negative_timing_is_an_error() {
        let json = r#"{ "timings": { "north": -5, "south": 2, "west": 3, "east": 4 } }"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_duplicate_lane_indices_collapse() {
        let json = r#"{
            "timings": { "north": 1, "south": 2, "west": 3, "east": 4 },
            "ambulance_info": { "detected": true, "lanes": [1, 1, 3] }
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.ambulance_info.lanes.len(), 2);
        assert!(result.ambulance_info.flags_lane(Direction::South));
        assert!(result.ambulance_info.flags_lane(Direction::East));
    }
}
