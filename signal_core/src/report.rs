//! # Result Presenter
//!
//! Pure interpretation of a [`SubmissionState`] into a render-ready view
//! model. Both surfaces (GUI and CLI) consume [`ResultView`], so the render
//! rules live in one place and are testable without any widget toolkit.
//!
//! Rendering rules:
//! - the four rows always appear in the fixed order north, south, west, east,
//!   regardless of any ordering in the response payload
//! - a row is annotated iff its lane index is in `ambulance_info.lanes`
//! - the global emergency banner shows iff `ambulance_info.detected`,
//!   independent of which lanes are flagged

use crate::analysis::AnalysisResult;
use crate::intersection::Direction;
use crate::submission::{Outcome, SubmissionState};

/// One rendered approach row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRow {
    pub direction: Direction,
    pub seconds: u32,
    /// Whether this approach carries the emergency-lane annotation
    pub ambulance: bool,
}

/// The rendered success view: four rows in fixed order plus the banner flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingReport {
    pub rows: Vec<TimingRow>,
    pub ambulance_detected: bool,
}

impl TimingReport {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let rows = Direction::APPROACH_ORDER
            .iter()
            .map(|&direction| TimingRow {
                direction,
                seconds: result.timings.seconds_for(direction),
                ambulance: result.ambulance_info.flags_lane(direction),
            })
            .collect();

        TimingReport {
            rows,
            ambulance_detected: result.ambulance_info.detected,
        }
    }
}

/// The three mutually exclusive render states, plus the report itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// Nothing submitted yet: show a placeholder prompt
    Placeholder,
    /// Submission in flight: show a processing indicator, never stale results
    Processing,
    /// Settled with a failure: show the message verbatim, no timing data
    Error(String),
    /// Settled with a result: show the four-row report
    Report(TimingReport),
}

/// Interpret the current submission state. Pure and idempotent; safe to
/// re-invoke on every state change.
pub fn present(state: &SubmissionState) -> ResultView {
    match state {
        SubmissionState::Idle => ResultView::Placeholder,
        SubmissionState::Pending => ResultView::Processing,
        SubmissionState::Settled(Outcome::Failure(message)) => ResultView::Error(message.clone()),
        SubmissionState::Settled(Outcome::Success(result)) => {
            ResultView::Report(TimingReport::from_result(result))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AmbulanceInfo, TimingPlan};

    fn settled(detected: bool, lanes: &[u8]) -> SubmissionState {
        SubmissionState::Settled(Outcome::Success(AnalysisResult {
            timings: TimingPlan {
                north: 30,
                south: 25,
                west: 20,
                east: 35,
            },
            ambulance_info: AmbulanceInfo {
                detected,
                lanes: lanes.iter().copied().collect(),
            },
        }))
    }

    #[test]
    fn test_idle_and_pending_views() {
        assert_eq!(present(&SubmissionState::Idle), ResultView::Placeholder);
        assert_eq!(present(&SubmissionState::Pending), ResultView::Processing);
    }

    #[test]
    fn test_failure_renders_message_verbatim_without_rows() {
        let state = SubmissionState::Settled(Outcome::Failure("invalid image format".to_string()));
        assert_eq!(
            present(&state),
            ResultView::Error("invalid image format".to_string())
        );
    }

    #[test]
    fn test_rows_follow_fixed_direction_order() {
        let view = present(&settled(false, &[]));
        let ResultView::Report(report) = view else {
            panic!("expected a report");
        };

        let directions: Vec<_> = report.rows.iter().map(|r| r.direction).collect();
        assert_eq!(directions, Direction::APPROACH_ORDER);

        let seconds: Vec<_> = report.rows.iter().map(|r| r.seconds).collect();
        assert_eq!(seconds, [30, 25, 20, 35]);
        assert!(report.rows.iter().all(|r| !r.ambulance));
        assert!(!report.ambulance_detected);
    }

    #[test]
    fn test_single_flagged_lane_annotates_only_that_row() {
        let ResultView::Report(report) = present(&settled(true, &[2])) else {
            panic!("expected a report");
        };

        for row in &report.rows {
            assert_eq!(row.ambulance, row.direction == Direction::West, "{:?}", row.direction);
        }
        assert!(report.ambulance_detected);
    }

    #[test]
    fn test_banner_follows_detected_flag_independently_of_lanes() {
        // detected=true with no lanes: banner but no row annotations
        let ResultView::Report(report) = present(&settled(true, &[])) else {
            panic!("expected a report");
        };
        assert!(report.ambulance_detected);
        assert!(report.rows.iter().all(|r| !r.ambulance));

        // detected=false with a flagged lane: annotation but no banner
        let ResultView::Report(report) = present(&settled(false, &[0])) else {
            panic!("expected a report");
        };
        assert!(!report.ambulance_detected);
        assert!(report.rows[0].ambulance);
    }

    #[test]
    fn test_out_of_range_lane_indices_are_ignored() {
        let ResultView::Report(report) = present(&settled(true, &[7, 200])) else {
            panic!("expected a report");
        };
        assert!(report.rows.iter().all(|r| !r.ambulance));
        assert!(report.ambulance_detected);
    }

    #[test]
    fn test_present_is_idempotent() {
        let state = settled(true, &[1, 3]);
        assert_eq!(present(&state), present(&state));

        let failure = SubmissionState::Settled(Outcome::Failure("x".to_string()));
        assert_eq!(present(&failure), present(&failure));
    }
}
