//! # Submission Lifecycle
//!
//! The Submission Controller: validates the selection, drives exactly one
//! request through an [`AnalysisApi`], and normalizes every failure mode into
//! [`Outcome::Failure`] so downstream code never sees an exception-shaped
//! error.
//!
//! The lifecycle is a three-state machine owned by whoever drives the
//! workflow (the GUI update loop or the CLI main):
//!
//! ```text
//! Idle --begin()--> Pending --settle(outcome)--> Settled(Outcome)
//! ```
//!
//! Overlapping submissions are disallowed by policy: the submit trigger is
//! inert while the state is `Pending`. Once issued, a submission runs to
//! settlement; cancellation is not supported.

use crate::analysis::AnalysisResult;
use crate::client::AnalysisApi;
use crate::selection::ImageSelection;

/// Terminal result of a submission
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(AnalysisResult),
    Failure(String),
}

/// Lifecycle of one submission cycle.
///
/// A single owned value instead of separate loading/result/error flags, so
/// impossible combinations (pending with a stale result) cannot exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Settled(Outcome),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    /// Start a new submission cycle, discarding any prior settled outcome
    pub fn begin(&mut self) {
        *self = SubmissionState::Pending;
    }

    /// Record the terminal outcome. The sole mutation point after `begin`;
    /// called exactly once per submission.
    pub fn settle(&mut self, outcome: Outcome) {
        *self = SubmissionState::Settled(outcome);
    }

    /// Back to idle, e.g. when the selection is replaced
    pub fn reset(&mut self) {
        *self = SubmissionState::Idle;
    }
}

/// Run one submission: validate, then issue exactly one `analyze` call.
///
/// A selection of the wrong size fails fast with the validation message and
/// never reaches the API. Every [`crate::errors::SubmitError`] collapses into
/// `Outcome::Failure` with its user-facing message.
pub async fn submit<A: AnalysisApi + ?Sized>(api: &A, selection: &ImageSelection) -> Outcome {
    if let Err(e) = selection.validate() {
        return Outcome::Failure(e.user_message());
    }

    match api.analyze(selection).await {
        Ok(result) => Outcome::Success(result),
        Err(e) => Outcome::Failure(e.user_message()),
    }
}
