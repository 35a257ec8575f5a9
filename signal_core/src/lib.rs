//! # signal_core - Greenwave Submission Engine
//!
//! `signal_core` is the contract-logic heart of Greenwave: it validates the
//! four-image intersection selection, drives the asynchronous upload lifecycle
//! against the analysis endpoint, and interprets the heterogeneous response
//! (success timings vs. error payloads) into a render-ready view model.
//!
//! ## Design Philosophy
//!
//! - **Stateless core**: submission is a pure async function over an injected
//!   endpoint client; the single `SubmissionState` value is owned by the caller
//! - **One failure shape**: validation, transport, HTTP, and parse errors all
//!   normalize into `Outcome::Failure(message)` so surfaces never branch on origin
//! - **Testable seams**: the endpoint is reached through the [`AnalysisApi`]
//!   trait, so the whole workflow runs against a fake without network I/O
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signal_core::{AnalysisEndpoint, HttpAnalysisClient, ImageSelection, submit};
//!
//! # async fn demo(selection: ImageSelection) {
//! let client = HttpAnalysisClient::new(AnalysisEndpoint::default()).unwrap();
//! let outcome = submit(&client, &selection).await;
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`selection`] - Image files and the four-image selection invariant
//! - [`intersection`] - The four approach directions and their lane indices
//! - [`analysis`] - Wire types for the analysis endpoint response
//! - [`client`] - HTTP client for the analysis endpoint ([`AnalysisApi`] seam)
//! - [`submission`] - Submission lifecycle and outcome normalization
//! - [`report`] - Pure presenter turning a settled state into a view model
//! - [`config`] - Injectable endpoint address
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod client;
pub mod config;
pub mod errors;
pub mod intersection;
pub mod report;
pub mod selection;
pub mod submission;

// Re-export commonly used types at crate root for convenience
pub use analysis::{AmbulanceInfo, AnalysisResult, TimingPlan};
pub use client::{AnalysisApi, HttpAnalysisClient};
pub use config::{AnalysisEndpoint, DEFAULT_BASE_URL, ENDPOINT_ENV_VAR};
pub use errors::{SubmitError, SubmitResult};
pub use intersection::Direction;
pub use report::{present, ResultView, TimingReport, TimingRow};
pub use selection::{ImageFile, ImageSelection, REQUIRED_IMAGE_COUNT};
pub use submission::{submit, Outcome, SubmissionState};
