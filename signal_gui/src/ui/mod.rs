//! UI module for the Greenwave GUI
//!
//! # Panel Structure
//! - `upload_panel` - Left: file selection list, pick/analyze buttons
//! - `results_panel` - Right: the three mutually exclusive result states
//!   (placeholder, processing, result-or-error)
//! - `status_bar` - Bottom status messages and lifecycle phase

pub mod results_panel;
pub mod status_bar;
pub mod upload_panel;
