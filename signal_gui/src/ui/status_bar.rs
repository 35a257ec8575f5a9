//! Status Bar (Bottom)
//!
//! Displays the latest status message and the submission lifecycle phase.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use signal_core::SubmissionState;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    status: &'a str,
    submission: &SubmissionState,
) -> Element<'a, Message> {
    let phase = match submission {
        SubmissionState::Idle => "Idle",
        SubmissionState::Pending => "Processing",
        SubmissionState::Settled(_) => "Settled",
    };

    row![
        text(status).size(10),
        Space::new().width(Length::Fill),
        text(phase).size(10).color([0.5, 0.5, 0.5]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
