//! Results Panel (Right Side)
//!
//! Renders `present(...)` output, one branch per view state:
//! - Placeholder -> prompt text
//! - Processing -> in-flight indicator (never stale results)
//! - Error -> the failure message verbatim, no timing data
//! - Report -> four timing rows in fixed order plus the emergency banner

use iced::widget::{column, container, row, scrollable, text, Column, Space};
use iced::{Element, Length};

use signal_core::{present, ResultView, TimingReport};

use crate::{App, Message};

/// Render the results panel based on the current submission state
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = match present(&app.submission) {
        ResultView::Placeholder => column![
            text("Optimization results will show here").size(12).color([0.5, 0.5, 0.5]),
        ],
        ResultView::Processing => column![
            text("Processing images, this may take a few minutes...").size(12),
        ],
        ResultView::Error(message) => column![
            text("Error").size(14),
            Space::new().height(8),
            text(message).size(12).color([0.8, 0.2, 0.2]),
        ],
        ResultView::Report(report) => view_report(&report),
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(60))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Render the four approach rows and, when detected, the global banner
fn view_report(report: &TimingReport) -> Column<'static, Message> {
    let mut content = column![
        text("Optimization Results").size(14),
        text("Recommended green times for each direction:").size(11).color([0.5, 0.5, 0.5]),
        Space::new().height(8),
    ]
    .spacing(4);

    for timing in &report.rows {
        let mut line = row![
            text(format!(
                "{}: {} seconds",
                timing.direction.display_name(),
                timing.seconds
            ))
            .size(12),
        ]
        .spacing(8);

        if timing.ambulance {
            line = line.push(text("Ambulance present!").size(12).color([0.8, 0.4, 0.0]));
        }

        content = content.push(line);
    }

    if report.ambulance_detected {
        content = content.push(Space::new().height(8));
        content = content.push(
            text("Emergency vehicle detected! Priority has been given to lanes with ambulances.")
                .size(12)
                .color([0.8, 0.2, 0.2]),
        );
    }

    content
}
