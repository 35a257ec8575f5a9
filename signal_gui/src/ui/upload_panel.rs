//! Upload Panel (Left Side)
//!
//! File selection summary plus the pick and analyze triggers. Both triggers
//! go inert while a submission is pending; count validation itself is left to
//! the submission step so the user sees the canonical message.

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Element, Length, Padding};

use signal_core::REQUIRED_IMAGE_COUNT;

use crate::{App, Message};

/// Render the upload panel
pub fn view_upload_panel(app: &App) -> Element<'_, Message> {
    let pending = app.submission.is_pending();

    let file_list: Element<'_, Message> = if app.selection.is_empty() {
        text("No images selected").size(11).color([0.5, 0.5, 0.5]).into()
    } else {
        Column::with_children(
            app.selection
                .files()
                .iter()
                .map(|f| text(f.file_name.as_str()).size(11).into()),
        )
        .spacing(2)
        .into()
    };

    let pick_button = button(text("Choose Images").size(11))
        .on_press_maybe((!pending).then_some(Message::PickImages))
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    let analyze_button = button(text("Analyze Images").size(11))
        .on_press_maybe((!pending).then_some(Message::Submit))
        .padding(Padding::from([4, 8]))
        .style(button::primary);

    let content = column![
        text("Upload intersection photos").size(14),
        text(format!(
            "Select {} images showing the different roads at an intersection.",
            REQUIRED_IMAGE_COUNT
        ))
        .size(11)
        .color([0.5, 0.5, 0.5]),
        Space::new().height(8),
        file_list,
        Space::new().height(8),
        row![pick_button, analyze_button].spacing(4),
    ]
    .spacing(4);

    container(content)
        .width(Length::FillPortion(40))
        .style(container::bordered_box)
        .padding(8)
        .into()
}
