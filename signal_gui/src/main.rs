//! # Greenwave GUI Application
//!
//! Desktop interface for the submission workflow: pick four intersection
//! images, submit them to the analysis endpoint, and render the recommended
//! signal timings with emergency-lane flags.
//!
//! Built with Iced (Elm architecture). All contract logic lives in
//! signal_core; this crate only maps messages onto the core state machine and
//! renders `present(...)` output as widgets. The submission runs as an Iced
//! task so the UI stays responsive while the request is in flight, and the
//! submit trigger is inert while a submission is pending.

use iced::widget::{column, row, text, Space};
use iced::{Alignment, Element, Length, Task};
use tracing::info;

use signal_core::{
    submit, AnalysisEndpoint, HttpAnalysisClient, ImageFile, ImageSelection, Outcome,
    SubmissionState, REQUIRED_IMAGE_COUNT,
};

mod ui;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    iced::application(App::default, App::update, App::view)
        .title("Greenwave - Traffic Signal Optimizer")
        .run()
}

/// Application state: the current selection plus the single submission
/// lifecycle value. No other mutable state exists.
pub struct App {
    pub endpoint: AnalysisEndpoint,
    pub selection: ImageSelection,
    pub submission: SubmissionState,
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        App {
            endpoint: AnalysisEndpoint::from_env(),
            selection: ImageSelection::default(),
            submission: SubmissionState::Idle,
            status: format!("Select {} intersection images", REQUIRED_IMAGE_COUNT),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Open the file picker
    PickImages,
    /// Picker finished (None = cancelled)
    ImagesPicked(Option<Vec<ImageFile>>),
    /// Submit the current selection
    Submit,
    /// The in-flight submission settled
    SubmissionFinished(Outcome),
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImages => {
                if self.submission.is_pending() {
                    return Task::none();
                }
                Task::perform(pick_images(), Message::ImagesPicked)
            }
            Message::ImagesPicked(Some(files)) => {
                // A new pick replaces the prior selection, never merges into it
                self.status = format!("{} image(s) selected", files.len());
                self.selection = ImageSelection::from_files(files);
                Task::none()
            }
            Message::ImagesPicked(None) => Task::none(),
            Message::Submit => {
                if self.submission.is_pending() {
                    return Task::none();
                }
                self.submission.begin();
                self.status = "Processing images, this may take a few minutes...".to_string();

                let endpoint = self.endpoint.clone();
                let selection = self.selection.clone();
                Task::perform(run_submission(endpoint, selection), Message::SubmissionFinished)
            }
            Message::SubmissionFinished(outcome) => {
                self.status = match &outcome {
                    Outcome::Success(_) => "Optimization complete".to_string(),
                    Outcome::Failure(_) => "Submission failed".to_string(),
                };
                self.submission.settle(outcome);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("Greenwave").size(28),
            Space::new().width(Length::Fill),
            text("AI traffic signal optimization").size(14),
        ]
        .align_y(Alignment::Center);

        let panels = row![
            ui::upload_panel::view_upload_panel(self),
            ui::results_panel::view_results_panel(self),
        ]
        .spacing(8);

        column![
            header,
            panels,
            ui::status_bar::view_status_bar(&self.status, &self.submission),
        ]
        .padding(8)
        .spacing(8)
        .into()
    }
}

/// Run one submission against the configured endpoint.
///
/// Client construction failures funnel into the same `Outcome::Failure`
/// channel as every other error, so the update loop always settles.
async fn run_submission(endpoint: AnalysisEndpoint, selection: ImageSelection) -> Outcome {
    info!(endpoint = endpoint.base_url(), "Starting submission");
    match HttpAnalysisClient::new(endpoint) {
        Ok(client) => submit(&client, &selection).await,
        Err(e) => Outcome::Failure(e.user_message()),
    }
}

/// Open the async file picker and load the chosen images into memory
async fn pick_images() -> Option<Vec<ImageFile>> {
    let handles = rfd::AsyncFileDialog::new()
        .set_title("Select 4 intersection images")
        .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "webp"])
        .pick_files()
        .await?;

    let mut files = Vec::with_capacity(handles.len());
    for handle in &handles {
        let bytes = handle.read().await;
        files.push(ImageFile::from_bytes(handle.file_name(), bytes));
    }
    Some(files)
}
