use std::path::{Path, PathBuf};
use std::sync::Arc;

use iced::{
    Alignment::Center,
    Element, Length, Task, Theme,
    widget::{button, column, container, row, text},
};
use rfd::AsyncFileDialog;

use crate::SignClassifier;
use crate::classify::postprocess;
use crate::models::Prediction;

use super::{AppState, Message, message::PreviewFrame};

/// Startup configuration handed over from the CLI.
#[derive(Debug, Clone)]
pub struct GuiOptions {
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub device_path: String,
}

pub fn run(options: GuiOptions) -> iced::Result {
    iced::application(
        move || HandsignApp::new(options.clone()),
        HandsignApp::update,
        HandsignApp::view,
    )
    .title("Handsign - ASL Sign Classifier")
    .theme(HandsignApp::theme)
    .run()
}

pub struct HandsignApp {
    state: AppState,
}

impl HandsignApp {
    fn new(options: GuiOptions) -> (Self, Task<Message>) {
        let state = match SignClassifier::load(&options.model_path, &options.labels_path) {
            Ok(classifier) => AppState::ready(Arc::new(classifier), options.device_path),
            Err(e) => {
                eprintln!("Error loading model or labels: {e:#}");
                AppState::load_failed(options.device_path)
            }
        };
        (Self { state }, Task::none())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CapturePressed => {
                let Some(classifier) = self.state.classifier.clone() else {
                    return Task::none();
                };
                if self.state.busy {
                    return Task::none();
                }
                self.state.busy = true;

                let device = self.state.device_path.clone();
                Task::perform(
                    run_blocking(move || capture_and_classify(&classifier, &device)),
                    Message::Classified,
                )
            }
            Message::OpenImagePressed => Task::perform(
                AsyncFileDialog::new()
                    .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "webp"])
                    .pick_file(),
                |handle| Message::ImagePicked(handle.map(|file| file.path().to_path_buf())),
            ),
            Message::ImagePicked(None) => Task::none(),
            Message::ImagePicked(Some(path)) => {
                let Some(classifier) = self.state.classifier.clone() else {
                    return Task::none();
                };
                if self.state.busy {
                    return Task::none();
                }
                self.state.busy = true;

                Task::perform(
                    run_blocking(move || classify_file(&classifier, &path)),
                    Message::Classified,
                )
            }
            Message::Classified(Ok((prediction, frame))) => {
                self.state.busy = false;
                self.state.preview = Some(iced::widget::image::Handle::from_rgba(
                    frame.width,
                    frame.height,
                    frame.rgba,
                ));
                self.state.result_text = format!("Label: {}", prediction.label);
                self.state.confidence_text = format!(
                    "Confidence: {}",
                    postprocess::format_confidence(prediction.score)
                );
                Task::none()
            }
            Message::Classified(Err(e)) => {
                self.state.busy = false;
                eprintln!("Error processing image: {e}");
                self.state.result_text = "No prediction".to_string();
                self.state.confidence_text = e;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let preview: Element<'_, Message> = match &self.state.preview {
            Some(handle) => iced::widget::image(handle.clone())
                .width(Length::Fixed(480.0))
                .into(),
            None => container(text("No capture yet"))
                .center_x(Length::Fixed(480.0))
                .center_y(Length::Fixed(320.0))
                .into(),
        };

        let capture_label = if self.state.busy { "Working..." } else { "Capture" };
        let can_interact = !self.state.busy && self.state.classifier.is_some();

        let content = column![
            text("Handsign").size(32),
            preview,
            text(self.state.result_text.as_str()).size(24),
            text(self.state.confidence_text.as_str()),
            row![
                button(capture_label)
                    .on_press_maybe(can_interact.then_some(Message::CapturePressed)),
                button("Open Image")
                    .on_press_maybe(can_interact.then_some(Message::OpenImagePressed)),
            ]
            .spacing(20),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

/// Run a blocking capture/inference job off the UI executor.
async fn run_blocking<F>(job: F) -> Result<(Prediction, PreviewFrame), String>
where
    F: FnOnce() -> Result<(Prediction, PreviewFrame), String> + Send + 'static,
{
    match tokio::task::spawn_blocking(job).await {
        Ok(result) => result,
        Err(e) => Err(format!("Background task failed: {e}")),
    }
}

#[cfg(target_os = "linux")]
fn capture_and_classify(
    classifier: &SignClassifier,
    device: &str,
) -> Result<(Prediction, PreviewFrame), String> {
    use crate::camera::{FrameSource, V4l2Source};

    let frame = V4l2Source::new(device)
        .capture_still()
        .map_err(|e| e.to_string())?;
    let image = frame.to_image().map_err(|e| e.to_string())?;
    let prediction = classifier.classify(&image).map_err(|e| e.to_string())?;

    let preview = PreviewFrame {
        width: frame.width,
        height: frame.height,
        rgba: frame.to_rgba(),
    };
    Ok((prediction, preview))
}

#[cfg(not(target_os = "linux"))]
fn capture_and_classify(
    _classifier: &SignClassifier,
    _device: &str,
) -> Result<(Prediction, PreviewFrame), String> {
    Err("Camera capture is only supported on Linux".to_string())
}

fn classify_file(
    classifier: &SignClassifier,
    path: &Path,
) -> Result<(Prediction, PreviewFrame), String> {
    let image = image::ImageReader::open(path)
        .map_err(|e| e.to_string())?
        .decode()
        .map_err(|e| format!("Failed to decode image: {e}"))?;
    let prediction = classifier.classify(&image).map_err(|e| e.to_string())?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let preview = PreviewFrame {
        width,
        height,
        rgba: rgba.into_raw(),
    };
    Ok((prediction, preview))
}
