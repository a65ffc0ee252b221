use std::sync::Arc;

use crate::SignClassifier;

/// Screen state: the loaded classifier plus the three UI slots (preview,
/// label line, confidence line).
pub struct AppState {
    pub classifier: Option<Arc<SignClassifier>>,
    pub device_path: String,
    pub busy: bool,
    pub preview: Option<iced::widget::image::Handle>,
    pub result_text: String,
    pub confidence_text: String,
}

impl AppState {
    pub fn ready(classifier: Arc<SignClassifier>, device_path: String) -> Self {
        Self {
            classifier: Some(classifier),
            device_path,
            busy: false,
            preview: None,
            result_text: "Ready".to_string(),
            confidence_text: "Capture a sign to classify it".to_string(),
        }
    }

    /// State when the model or label artifacts could not be loaded. The
    /// screen stays up with a static fallback message.
    pub fn load_failed(device_path: String) -> Self {
        Self {
            classifier: None,
            device_path,
            busy: false,
            preview: None,
            result_text: "Failed to load model".to_string(),
            confidence_text: "Please try again later".to_string(),
        }
    }
}
