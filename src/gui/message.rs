use std::path::PathBuf;

use crate::models::Prediction;

/// RGBA copy of the classified frame, shown in the preview widget.
#[derive(Debug, Clone)]
pub struct PreviewFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone)]
pub enum Message {
    CapturePressed,
    OpenImagePressed,
    ImagePicked(Option<PathBuf>),
    Classified(Result<(Prediction, PreviewFrame), String>),
}
