pub mod camera;
pub mod classify;
pub mod models;
pub mod worker;

pub use classify::SignClassifier;
pub use classify::labels::LabelSet;
pub use models::Prediction;
pub use worker::{BackgroundTask, classify_in_background};

#[cfg(feature = "gui")]
pub mod gui;
