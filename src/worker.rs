//! Background execution for classification.
//!
//! One thread is spawned per capture; the result comes back through an mpsc
//! channel so the interactive side can poll or block on it instead of
//! handing out a callback.

use anyhow::Result;
use image::DynamicImage;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::JoinHandle;

use crate::classify::SignClassifier;
use crate::models::Prediction;

/// Handle to a job running on its own thread.
///
/// The result is delivered exactly once; dropping the handle abandons the
/// job (there is no cancellation).
pub struct BackgroundTask<T> {
    receiver: Receiver<Result<T>>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> BackgroundTask<T> {
    /// Spawn a job on a new thread.
    pub fn spawn<F>(job: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let handle = std::thread::spawn(move || {
            // The receiver may already be gone; nothing to do then
            let _ = sender.send(job());
        });

        Self {
            receiver,
            handle: Some(handle),
        }
    }

    /// Non-blocking poll for the result.
    pub fn try_result(&mut self) -> Option<Result<T>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err(anyhow::anyhow!("Worker thread exited without a result")))
            }
        }
    }

    /// Block until the job finishes.
    pub fn wait(mut self) -> Result<T> {
        let result = self
            .receiver
            .recv()
            .map_err(|_| anyhow::anyhow!("Worker thread exited without a result"))?;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        result
    }
}

/// Classify one frame on a background thread.
pub fn classify_in_background(
    classifier: Arc<SignClassifier>,
    image: DynamicImage,
) -> BackgroundTask<Prediction> {
    BackgroundTask::spawn(move || classifier.classify(&image))
}
