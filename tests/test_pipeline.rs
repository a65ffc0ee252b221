mod common;

use common::fixtures;
use handsign::camera::{FrameSource, StillFrame};
use handsign::classify::{postprocess, preprocessing};
use handsign::{BackgroundTask, LabelSet};
use rten_tensor::prelude::*;

/// Canned frame source standing in for the camera capability.
struct StubCamera {
    frame: Option<StillFrame>,
}

impl StubCamera {
    fn with_solid_frame(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgb);
        }
        Self {
            frame: Some(StillFrame {
                width,
                height,
                pixels,
            }),
        }
    }

    fn failing() -> Self {
        Self { frame: None }
    }
}

impl FrameSource for StubCamera {
    fn capture_still(&mut self) -> anyhow::Result<StillFrame> {
        self.frame
            .take()
            .ok_or_else(|| anyhow::anyhow!("Photo capture failed"))
    }
}

#[test]
fn captured_frame_flows_into_the_model_input() -> anyhow::Result<()> {
    let mut camera = StubCamera::with_solid_frame(640, 480, [0, 255, 0]);

    let frame = camera.capture_still()?;
    let img = frame.to_image()?;
    let tensor = preprocessing::prepare_input(&img);

    assert_eq!(tensor.shape(), [1, 3, 224, 224]);
    // Green frame: G channel saturated, R and B dark
    assert_eq!(tensor[[0, 1, 100, 100]], 1.0);
    assert_eq!(tensor[[0, 0, 100, 100]], 0.0);
    Ok(())
}

#[test]
fn capture_failure_surfaces_as_an_error() {
    let mut camera = StubCamera::failing();
    let err = camera.capture_still().unwrap_err();
    assert!(err.to_string().contains("capture failed"));
}

#[test]
fn selected_index_maps_to_the_displayed_label() -> anyhow::Result<()> {
    let file = fixtures::create_label_file(&["A", "B", "C", "D"]);
    let labels = LabelSet::load(file.path())?;

    let scores = vec![0.05, 0.1, 0.8, 0.05];
    let (index, score) = postprocess::top_class(&scores).expect("non-empty scores");

    assert_eq!(labels.get(index), Some("C"));
    assert_eq!(postprocess::format_confidence(score), "80.0%");
    Ok(())
}

#[test]
fn winning_index_beyond_label_list_fails_gracefully() -> anyhow::Result<()> {
    let file = fixtures::create_label_file(&["only"]);
    let labels = LabelSet::load(file.path())?;

    let scores = vec![0.2, 0.8];
    let (index, _) = postprocess::top_class(&scores).expect("non-empty scores");

    // A model/label mismatch must not panic; the lookup just reports no label
    assert_eq!(labels.get(index), None);
    Ok(())
}

#[test]
fn background_capture_hands_the_result_back_once() -> anyhow::Result<()> {
    let task = BackgroundTask::spawn(|| {
        let mut camera = StubCamera::with_solid_frame(8, 8, [1, 2, 3]);
        let frame = camera.capture_still()?;
        Ok(frame.width * frame.height)
    });

    assert_eq!(task.wait()?, 64);
    Ok(())
}

#[test]
fn background_capture_error_reaches_the_caller() {
    let task = BackgroundTask::spawn(|| {
        let mut camera = StubCamera::failing();
        camera.capture_still().map(|frame| frame.width)
    });

    assert!(task.wait().is_err());
}
