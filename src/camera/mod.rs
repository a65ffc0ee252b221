pub mod convert;

#[cfg(target_os = "linux")]
pub mod v4l2;

#[cfg(target_os = "linux")]
pub use v4l2::V4l2Source;

use anyhow::Result;
use image::{DynamicImage, RgbImage};

/// One still frame delivered by a camera capability, as packed RGB bytes.
#[derive(Debug, Clone)]
pub struct StillFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl StillFrame {
    pub fn to_image(&self) -> Result<DynamicImage> {
        let buffer = RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Frame buffer does not match {}x{} RGB dimensions",
                    self.width,
                    self.height
                )
            })?;
        Ok(DynamicImage::ImageRgb8(buffer))
    }

    /// RGBA copy for display surfaces that expect an alpha channel.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for pixel in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(pixel);
            rgba.push(255);
        }
        rgba
    }
}

/// A capability that delivers one still frame per capture request.
pub trait FrameSource {
    fn capture_still(&mut self) -> Result<StillFrame>;
}
