//! Still-frame capture from a V4L2 device.
//!
//! The device is opened per capture request: the app only ever needs one
//! frame at a time, so there is no long-lived camera session to manage.

use anyhow::Result;
use v4l::FourCC;
use v4l::buffer::Type;
use v4l::io::traits::CaptureStream;
use v4l::prelude::*;
use v4l::video::Capture;

use super::{FrameSource, StillFrame, convert};

/// Frames discarded before the one that is kept. The first frames from a
/// freshly opened device are often dark while auto-exposure settles.
const WARMUP_FRAMES: usize = 3;

/// Capture attempts before giving up on a device that keeps returning
/// truncated buffers.
const MAX_ATTEMPTS: usize = 10;

pub struct V4l2Source {
    device_path: String,
}

impl V4l2Source {
    pub fn new(device_path: impl Into<String>) -> Self {
        Self {
            device_path: device_path.into(),
        }
    }
}

impl FrameSource for V4l2Source {
    fn capture_still(&mut self) -> Result<StillFrame> {
        let mut dev = Device::with_path(&self.device_path)
            .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", self.device_path, e))?;

        let mut format = dev
            .format()
            .map_err(|e| anyhow::anyhow!("Failed to query format: {}", e))?;

        // Prefer YUYV so the conversion path stays on the CPU-friendly route;
        // fall back to whatever the device reports if it refuses.
        format.fourcc = FourCC::new(b"YUYV");
        let format = match dev.set_format(&format) {
            Ok(applied) => applied,
            Err(_) => dev
                .format()
                .map_err(|e| anyhow::anyhow!("Failed to query format: {}", e))?,
        };

        let width = format.width;
        let height = format.height;
        let fourcc = format.fourcc;

        let mut stream = MmapStream::with_buffers(&mut dev, Type::VideoCapture, 4)
            .map_err(|e| anyhow::anyhow!("Failed to start capture stream: {}", e))?;

        for _ in 0..WARMUP_FRAMES {
            let _ = stream.next();
        }

        for _ in 0..MAX_ATTEMPTS {
            let (buf, _meta) = stream
                .next()
                .map_err(|e| anyhow::anyhow!("Photo capture failed: {}", e))?;

            match decode_buffer(buf, width, height, fourcc) {
                Ok(Some(frame)) => return Ok(frame),
                // Truncated buffer; grab the next frame
                Ok(None) => continue,
                Err(e) => return Err(e),
            }
        }

        anyhow::bail!(
            "Device {} kept returning truncated frames",
            self.device_path
        )
    }
}

/// Decode one raw buffer into an RGB frame.
///
/// Returns Ok(None) when the buffer is smaller than the negotiated frame
/// size, which V4L2 devices occasionally produce right after streamon.
fn decode_buffer(buf: &[u8], width: u32, height: u32, fourcc: FourCC) -> Result<Option<StillFrame>> {
    match &fourcc.repr {
        b"YUYV" => {
            let expected = (width * height * 2) as usize;
            if buf.len() < expected {
                return Ok(None);
            }
            Ok(Some(StillFrame {
                width,
                height,
                pixels: convert::yuyv_to_rgb(&buf[..expected], width, height),
            }))
        }
        b"MJPG" => {
            let (width, height, pixels) = convert::mjpg_to_rgb(buf)?;
            Ok(Some(StillFrame {
                width,
                height,
                pixels,
            }))
        }
        b"RGB3" => {
            let expected = (width * height * 3) as usize;
            if buf.len() < expected {
                return Ok(None);
            }
            Ok(Some(StillFrame {
                width,
                height,
                pixels: buf[..expected].to_vec(),
            }))
        }
        other => anyhow::bail!(
            "Unsupported camera pixel format: {}",
            String::from_utf8_lossy(other)
        ),
    }
}
