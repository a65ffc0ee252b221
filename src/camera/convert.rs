//! Pixel format conversion for raw camera buffers.

use anyhow::Result;

/// Convert YUYV (YUV 4:2:2) to packed RGB.
///
/// YUYV format: Y0 U0 Y1 V0 - each 4-byte group encodes 2 pixels.
/// Uses BT.601 coefficients for YUV to RGB conversion.
pub fn yuyv_to_rgb(data: &[u8], width: u32, height: u32) -> Vec<u8> {
    let pixel_count = (width * height) as usize;
    let mut rgb = Vec::with_capacity(pixel_count * 3);

    for chunk in data.chunks_exact(4) {
        let y0 = chunk[0] as f32;
        let u = chunk[1] as f32 - 128.0;
        let y1 = chunk[2] as f32;
        let v = chunk[3] as f32 - 128.0;

        for y in [y0, y1] {
            let r = (y + 1.402 * v).clamp(0.0, 255.0) as u8;
            let g = (y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8;
            let b = (y + 1.772 * u).clamp(0.0, 255.0) as u8;

            rgb.push(r);
            rgb.push(g);
            rgb.push(b);

            if rgb.len() >= pixel_count * 3 {
                return rgb;
            }
        }
    }

    rgb
}

/// Decode an MJPG camera buffer (one JPEG per frame) to packed RGB.
pub fn mjpg_to_rgb(data: &[u8]) -> Result<(u32, u32, Vec<u8>)> {
    let decoded = image::load_from_memory_with_format(data, image::ImageFormat::Jpeg)
        .map_err(|e| anyhow::anyhow!("Failed to decode MJPG frame: {}", e))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((width, height, rgb.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_chroma_is_grayscale() {
        // Y=128, U=V=128 should come out as mid gray on both pixels
        let data = [128u8, 128, 128, 128];
        let rgb = yuyv_to_rgb(&data, 2, 1);
        assert_eq!(rgb, vec![128, 128, 128, 128, 128, 128]);
    }

    #[test]
    fn full_luma_is_white() {
        let data = [255u8, 128, 255, 128];
        let rgb = yuyv_to_rgb(&data, 2, 1);
        assert_eq!(rgb, vec![255, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn chroma_channels_shift_color() {
        // High V pushes red up on both pixels of the pair
        let data = [128u8, 128, 128, 255];
        let rgb = yuyv_to_rgb(&data, 2, 1);
        assert!(rgb[0] > 200); // R
        assert!(rgb[2] == 128); // B untouched by V
    }

    #[test]
    fn output_is_clamped_to_frame_size() {
        // Odd width: the second luma sample of the last pair is discarded
        let data = [100u8, 128, 200, 128, 100, 128, 200, 128];
        let rgb = yuyv_to_rgb(&data, 3, 1);
        assert_eq!(rgb.len(), 9);
    }

    #[test]
    fn invalid_mjpg_is_an_error() {
        assert!(mjpg_to_rgb(&[0u8, 1, 2, 3]).is_err());
    }

    #[test]
    fn mjpg_round_trip_preserves_dimensions() -> anyhow::Result<()> {
        let img = image::RgbImage::from_pixel(32, 24, image::Rgb([200, 10, 10]));
        let mut jpeg = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img).write_to(&mut jpeg, image::ImageFormat::Jpeg)?;

        let (width, height, rgb) = mjpg_to_rgb(jpeg.get_ref())?;
        assert_eq!((width, height), (32, 24));
        assert_eq!(rgb.len(), 32 * 24 * 3);
        Ok(())
    }
}
