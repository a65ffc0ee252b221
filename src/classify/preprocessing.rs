use image::{DynamicImage, RgbImage};
use rten_tensor::NdTensor;

/// Model input is a fixed 224x224 RGB frame.
pub const INPUT_SIZE: u32 = 224;

/// Resize an image to the model input size.
///
/// The aspect ratio is not preserved; the model was trained on full-frame
/// 224x224 crops, so the whole capture is squashed into the input square.
pub fn resize_for_model(img: &DynamicImage) -> RgbImage {
    let rgb = img.to_rgb8();
    if rgb.dimensions() == (INPUT_SIZE, INPUT_SIZE) {
        return rgb;
    }
    image::imageops::resize(
        &rgb,
        INPUT_SIZE,
        INPUT_SIZE,
        image::imageops::FilterType::CatmullRom,
    )
}

/// Convert a resized RGB frame into an NCHW float tensor.
///
/// Channel bytes are scaled to [0.0, 1.0], matching the normalization the
/// model was trained with.
pub fn image_to_tensor(img: &RgbImage) -> NdTensor<f32, 4> {
    let (width, height) = img.dimensions();
    let mut tensor = NdTensor::zeros([1, 3, height as usize, width as usize]);

    for (x, y, pixel) in img.enumerate_pixels() {
        for channel in 0..3 {
            tensor[[0, channel, y as usize, x as usize]] = pixel[channel] as f32 / 255.0;
        }
    }

    tensor
}

/// Full preprocessing: resize and normalize in one call.
pub fn prepare_input(img: &DynamicImage) -> NdTensor<f32, 4> {
    image_to_tensor(&resize_for_model(img))
}
