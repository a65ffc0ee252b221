use image::{ImageBuffer, Rgb};
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a red test image of the given size and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image(width: u32, height: u32) -> NamedTempFile {
    let img = ImageBuffer::from_fn(width, height, |_, _| Rgb([255u8, 0u8, 0u8]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Writes the given names as a newline-delimited label file.
pub fn create_label_file(names: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp label file");
    for name in names {
        writeln!(file, "{}", name).expect("Failed to write label");
    }
    file.flush().expect("Failed to flush label file");
    file
}

/// The label set shipped with the app: A-Z plus the three control classes.
pub fn asl_label_names() -> Vec<String> {
    let mut names: Vec<String> = ('A'..='Z').map(|c| c.to_string()).collect();
    names.extend(["del", "nothing", "space"].map(String::from));
    names
}
