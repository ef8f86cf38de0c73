use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::error::MaskError;
use crate::shared::frame::Frame;

/// Reads an image file with the `image` crate and converts it to RGB8.
///
/// Any format the crate can sniff from the file contents is accepted;
/// alpha and grayscale inputs are expanded to three channels.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, MaskError> {
        if !path.is_file() {
            return Err(MaskError::load(path, "file does not exist"));
        }

        let decoded = image::ImageReader::open(path)
            .map_err(|e| MaskError::load(path, e))?
            .with_guessed_format()
            .map_err(|e| MaskError::load(path, e))?
            .decode()
            .map_err(|e| MaskError::load(path, e))?;

        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(MaskError::load(path, "image has no pixels"));
        }
        log::debug!("Decoded {} ({width}x{height})", path.display());
        Ok(Frame::new(rgb.into_raw(), width, height, 3))
    }
}
