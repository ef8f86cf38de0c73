use std::path::Path;

use crate::shared::error::MaskError;
use crate::shared::frame::Frame;

/// Decodes a still image into an RGB [`Frame`].
pub trait ImageReader {
    fn read(&self, path: &Path) -> Result<Frame, MaskError>;
}
