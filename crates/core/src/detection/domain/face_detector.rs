use crate::detection::domain::detection::Detection;
use crate::shared::error::MaskError;
use crate::shared::frame::Frame;

/// Domain interface for face detection.
///
/// Returns every candidate the model produced; thresholding is the region
/// filter's job. `&mut self` because inference sessions need exclusive
/// access while running.
pub trait FaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, MaskError>;
}
