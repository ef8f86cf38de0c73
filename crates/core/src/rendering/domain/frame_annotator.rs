use crate::rendering::domain::face_annotation::FaceAnnotation;
use crate::shared::frame::Frame;

/// Draws a face's label and box onto a frame in place.
///
/// Anything falling outside the frame is clipped; drawing never fails.
pub trait FrameAnnotator {
    fn annotate(&self, frame: &mut Frame, annotation: &FaceAnnotation);
}
