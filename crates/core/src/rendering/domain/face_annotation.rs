use crate::classification::domain::mask_prediction::{MaskLabel, MaskPrediction};
use crate::shared::bounding_box::BoundingBox;

/// A classified face: where it is, how sure the detector was, and what the
/// classifier said.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceAnnotation {
    pub bbox: BoundingBox,
    pub detection_confidence: f32,
    pub prediction: MaskPrediction,
}

impl FaceAnnotation {
    pub fn label(&self) -> MaskLabel {
        self.prediction.label()
    }

    pub fn text(&self) -> String {
        self.prediction.text()
    }

    pub fn color(&self) -> [u8; 3] {
        self.label().color()
    }
}
