use crate::classification::domain::face_crop::FaceCrop;
use crate::classification::domain::mask_prediction::MaskPrediction;
use crate::shared::error::MaskError;

/// Domain interface for the mask / no-mask classifier.
pub trait MaskClassifier {
    fn classify(&mut self, crop: &FaceCrop) -> Result<MaskPrediction, MaskError>;
}
