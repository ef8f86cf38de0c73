//! MobileNetV2 mask classifier using ONNX Runtime via `ort`.

use std::path::Path;

use crate::classification::domain::face_crop::FaceCrop;
use crate::classification::domain::mask_classifier::MaskClassifier;
use crate::classification::domain::mask_prediction::MaskPrediction;
use crate::shared::error::MaskError;

const STAGE: &str = "mask classifier";

/// Mask classifier backed by an ONNX Runtime session.
///
/// Expects an NHWC `[1, 224, 224, 3]` input and a `[1, 2]` output ordered
/// `(mask, without_mask)`.
pub struct OnnxMaskClassifier {
    session: ort::session::Session,
}

impl OnnxMaskClassifier {
    pub fn new(model_path: &Path) -> Result<Self, MaskError> {
        if !model_path.is_file() {
            return Err(MaskError::model_load(model_path, "file does not exist"));
        }

        let session = ort::session::Session::builder()
            .map_err(|e| MaskError::model_load(model_path, e))?
            .commit_from_file(model_path)
            .map_err(|e| MaskError::model_load(model_path, e))?;
        log::info!("Loaded mask classifier from {}", model_path.display());

        Ok(Self { session })
    }
}

impl MaskClassifier for OnnxMaskClassifier {
    fn classify(&mut self, crop: &FaceCrop) -> Result<MaskPrediction, MaskError> {
        let input_value = ort::value::Tensor::from_array(crop.tensor().clone())
            .map_err(|e| MaskError::inference(STAGE, e))?;
        let outputs = self
            .session
            .run(ort::inputs![input_value])
            .map_err(|e| MaskError::inference(STAGE, e))?;
        if outputs.len() == 0 {
            return Err(MaskError::inference(STAGE, "model produced no outputs"));
        }

        let tensor = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| MaskError::inference(STAGE, e))?;
        let scores: Vec<f32> = tensor.iter().copied().collect();
        prediction_from_output(&scores)
    }
}

fn prediction_from_output(scores: &[f32]) -> Result<MaskPrediction, MaskError> {
    if let Some(bad) = scores.iter().find(|v| !v.is_finite()) {
        return Err(MaskError::inference(STAGE, format!("non-finite score {bad}")));
    }
    match scores {
        [mask, without_mask] => Ok(MaskPrediction::from_scores(*mask, *without_mask)),
        _ => Err(MaskError::inference(
            STAGE,
            format!("expected 2 scores, got {}", scores.len()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_prediction_from_two_scores() {
        let p = prediction_from_output(&[0.1, 0.9]).unwrap();
        assert_relative_eq!(p.without_mask, 0.9, epsilon = 1e-6);
    }

    #[test]
    fn test_wrong_score_count_is_inference_error() {
        assert!(matches!(
            prediction_from_output(&[0.1, 0.2, 0.7]),
            Err(MaskError::Inference { .. })
        ));
        assert!(matches!(
            prediction_from_output(&[]),
            Err(MaskError::Inference { .. })
        ));
    }

    #[rstest]
    #[case::nan(&[f32::NAN, 0.5])]
    #[case::pos_inf(&[f32::INFINITY, 0.0])]
    #[case::neg_inf(&[0.2, f32::NEG_INFINITY])]
    fn test_non_finite_scores_are_inference_error(#[case] scores: &[f32]) {
        assert!(matches!(
            prediction_from_output(scores),
            Err(MaskError::Inference { .. })
        ));
    }

    #[test]
    fn test_missing_model_is_model_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = OnnxMaskClassifier::new(&dir.path().join("mask_detector.model"))
            .err()
            .unwrap();
        assert!(matches!(err, MaskError::ModelLoad { .. }));
    }

    #[test]
    fn test_corrupt_model_is_model_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask_detector.model");
        std::fs::write(&path, b"\x00\x01 keras weights? no").unwrap();
        let err = OnnxMaskClassifier::new(&path).err().unwrap();
        assert!(matches!(err, MaskError::ModelLoad { .. }));
    }
}
