//! ResNet-10 SSD face detector using ONNX Runtime via `ort`.
//!
//! Builds the mean-subtracted BGR blob the Caffe-trained network expects,
//! runs inference, and decodes the `[1, 1, N, 7]` detection tensor.

use std::path::{Path, PathBuf};

use crate::detection::domain::detection::Detection;
use crate::detection::domain::face_detector::FaceDetector;
use crate::imaging::infrastructure::bilinear_resize::resize_bilinear;
use crate::shared::constants::{
    DETECTION_ROW_LEN, DETECTOR_INPUT_SIZE, DETECTOR_MEAN_BGR, DETECTOR_MODEL_NAME,
};
use crate::shared::error::MaskError;
use crate::shared::frame::Frame;

const STAGE: &str = "face detector";

/// SSD face detector backed by an ONNX Runtime session.
pub struct OnnxSsdDetector {
    session: ort::session::Session,
    input_size: u32,
}

impl OnnxSsdDetector {
    /// Load the detector graph from a model directory.
    ///
    /// The directory must contain [`DETECTOR_MODEL_NAME`].
    pub fn from_dir(face_dir: &Path) -> Result<Self, MaskError> {
        Self::new(&model_path(face_dir))
    }

    pub fn new(model_path: &Path) -> Result<Self, MaskError> {
        if !model_path.is_file() {
            return Err(MaskError::model_load(model_path, "file does not exist"));
        }

        let session = ort::session::Session::builder()
            .map_err(|e| MaskError::model_load(model_path, e))?
            .commit_from_file(model_path)
            .map_err(|e| MaskError::model_load(model_path, e))?;
        log::info!("Loaded face detector from {}", model_path.display());

        Ok(Self {
            session,
            input_size: DETECTOR_INPUT_SIZE,
        })
    }
}

impl FaceDetector for OnnxSsdDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, MaskError> {
        let blob = build_blob(frame, self.input_size)?;

        let input_value =
            ort::value::Tensor::from_array(blob).map_err(|e| MaskError::inference(STAGE, e))?;
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
        let shape = tensor.shape();
        if shape.last() != Some(&DETECTION_ROW_LEN) {
            return Err(MaskError::inference(
                STAGE,
                format!("unexpected output shape {shape:?}"),
            ));
        }
        let data: Vec<f32> = tensor.iter().copied().collect();

        let detections = parse_detections(&data)?;
        log::debug!("Detector produced {} candidates", detections.len());
        Ok(detections)
    }
}

pub fn model_path(face_dir: &Path) -> PathBuf {
    face_dir.join(DETECTOR_MODEL_NAME)
}

// ---------------------------------------------------------------------------
// Preprocessing
// ---------------------------------------------------------------------------

/// Resize a frame to `size` × `size` and build an NCHW blob in BGR order
/// with the per-channel training means subtracted.
fn build_blob(frame: &Frame, size: u32) -> Result<ndarray::Array4<f32>, MaskError> {
    let resized = resize_bilinear(&frame.to_rgb_image(), size, size, STAGE)?;

    let s = size as usize;
    let mut tensor = ndarray::Array4::<f32>::zeros((1, 3, s, s));
    for (x, y, pixel) in resized.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let (x, y) = (x as usize, y as usize);
        tensor[[0, 0, y, x]] = b as f32 - DETECTOR_MEAN_BGR[0];
        tensor[[0, 1, y, x]] = g as f32 - DETECTOR_MEAN_BGR[1];
        tensor[[0, 2, y, x]] = r as f32 - DETECTOR_MEAN_BGR[2];
    }
    Ok(tensor)
}

// ---------------------------------------------------------------------------
// Postprocessing
// ---------------------------------------------------------------------------

/// Decode flattened SSD rows: `[batch, class, confidence, x1, y1, x2, y2]`.
fn parse_detections(data: &[f32]) -> Result<Vec<Detection>, MaskError> {
    if data.len() % DETECTION_ROW_LEN != 0 {
        return Err(MaskError::inference(
            STAGE,
            format!(
                "output length {} is not a multiple of {DETECTION_ROW_LEN}",
                data.len()
            ),
        ));
    }

    Ok(data
        .chunks_exact(DETECTION_ROW_LEN)
        .map(|row| Detection::new(row[2], [row[3], row[4], row[5], row[6]]))
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
