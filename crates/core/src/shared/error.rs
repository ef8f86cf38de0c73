use std::path::PathBuf;

use thiserror::Error;

use crate::shared::bounding_box::BoundingBox;

/// Failures that can occur while classifying masks in a single image.
///
/// `Crop` is recoverable at the per-face level; everything else aborts the
/// run.
#[derive(Error, Debug)]
pub enum MaskError {
    #[error("failed to load image {path}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("failed to load model {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },
    #[error("cannot crop face at {bbox}: region is empty or outside the image")]
    Crop { bbox: BoundingBox },
    #[error("{stage} inference failed: {reason}")]
    Inference { stage: &'static str, reason: String },
    #[error("display failed: {0}")]
    Display(String),
}

impl MaskError {
    pub(crate) fn load(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::Load {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn model_load(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::ModelLoad {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn inference(stage: &'static str, reason: impl ToString) -> Self {
        Self::Inference {
            stage,
            reason: reason.to_string(),
        }
    }

    /// Whether the pipeline may skip the offending face and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Crop { .. })
    }
}
