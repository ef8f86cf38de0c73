use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{DEFAULT_CLASSIFIER_MODEL, DEFAULT_CONFIDENCE, DEFAULT_FACE_DIR};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("confidence must be between 0.0 and 1.0, got {0}")]
    ConfidenceOutOfRange(f64),
}

/// Everything one classification run needs, passed explicitly to each stage.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskConfig {
    pub image: PathBuf,
    pub face_dir: PathBuf,
    pub model: PathBuf,
    pub confidence: f64,
}

impl MaskConfig {
    /// Config for `image` with every other setting at its default.
    pub fn new(image: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            face_dir: PathBuf::from(DEFAULT_FACE_DIR),
            model: PathBuf::from(DEFAULT_CLASSIFIER_MODEL),
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ConfigError::ConfidenceOutOfRange(self.confidence));
        }
        Ok(())
    }

    pub fn classifier_model_path(&self) -> &Path {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let config = MaskConfig::new("people.jpg");
        assert_eq!(config.image, PathBuf::from("people.jpg"));
        assert_eq!(config.face_dir, PathBuf::from("face_detector"));
        assert_eq!(config.model, PathBuf::from("mask_detector.model"));
        assert_eq!(config.confidence, 0.5);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(1.0)]
    fn test_valid_confidence(#[case] confidence: f64) {
        let config = MaskConfig {
            confidence,
            ..MaskConfig::new("a.jpg")
        };
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn test_invalid_confidence(#[case] confidence: f64) {
        let config = MaskConfig {
            confidence,
            ..MaskConfig::new("a.jpg")
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ConfidenceOutOfRange(_))
        ));
    }
}
