use std::fmt;

use crate::shared::constants::{NO_MASK_COLOR, WITH_MASK_COLOR};

/// Tolerance within which raw scores are accepted as probabilities as-is.
const DISTRIBUTION_TOLERANCE: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskLabel {
    WithMask,
    NoMask,
}

impl MaskLabel {
    /// Overlay color, RGB.
    pub fn color(self) -> [u8; 3] {
        match self {
            MaskLabel::WithMask => WITH_MASK_COLOR,
            MaskLabel::NoMask => NO_MASK_COLOR,
        }
    }
}

impl fmt::Display for MaskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskLabel::WithMask => f.write_str("With Mask"),
            MaskLabel::NoMask => f.write_str("No Mask"),
        }
    }
}

/// Two-way classifier output. `mask + without_mask == 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskPrediction {
    pub mask: f32,
    pub without_mask: f32,
}

impl MaskPrediction {
    /// Builds a prediction from raw classifier scores.
    ///
    /// Scores that already form a distribution are renormalized to remove
    /// rounding drift; anything else is treated as logits and passed
    /// through softmax.
    pub fn from_scores(mask: f32, without_mask: f32) -> Self {
        let sum = mask + without_mask;
        let is_distribution = mask >= 0.0
            && without_mask >= 0.0
            && (sum - 1.0).abs() <= DISTRIBUTION_TOLERANCE;

        if is_distribution {
            Self {
                mask: mask / sum,
                without_mask: without_mask / sum,
            }
        } else {
            let [mask, without_mask] = softmax([mask, without_mask]);
            Self { mask, without_mask }
        }
    }

    /// Ties go to `NoMask`.
    pub fn label(&self) -> MaskLabel {
        if self.mask > self.without_mask {
            MaskLabel::WithMask
        } else {
            MaskLabel::NoMask
        }
    }

    /// Probability of the winning label.
    pub fn confidence(&self) -> f32 {
        self.mask.max(self.without_mask)
    }

    /// Overlay text, e.g. `"No Mask: 90.00%"`.
    pub fn text(&self) -> String {
        format!("{}: {:.2}%", self.label(), self.confidence() as f64 * 100.0)
    }
}

fn softmax(scores: [f32; 2]) -> [f32; 2] {
    let max = scores[0].max(scores[1]);
    let e0 = (scores[0] - max).exp();
    let e1 = (scores[1] - max).exp();
    let sum = e0 + e1;
    [e0 / sum, e1 / sum]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_no_mask_text_and_color() {
        let p = MaskPrediction::from_scores(0.10, 0.90);
        assert_eq!(p.label(), MaskLabel::NoMask);
        assert_eq!(p.text(), "No Mask: 90.00%");
        assert_eq!(p.label().color(), [255, 0, 0]);
    }

    #[test]
    fn test_with_mask_text_and_color() {
        let p = MaskPrediction::from_scores(0.9876, 0.0124);
        assert_eq!(p.label(), MaskLabel::WithMask);
        assert_eq!(p.text(), "With Mask: 98.76%");
        assert_eq!(p.label().color(), [0, 190, 0]);
    }

    #[test]
    fn test_tie_is_no_mask() {
        assert_eq!(MaskPrediction::from_scores(0.5, 0.5).label(), MaskLabel::NoMask);
    }

    #[test]
    fn test_distribution_kept() {
        let p = MaskPrediction::from_scores(0.3, 0.7);
        assert_relative_eq!(p.mask, 0.3, epsilon = 1e-6);
        assert_relative_eq!(p.without_mask, 0.7, epsilon = 1e-6);
    }

    #[test]
    fn test_logits_go_through_softmax() {
        let p = MaskPrediction::from_scores(2.0, 0.0);
        let expected = 1.0 / (1.0 + (-2.0f32).exp());
        assert_relative_eq!(p.mask, expected, epsilon = 1e-6);
        assert_eq!(p.label(), MaskLabel::WithMask);
    }

    #[rstest]
    #[case(0.10, 0.90)]
    #[case(0.4999, 0.5002)]
    #[case(3.5, -1.25)]
    #[case(-40.0, 60.0)]
    #[case(0.0, 0.0)]
    fn test_probabilities_sum_to_one(#[case] mask: f32, #[case] without_mask: f32) {
        let p = MaskPrediction::from_scores(mask, without_mask);
        assert_relative_eq!(p.mask + p.without_mask, 1.0, epsilon = 1e-4);
        assert!(p.mask >= 0.0 && p.without_mask >= 0.0);
    }

    #[test]
    fn test_confidence_is_max() {
        let p = MaskPrediction::from_scores(0.25, 0.75);
        assert_relative_eq!(p.confidence(), 0.75, epsilon = 1e-6);
    }
}
