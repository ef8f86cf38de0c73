use crate::rendering::domain::face_annotation::FaceAnnotation;

/// What happened to each detector candidate during one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaskReport {
    pub faces: Vec<FaceAnnotation>,
    pub candidates: usize,
    pub below_threshold: usize,
    pub degenerate: usize,
    pub skipped_crops: usize,
}

impl MaskReport {
    /// One line per classified face, in detection order.
    pub fn lines(&self) -> Vec<String> {
        self.faces
            .iter()
            .map(|f| {
                format!(
                    "{} at {} (face confidence {:.2})",
                    f.text(),
                    f.bbox,
                    f.detection_confidence
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::domain::mask_prediction::MaskPrediction;
    use crate::shared::bounding_box::BoundingBox;

    #[test]
    fn test_lines_describe_each_face() {
        let report = MaskReport {
            faces: vec![FaceAnnotation {
                bbox: BoundingBox::new(1, 2, 30, 40),
                detection_confidence: 0.92,
                prediction: MaskPrediction::from_scores(0.1, 0.9),
            }],
            candidates: 1,
            ..MaskReport::default()
        };
        assert_eq!(
            report.lines(),
            vec!["No Mask: 90.00% at (1, 2)-(30, 40) (face confidence 0.92)".to_string()]
        );
    }

    #[test]
    fn test_empty_report_has_no_lines() {
        assert!(MaskReport::default().lines().is_empty());
    }
}
