use crate::detection::domain::detection::Detection;
use crate::shared::bounding_box::BoundingBox;

/// A detection that passed the threshold, in clamped pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilteredFace {
    pub bbox: BoundingBox,
    pub confidence: f32,
}

/// Result of [`filter_detections`], with rejection counts for reporting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOutcome {
    pub kept: Vec<FilteredFace>,
    pub below_threshold: usize,
    pub degenerate: usize,
}

/// Keeps detections whose confidence is strictly above `threshold` and maps
/// them onto a `width` x `height` image.
///
/// Boxes are denormalized, truncated to integers, and clamped so that
/// `0 <= start` and `end <= dimension - 1`. A box that collapses to zero or
/// negative size after clamping is dropped with a warning. Detector order is
/// preserved.
pub fn filter_detections(
    detections: &[Detection],
    threshold: f64,
    width: u32,
    height: u32,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for det in detections {
        let passes = det.confidence as f64 > threshold;
        if !passes {
            outcome.below_threshold += 1;
            continue;
        }

        let bbox = det.to_pixels(width, height).clamp_to(width, height);
        if bbox.is_degenerate() {
            log::warn!(
                "Skipping face at {bbox} (confidence {:.2}): box is empty after clamping to {width}x{height}",
                det.confidence
            );
            outcome.degenerate += 1;
            continue;
        }

        outcome.kept.push(FilteredFace {
            bbox,
            confidence: det.confidence,
        });
    }

    outcome
}
