use crate::shared::bounding_box::BoundingBox;

/// A raw face candidate as reported by the detector, before thresholding.
///
/// `bbox` is `[x1, y1, x2, y2]` relative to the image size, so values are
/// nominally in `[0, 1]` but may spill slightly outside for faces cut off
/// by the image border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub confidence: f32,
    pub bbox: [f32; 4],
}

impl Detection {
    pub fn new(confidence: f32, bbox: [f32; 4]) -> Self {
        Self { confidence, bbox }
    }

    /// Unclamped pixel-space box for an image of the given size.
    pub fn to_pixels(&self, width: u32, height: u32) -> BoundingBox {
        BoundingBox::from_normalized(self.bbox, width, height)
    }
}
