use image::Rgb;
use imageproc::rect::Rect;

use crate::rendering::domain::face_annotation::FaceAnnotation;
use crate::rendering::domain::frame_annotator::FrameAnnotator;
use crate::shared::constants::{BOX_THICKNESS, LABEL_OFFSET};
use crate::shared::frame::Frame;

use super::bitmap_font;

/// Default glyph scale; 7px glyphs become 21px tall.
const DEFAULT_TEXT_SCALE: u32 = 3;

/// Draws the box outline and the label text on the CPU.
///
/// The box covers `(start_x, start_y)` to `(end_x, end_y)` inclusive, with
/// extra thickness growing inward. The label sits `LABEL_OFFSET` pixels
/// above the box's top edge.
pub struct CpuFrameAnnotator {
    thickness: u32,
    text_scale: u32,
}

impl CpuFrameAnnotator {
    pub fn new(thickness: u32, text_scale: u32) -> Self {
        Self {
            thickness: thickness.max(1),
            text_scale: text_scale.max(1),
        }
    }
}

impl Default for CpuFrameAnnotator {
    fn default() -> Self {
        Self::new(BOX_THICKNESS, DEFAULT_TEXT_SCALE)
    }
}

impl FrameAnnotator for CpuFrameAnnotator {
    fn annotate(&self, frame: &mut Frame, annotation: &FaceAnnotation) {
        let color = Rgb(annotation.color());
        let bbox = annotation.bbox;
        let mut img = frame.to_rgb_image();

        bitmap_font::draw_text(
            &mut img,
            bbox.start_x,
            bbox.start_y - LABEL_OFFSET,
            &annotation.text(),
            color,
            self.text_scale,
        );

        for inset in 0..self.thickness as i32 {
            let w = bbox.width() + 1 - 2 * inset;
            let h = bbox.height() + 1 - 2 * inset;
            if w <= 0 || h <= 0 {
                break;
            }
            let rect =
                Rect::at(bbox.start_x + inset, bbox.start_y + inset).of_size(w as u32, h as u32);
            imageproc::drawing::draw_hollow_rect_mut(&mut img, rect, color);
        }

        *frame = Frame::from_rgb_image(img);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::domain::mask_prediction::MaskPrediction;
    use crate::shared::bounding_box::BoundingBox;

    const GRAY: [u8; 3] = [128, 128, 128];

    fn annotation(bbox: BoundingBox, mask: f32) -> FaceAnnotation {
        FaceAnnotation {
            bbox,
            detection_confidence: 0.92,
            prediction: MaskPrediction::from_scores(mask, 1.0 - mask),
        }
    }

    fn pixel(frame: &Frame, x: usize, y: usize) -> [u8; 3] {
        let arr = frame.as_ndarray();
        [arr[[y, x, 0]], arr[[y, x, 1]], arr[[y, x, 2]]]
    }

    #[test]
    fn test_draws_no_mask_box_in_red() {
        let mut frame = Frame::filled(200, 200, GRAY);
        let a = annotation(BoundingBox::new(50, 60, 150, 180), 0.1);
        CpuFrameAnnotator::default().annotate(&mut frame, &a);

        assert_eq!(pixel(&frame, 50, 60), [255, 0, 0]);
        assert_eq!(pixel(&frame, 150, 180), [255, 0, 0]);
        assert_eq!(pixel(&frame, 51, 100), [255, 0, 0]); // second ring
        assert_eq!(pixel(&frame, 52, 100), GRAY); // interior untouched
        assert_eq!(pixel(&frame, 151, 100), GRAY); // outside untouched
    }

    #[test]
    fn test_draws_with_mask_box_in_green() {
        let mut frame = Frame::filled(100, 100, GRAY);
        let a = annotation(BoundingBox::new(10, 40, 60, 90), 0.95);
        CpuFrameAnnotator::default().annotate(&mut frame, &a);
        assert_eq!(pixel(&frame, 10, 40), [0, 190, 0]);
    }

    #[test]
    fn test_label_drawn_above_box() {
        let mut frame = Frame::filled(300, 200, GRAY);
        let a = annotation(BoundingBox::new(20, 100, 120, 190), 0.1);
        CpuFrameAnnotator::default().annotate(&mut frame, &a);

        let text_rows = 100 - LABEL_OFFSET as usize - 21..100 - LABEL_OFFSET as usize;
        let lit = text_rows
            .flat_map(|y| (20..300).map(move |x| (x, y)))
            .filter(|&(x, y)| pixel(&frame, x, y) == [255, 0, 0])
            .count();
        assert!(lit > 0);
        // Gap between the label and the box stays clear
        assert_eq!(pixel(&frame, 22, 95), GRAY);
    }

    #[test]
    fn test_box_at_top_edge_clips_label() {
        let mut frame = Frame::filled(100, 100, GRAY);
        let a = annotation(BoundingBox::new(0, 0, 99, 99), 0.1);
        CpuFrameAnnotator::default().annotate(&mut frame, &a);
        assert_eq!(pixel(&frame, 0, 0), [255, 0, 0]);
        assert_eq!(pixel(&frame, 99, 99), [255, 0, 0]);
        assert_eq!(frame.width(), 100);
    }

    #[test]
    fn test_thin_box_does_not_panic() {
        let mut frame = Frame::filled(50, 50, GRAY);
        let a = annotation(BoundingBox::new(10, 10, 11, 30), 0.1);
        CpuFrameAnnotator::new(4, 1).annotate(&mut frame, &a);
        assert_eq!(pixel(&frame, 10, 10), [255, 0, 0]);
    }
}
