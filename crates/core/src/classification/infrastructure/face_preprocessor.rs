use ndarray::{s, Array4};

use crate::classification::domain::face_crop::FaceCrop;
use crate::imaging::infrastructure::bilinear_resize::resize_bilinear;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::constants::CLASSIFIER_INPUT_SIZE;
use crate::shared::error::MaskError;
use crate::shared::frame::Frame;

/// Turns a face box into classifier input.
///
/// Crops `[start_y, end_y) x [start_x, end_x)`, resizes bilinearly to a
/// square, and maps each channel value `v` to `v / 127.5 - 1` (MobileNetV2
/// input range). Frames are already RGB, which is what the classifier was
/// trained on.
pub struct FacePreprocessor {
    size: u32,
}

impl FacePreprocessor {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn preprocess(&self, frame: &Frame, bbox: &BoundingBox) -> Result<FaceCrop, MaskError> {
        let x0 = bbox.start_x.clamp(0, frame.width() as i32) as usize;
        let y0 = bbox.start_y.clamp(0, frame.height() as i32) as usize;
        let x1 = bbox.end_x.clamp(0, frame.width() as i32) as usize;
        let y1 = bbox.end_y.clamp(0, frame.height() as i32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return Err(MaskError::Crop { bbox: *bbox });
        }

        let roi: Vec<u8> = frame
            .as_ndarray()
            .slice(s![y0..y1, x0..x1, ..])
            .iter()
            .copied()
            .collect();
        let roi = image::RgbImage::from_raw((x1 - x0) as u32, (y1 - y0) as u32, roi)
            .ok_or(MaskError::Crop { bbox: *bbox })?;

        let resized = resize_bilinear(&roi, self.size, self.size, "face preprocessor")?;

        let s = self.size as usize;
        let mut tensor = Array4::<f32>::zeros((1, s, s, 3));
        for (x, y, pixel) in resized.enumerate_pixels() {
            for (c, &v) in pixel.0.iter().enumerate() {
                tensor[[0, y as usize, x as usize, c]] = v as f32 / 127.5 - 1.0;
            }
        }
        Ok(FaceCrop::new(tensor))
    }
}

impl Default for FacePreprocessor {
    fn default() -> Self {
        Self::new(CLASSIFIER_INPUT_SIZE)
    }
}
