use ndarray::Array4;

/// A normalized face ready for classification: NHWC, batch of one.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceCrop {
    tensor: Array4<f32>,
}

impl FaceCrop {
    pub fn new(tensor: Array4<f32>) -> Self {
        debug_assert_eq!(tensor.shape()[0], 1, "face crop must hold a single face");
        debug_assert_eq!(tensor.shape()[3], 3, "face crop must have 3 channels");
        Self { tensor }
    }

    pub fn tensor(&self) -> &Array4<f32> {
        &self.tensor
    }

    pub fn shape(&self) -> &[usize] {
        self.tensor.shape()
    }
}
