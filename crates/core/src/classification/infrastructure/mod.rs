pub mod face_preprocessor;
pub mod onnx_mask_classifier;
