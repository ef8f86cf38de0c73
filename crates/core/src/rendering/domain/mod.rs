pub mod face_annotation;
pub mod frame_annotator;
