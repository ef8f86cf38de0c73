pub mod frame_display;
pub mod image_reader;
