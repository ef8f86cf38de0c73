pub mod bilinear_resize;
pub mod image_file_reader;
pub mod window_display;
