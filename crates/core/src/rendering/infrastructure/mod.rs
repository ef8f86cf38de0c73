pub mod bitmap_font;
pub mod cpu_frame_annotator;
