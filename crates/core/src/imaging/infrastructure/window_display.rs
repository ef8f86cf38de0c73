use crate::imaging::domain::frame_display::FrameDisplay;
use crate::shared::error::MaskError;
use crate::shared::frame::Frame;

const TARGET_FPS: usize = 30;

/// Shows a frame in a native window until a key is pressed or the window
/// is closed.
pub struct WindowDisplay {
    title: String,
}

impl WindowDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl FrameDisplay for WindowDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), MaskError> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let buffer = to_rgb32(frame);

        let mut window = minifb::Window::new(
            &self.title,
            width,
            height,
            minifb::WindowOptions {
                resize: true,
                ..minifb::WindowOptions::default()
            },
        )
        .map_err(|e| MaskError::Display(format!("failed to create window: {e}")))?;
        window.set_target_fps(TARGET_FPS);

        while window.is_open() && window.get_keys_pressed(minifb::KeyRepeat::No).is_empty() {
            window
                .update_with_buffer(&buffer, width, height)
                .map_err(|e| MaskError::Display(e.to_string()))?;
        }
        Ok(())
    }
}

/// Packs RGB8 pixels into the `0RGB` words minifb expects.
fn to_rgb32(frame: &Frame) -> Vec<u32> {
    let channels = frame.channels() as usize;
    frame
        .data()
        .chunks_exact(channels)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}
