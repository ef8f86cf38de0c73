use crate::shared::error::MaskError;
use crate::shared::frame::Frame;

/// Presents an annotated frame to the user.
///
/// Implementations block until the user dismisses the output.
pub trait FrameDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), MaskError>;
}
