use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;
use crate::shared::region::FaceRegion;

/// Domain interface for drawing an overlay over a face.
///
/// Implementations never mutate their inputs: the result is a new frame
/// with the background's dimensions and pixel format.
pub trait OverlayCompositor: Send {
    fn composite(
        &self,
        background: &Frame,
        overlay: &Frame,
        face_region: &FaceRegion,
    ) -> Result<Frame, EmojifyError>;
}
