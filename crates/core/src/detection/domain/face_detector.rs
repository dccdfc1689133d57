use crate::expression::domain::face_signals::FaceSignals;
use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;

/// Domain interface for the external face detection engine.
///
/// Returns zero or more faces, each with a bounding region and the three
/// classification probabilities. Implementations may hold native resources,
/// hence `&mut self` and an explicit `release`.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceSignals>, EmojifyError>;

    /// Frees engine resources. Called once at the end of every request.
    fn release(&mut self) {}
}
