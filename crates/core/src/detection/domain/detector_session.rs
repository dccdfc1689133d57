use crate::expression::domain::face_signals::FaceSignals;
use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;

use super::face_detector::FaceDetector;

/// Scopes a detector to one request: `release` runs when the session drops,
/// on success, early return, and error paths alike.
pub struct DetectorSession<'a> {
    detector: &'a mut dyn FaceDetector,
}

impl<'a> DetectorSession<'a> {
    pub fn open(detector: &'a mut dyn FaceDetector) -> Self {
        Self { detector }
    }

    pub fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceSignals>, EmojifyError> {
        self.detector.detect(frame)
    }
}

impl Drop for DetectorSession<'_> {
    fn drop(&mut self) {
        self.detector.release();
    }
}
