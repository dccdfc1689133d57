use crate::shared::constants::{DEFAULT_EYE_OPEN_THRESHOLD, DEFAULT_SMILING_THRESHOLD};

use super::expression_category::ExpressionCategory;
use super::face_signals::FaceSignals;

/// Probability cut-offs used to turn face signals into booleans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierThresholds {
    pub eye_open: f64,
    pub smiling: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            eye_open: DEFAULT_EYE_OPEN_THRESHOLD,
            smiling: DEFAULT_SMILING_THRESHOLD,
        }
    }
}

/// Discrete facial state derived from thresholded probabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpressionState {
    pub left_eye_open: bool,
    pub right_eye_open: bool,
    pub smiling: bool,
}

impl ExpressionState {
    /// The left eye is open at the threshold, the right eye only above it.
    pub fn from_signals(signals: &FaceSignals, thresholds: ClassifierThresholds) -> Self {
        Self {
            left_eye_open: signals.left_eye_open >= thresholds.eye_open,
            right_eye_open: signals.right_eye_open > thresholds.eye_open,
            smiling: signals.smiling > thresholds.smiling,
        }
    }

    pub fn category(&self) -> ExpressionCategory {
        match (self.left_eye_open, self.right_eye_open, self.smiling) {
            (true, true, true) => ExpressionCategory::Smiling,
            (true, true, false) => ExpressionCategory::Frowning,
            (false, true, true) => ExpressionCategory::LeftWink,
            (false, true, false) => ExpressionCategory::LeftWinkFrowning,
            (true, false, true) => ExpressionCategory::RightWink,
            (true, false, false) => ExpressionCategory::RightWinkFrowning,
            (false, false, true) => ExpressionCategory::ClosedEyeSmiling,
            (false, false, false) => ExpressionCategory::ClosedEyeFrowning,
        }
    }
}

/// Maps a face's probability signals to an emoji category.
///
/// Pure and deterministic: identical inputs always give the same category.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpressionClassifier {
    thresholds: ClassifierThresholds,
}

impl ExpressionClassifier {
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> ClassifierThresholds {
        self.thresholds
    }

    pub fn classify(&self, signals: &FaceSignals) -> ExpressionCategory {
        let category = ExpressionState::from_signals(signals, self.thresholds).category();
        log::debug!(
            "classify: left_eye_open={:.3} right_eye_open={:.3} smiling={:.3} -> {:?}",
            signals.left_eye_open,
            signals.right_eye_open,
            signals.smiling,
            category
        );
        category
    }
}
