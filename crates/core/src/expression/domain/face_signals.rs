use serde::{Deserialize, Serialize};

use crate::shared::region::FaceRegion;

/// Classifier-facing output of a face detector for one face.
///
/// Probabilities are expected in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceSignals {
    pub left_eye_open: f64,
    pub right_eye_open: f64,
    pub smiling: f64,
    #[serde(flatten)]
    pub region: FaceRegion,
}

impl FaceSignals {
    pub fn new(left_eye_open: f64, right_eye_open: f64, smiling: f64, region: FaceRegion) -> Self {
        Self {
            left_eye_open,
            right_eye_open,
            smiling,
            region,
        }
    }

    /// Name of the first probability outside `[0, 1]`, if any.
    pub fn out_of_range_probability(&self) -> Option<&'static str> {
        [
            ("left_eye_open", self.left_eye_open),
            ("right_eye_open", self.right_eye_open),
            ("smiling", self.smiling),
        ]
        .into_iter()
        .find(|(_, p)| !(0.0..=1.0).contains(p))
        .map(|(name, _)| name)
    }
}
