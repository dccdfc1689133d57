use serde::{Deserialize, Serialize};

use super::error::EmojifyError;

/// Axis-aligned bounding box of a detected face, in image pixel coordinates.
///
/// `x`/`y` is the top-left corner and may lie outside the image; drawing
/// against it clips rather than fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl FaceRegion {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point in real-valued pixel coordinates.
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// Fails with `InvalidDimension` unless both sides are positive.
    pub fn validate(&self) -> Result<(), EmojifyError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(EmojifyError::InvalidDimension(format!(
                "face region must have positive size, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Intersection over union. Edges are computed in `i64` so regions
    /// anywhere in the `i32` plane compare without overflow.
    pub fn iou(&self, other: &FaceRegion) -> f64 {
        let (ax1, ay1, ax2, ay2) = self.edges();
        let (bx1, by1, bx2, by2) = other.edges();
        let ix1 = ax1.max(bx1);
        let iy1 = ay1.max(by1);
        let ix2 = ax2.min(bx2);
        let iy2 = ay2.min(by2);

        let inter = (ix2 - ix1).max(0) as f64 * (iy2 - iy1).max(0) as f64;
        if inter == 0.0 {
            return 0.0;
        }

        let area_a = self.width as f64 * self.height as f64;
        let area_b = other.width as f64 * other.height as f64;
        inter / (area_a + area_b - inter)
    }

    fn edges(&self) -> (i64, i64, i64, i64) {
        let x = self.x as i64;
        let y = self.y as i64;
        (x, y, x + self.width as i64, y + self.height as i64)
    }
}
