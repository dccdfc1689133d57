use crate::shared::error::EmojifyError;
use crate::shared::region::FaceRegion;

/// Size and top-left position of a scaled overlay in background coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayPlacement {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// The part of a placed overlay that lands on the background.
///
/// `dest_*` is the top-left in background pixels; `offset_*` is the same
/// corner measured inside the scaled overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRegion {
    pub dest_x: u32,
    pub dest_y: u32,
    pub offset_x: u32,
    pub offset_y: u32,
    pub width: u32,
    pub height: u32,
}

impl OverlayPlacement {
    /// Fits an `overlay_width` x `overlay_height` image to a face.
    ///
    /// Width is `face.width * scale_factor`; height keeps the overlay's aspect
    /// ratio relative to that width and is then scaled again. The overlay is
    /// centred horizontally on the face and its centre raised so that a third
    /// of its height sits above the face's vertical midpoint.
    pub fn compute(
        overlay_width: u32,
        overlay_height: u32,
        face: &FaceRegion,
        scale_factor: f64,
    ) -> Result<Self, EmojifyError> {
        if overlay_width == 0 {
            return Err(EmojifyError::InvalidDimension(
                "overlay width must be positive".to_string(),
            ));
        }
        face.validate()?;

        let width = (face.width as f64 * scale_factor) as u32;
        let aspect_height = overlay_height as u64 * width as u64 / overlay_width as u64;
        let height = (aspect_height as f64 * scale_factor) as u32;

        let (center_x, center_y) = face.center();
        let x = (center_x - (width / 2) as f64).round() as i32;
        let y = (center_y - (height / 3) as f64).round() as i32;

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// True when scaling collapsed the overlay to nothing drawable.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersection with a `background_width` x `background_height` image,
    /// or `None` when nothing of the overlay is on it.
    pub fn visible_in(&self, background_width: u32, background_height: u32) -> Option<VisibleRegion> {
        let left = self.x as i64;
        let top = self.y as i64;
        let x0 = left.max(0);
        let y0 = top.max(0);
        let x1 = (left + self.width as i64).min(background_width as i64);
        let y1 = (top + self.height as i64).min(background_height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(VisibleRegion {
            dest_x: x0 as u32,
            dest_y: y0 as u32,
            offset_x: (x0 - left) as u32,
            offset_y: (y0 - top) as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_reference_scenario() {
        let face = FaceRegion::new(100, 150, 200, 200);
        let p = OverlayPlacement::compute(100, 100, &face, 0.9).unwrap();
        assert_eq!(
            p,
            OverlayPlacement {
                x: 110,
                y: 196,
                width: 180,
                height: 162,
            }
        );
    }

    #[test]
    fn test_height_applies_scale_twice() {
        // Square overlay, scale 0.5: width 50, height 50 * 0.5 = 25.
        let face = FaceRegion::new(0, 0, 100, 100);
        let p = OverlayPlacement::compute(10, 10, &face, 0.5).unwrap();
        assert_eq!((p.width, p.height), (50, 25));
    }

    #[test]
    fn test_aspect_ratio_uses_integer_division() {
        // width 9; 2 * 9 / 3 = 6; 6 * 0.9 = 5.4 -> 5
        let face = FaceRegion::new(0, 0, 10, 10);
        let p = OverlayPlacement::compute(3, 2, &face, 0.9).unwrap();
        assert_eq!((p.width, p.height), (9, 5));
        // x: 5 - 9/2 = 1; y: 5 - 5/3 = 4
        assert_eq!((p.x, p.y), (1, 4));
    }

    #[test]
    fn test_wide_overlay_is_shorter() {
        let face = FaceRegion::new(0, 0, 100, 100);
        let p = OverlayPlacement::compute(200, 100, &face, 1.0).unwrap();
        assert_eq!((p.width, p.height), (100, 50));
    }

    #[test]
    fn test_scale_above_one_can_exceed_face() {
        let face = FaceRegion::new(0, 0, 100, 100);
        let p = OverlayPlacement::compute(100, 100, &face, 1.5).unwrap();
        assert_eq!(p.width, 150);
        assert_eq!(p.x, -25);
    }

    #[test]
    fn test_tiny_face_collapses_to_empty() {
        let face = FaceRegion::new(0, 0, 1, 1);
        let p = OverlayPlacement::compute(100, 100, &face, 0.9).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_zero_overlay_width_is_invalid() {
        let face = FaceRegion::new(0, 0, 100, 100);
        assert!(matches!(
            OverlayPlacement::compute(0, 100, &face, 0.9),
            Err(EmojifyError::InvalidDimension(_))
        ));
    }

    fn placement(x: i32, y: i32, width: u32, height: u32) -> OverlayPlacement {
        OverlayPlacement {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_visible_inside_is_whole_overlay() {
        let v = placement(10, 20, 30, 40).visible_in(100, 100).unwrap();
        assert_eq!(
            v,
            VisibleRegion {
                dest_x: 10,
                dest_y: 20,
                offset_x: 0,
                offset_y: 0,
                width: 30,
                height: 40,
            }
        );
    }

    #[test]
    fn test_visible_clips_top_left() {
        let v = placement(-5, -8, 20, 20).visible_in(100, 100).unwrap();
        assert_eq!((v.dest_x, v.dest_y), (0, 0));
        assert_eq!((v.offset_x, v.offset_y), (5, 8));
        assert_eq!((v.width, v.height), (15, 12));
    }

    #[test]
    fn test_visible_clips_bottom_right() {
        let v = placement(90, 95, 20, 20).visible_in(100, 100).unwrap();
        assert_eq!((v.width, v.height), (10, 5));
    }

    #[test]
    fn test_visible_bounded_by_background_for_huge_overlay() {
        let v = placement(-450_000, -270_000, 900_000, 810_000)
            .visible_in(10, 10)
            .unwrap();
        assert_eq!((v.dest_x, v.dest_y, v.width, v.height), (0, 0, 10, 10));
        assert_eq!((v.offset_x, v.offset_y), (450_000, 270_000));
    }

    #[rstest]
    #[case::left_of_image(placement(-30, 0, 30, 10))]
    #[case::below_image(placement(0, 100, 10, 10))]
    #[case::far_right(placement(i32::MAX, 0, u32::MAX, 10))]
    #[case::far_above(placement(0, i32::MIN, 10, 1_000))]
    fn test_offscreen_has_no_visible_region(#[case] p: OverlayPlacement) {
        assert_eq!(p.visible_in(100, 100), None);
    }

    #[test]
    fn test_extreme_face_computes_without_overflow() {
        let face = FaceRegion::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        let p = OverlayPlacement::compute(100, 100, &face, 0.9).unwrap();
        assert!(p.visible_in(100, 100).is_none());
    }

    #[rstest]
    #[case::zero_width(FaceRegion::new(0, 0, 0, 100))]
    #[case::negative_width(FaceRegion::new(0, 0, -1, 100))]
    #[case::zero_height(FaceRegion::new(0, 0, 100, 0))]
    fn test_non_positive_face_is_invalid(#[case] face: FaceRegion) {
        assert!(matches!(
            OverlayPlacement::compute(100, 100, &face, 0.9),
            Err(EmojifyError::InvalidDimension(_))
        ));
    }
}
