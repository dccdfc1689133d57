use image::imageops;

use crate::compositing::domain::overlay_compositor::OverlayCompositor;
use crate::compositing::domain::overlay_placement::OverlayPlacement;
use crate::shared::constants::DEFAULT_SCALE_FACTOR;
use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;
use crate::shared::region::FaceRegion;

use super::resample;

/// CPU compositor: nearest-neighbour scaling plus source-over blending.
///
/// RGBA overlays are blended by their alpha; RGB overlays are drawn opaque.
/// Only the part of the scaled overlay that lands on the background is
/// ever materialised.
pub struct CpuOverlayCompositor {
    scale_factor: f64,
}

impl CpuOverlayCompositor {
    /// Fails with `InvalidConfig` unless `scale_factor` is finite and positive.
    pub fn new(scale_factor: f64) -> Result<Self, EmojifyError> {
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return Err(EmojifyError::InvalidConfig(format!(
                "scale_factor must be positive, got {scale_factor}"
            )));
        }
        Ok(Self { scale_factor })
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

impl Default for CpuOverlayCompositor {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl OverlayCompositor for CpuOverlayCompositor {
    fn composite(
        &self,
        background: &Frame,
        overlay: &Frame,
        face_region: &FaceRegion,
    ) -> Result<Frame, EmojifyError> {
        background.ensure_supported_format()?;
        overlay.ensure_supported_format()?;

        let placement = OverlayPlacement::compute(
            overlay.width(),
            overlay.height(),
            face_region,
            self.scale_factor,
        )?;

        if placement.is_empty() {
            log::debug!(
                "Overlay for face at ({}, {}) scaled to nothing, skipping",
                face_region.x,
                face_region.y
            );
            return Ok(background.clone());
        }

        let Some(visible) = placement.visible_in(background.width(), background.height()) else {
            log::debug!(
                "Overlay at ({}, {}) lies outside the {}x{} image",
                placement.x,
                placement.y,
                background.width(),
                background.height()
            );
            return Ok(background.clone());
        };

        let patch = resample::resize_visible(
            &overlay.to_rgba_image(),
            placement.width,
            placement.height,
            &visible,
        );
        let mut canvas = background.to_rgba_image();
        imageops::overlay(
            &mut canvas,
            &patch,
            visible.dest_x as i64,
            visible.dest_y as i64,
        );
        Ok(Frame::from_rgba_image(canvas, background.channels()))
    }
}
