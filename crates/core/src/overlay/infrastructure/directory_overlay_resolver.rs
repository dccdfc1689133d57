use std::path::{Path, PathBuf};

use crate::expression::domain::expression_category::ExpressionCategory;
use crate::overlay::domain::overlay_resolver::OverlayResolver;
use crate::shared::constants::OVERLAY_ASSET_EXTENSION;
use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;

/// Loads overlays from `<dir>/<asset_name>.png`, decoded as RGBA.
///
/// Files are read on every `resolve`; nothing is cached between requests.
pub struct DirectoryOverlayResolver {
    dir: PathBuf,
}

impl DirectoryOverlayResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn asset_path(&self, category: ExpressionCategory) -> Option<PathBuf> {
        category
            .asset_name()
            .map(|name| self.dir.join(format!("{name}.{OVERLAY_ASSET_EXTENSION}")))
    }

    /// Drawable categories whose asset file is absent.
    pub fn missing_assets(&self) -> Vec<ExpressionCategory> {
        ExpressionCategory::DRAWABLE
            .iter()
            .copied()
            .filter(|c| !self.asset_path(*c).is_some_and(|p| p.is_file()))
            .collect()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl OverlayResolver for DirectoryOverlayResolver {
    fn resolve(&self, category: ExpressionCategory) -> Result<Frame, EmojifyError> {
        let path = self
            .asset_path(category)
            .ok_or(EmojifyError::UnsupportedCategory(category))?;
        if !path.is_file() {
            log::warn!("No overlay asset for {category:?} at {}", path.display());
            return Err(EmojifyError::UnsupportedCategory(category));
        }
        let overlay = image::open(&path)?.to_rgba8();
        log::debug!(
            "Resolved {category:?} to {} ({}x{})",
            path.display(),
            overlay.width(),
            overlay.height()
        );
        Ok(Frame::from(overlay))
    }
}
