use std::collections::HashMap;

use crate::expression::domain::expression_category::ExpressionCategory;
use crate::overlay::domain::overlay_resolver::OverlayResolver;
use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;

/// Resolves overlays from frames registered up front.
#[derive(Default)]
pub struct InMemoryOverlayResolver {
    overlays: HashMap<ExpressionCategory, Frame>,
}

impl InMemoryOverlayResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overlay(mut self, category: ExpressionCategory, overlay: Frame) -> Self {
        self.insert(category, overlay);
        self
    }

    pub fn insert(&mut self, category: ExpressionCategory, overlay: Frame) {
        self.overlays.insert(category, overlay);
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

impl OverlayResolver for InMemoryOverlayResolver {
    fn resolve(&self, category: ExpressionCategory) -> Result<Frame, EmojifyError> {
        self.overlays
            .get(&category)
            .cloned()
            .ok_or(EmojifyError::UnsupportedCategory(category))
    }
}
