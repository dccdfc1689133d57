use crate::expression::domain::expression_category::ExpressionCategory;
use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;

/// Maps an expression category to the overlay image drawn for it.
///
/// Categories without a mapping (always including `Undefined`) fail with
/// `EmojifyError::UnsupportedCategory`.
pub trait OverlayResolver: Send {
    fn resolve(&self, category: ExpressionCategory) -> Result<Frame, EmojifyError>;
}
