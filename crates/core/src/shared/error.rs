use thiserror::Error;

use crate::expression::domain::expression_category::ExpressionCategory;

#[derive(Debug, Error)]
pub enum EmojifyError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("no overlay available for category {0}")]
    UnsupportedCategory(ExpressionCategory),

    #[error("unsupported pixel format: {0} channels (expected 3 or 4)")]
    UnsupportedPixelFormat(u8),

    #[error("face detection failed: {0}")]
    Detection(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
