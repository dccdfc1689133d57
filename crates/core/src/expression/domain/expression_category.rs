use std::fmt;

use serde::{Deserialize, Serialize};

/// Emoji category chosen for one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionCategory {
    Smiling,
    Frowning,
    LeftWink,
    RightWink,
    LeftWinkFrowning,
    RightWinkFrowning,
    ClosedEyeSmiling,
    ClosedEyeFrowning,
    /// Never produced by classification; resolvers reject it.
    Undefined,
}

impl ExpressionCategory {
    /// Every category that has an overlay asset.
    pub const DRAWABLE: &[ExpressionCategory] = &[
        ExpressionCategory::Smiling,
        ExpressionCategory::Frowning,
        ExpressionCategory::LeftWink,
        ExpressionCategory::RightWink,
        ExpressionCategory::LeftWinkFrowning,
        ExpressionCategory::RightWinkFrowning,
        ExpressionCategory::ClosedEyeSmiling,
        ExpressionCategory::ClosedEyeFrowning,
    ];

    /// File stem of the overlay asset for this category.
    pub fn asset_name(&self) -> Option<&'static str> {
        match self {
            ExpressionCategory::Smiling => Some("smile"),
            ExpressionCategory::Frowning => Some("frown"),
            ExpressionCategory::LeftWink => Some("leftwink"),
            ExpressionCategory::RightWink => Some("rightwink"),
            ExpressionCategory::LeftWinkFrowning => Some("leftwinkfrown"),
            ExpressionCategory::RightWinkFrowning => Some("rightwinkfrown"),
            ExpressionCategory::ClosedEyeSmiling => Some("closed_smile"),
            ExpressionCategory::ClosedEyeFrowning => Some("closed_frown"),
            ExpressionCategory::Undefined => None,
        }
    }
}

impl fmt::Display for ExpressionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpressionCategory::Smiling => "Smiling",
            ExpressionCategory::Frowning => "Frowning",
            ExpressionCategory::LeftWink => "Left wink",
            ExpressionCategory::RightWink => "Right wink",
            ExpressionCategory::LeftWinkFrowning => "Left wink frowning",
            ExpressionCategory::RightWinkFrowning => "Right wink frowning",
            ExpressionCategory::ClosedEyeSmiling => "Closed eye smiling",
            ExpressionCategory::ClosedEyeFrowning => "Closed eye frowning",
            ExpressionCategory::Undefined => "Undefined",
        };
        write!(f, "{name}")
    }
}
