//! Expression classification and emoji overlay compositing.
//!
//! A detected face's eye-open and smiling probabilities are classified into
//! an [`ExpressionCategory`](expression::domain::expression_category::ExpressionCategory),
//! the matching overlay is resolved, scaled to the face and drawn over it.
//! Face detection and overlay assets are injected through the
//! [`FaceDetector`](detection::domain::face_detector::FaceDetector) and
//! [`OverlayResolver`](overlay::domain::overlay_resolver::OverlayResolver) traits.

pub mod compositing;
pub mod detection;
pub mod expression;
pub mod imaging;
pub mod overlay;
pub mod pipeline;
pub mod shared;
