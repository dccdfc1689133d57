pub mod expression_category;
pub mod expression_classifier;
pub mod face_signals;
