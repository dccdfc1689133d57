pub mod detector_session;
pub mod face_detector;
