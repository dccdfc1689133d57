use std::fs;
use std::path::{Path, PathBuf};

use crate::detection::domain::face_detector::FaceDetector;
use crate::expression::domain::face_signals::FaceSignals;
use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;

const SIDECAR_SUFFIX: &str = "faces.json";

/// Replays face records exported by an external detection engine.
///
/// The file holds a JSON array of flat records:
/// `{"left_eye_open", "right_eye_open", "smiling", "x", "y", "width", "height"}`.
/// It is read on the first `detect` of a request and dropped on `release`.
pub struct JsonFaceDetector {
    path: PathBuf,
    faces: Option<Vec<FaceSignals>>,
}

impl JsonFaceDetector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            faces: None,
        }
    }

    /// `photo.jpg` -> `photo.jpg.faces.json`
    pub fn sidecar_path(image_path: &Path) -> PathBuf {
        let mut name = image_path.as_os_str().to_owned();
        name.push(".");
        name.push(SIDECAR_SUFFIX);
        PathBuf::from(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<FaceSignals>, EmojifyError> {
        let json = fs::read_to_string(&self.path)?;
        let faces: Vec<FaceSignals> = serde_json::from_str(&json)?;
        for (i, face) in faces.iter().enumerate() {
            if let Some(name) = face.out_of_range_probability() {
                return Err(EmojifyError::Detection(format!(
                    "face {i} in {}: {name} is outside [0, 1]",
                    self.path.display()
                )));
            }
            if face.region.width <= 0 || face.region.height <= 0 {
                return Err(EmojifyError::Detection(format!(
                    "face {i} in {}: non-positive region {}x{}",
                    self.path.display(),
                    face.region.width,
                    face.region.height
                )));
            }
        }
        log::debug!("Loaded {} face records from {}", faces.len(), self.path.display());
        Ok(faces)
    }
}

impl FaceDetector for JsonFaceDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<Vec<FaceSignals>, EmojifyError> {
        if self.faces.is_none() {
            self.faces = Some(self.load()?);
        }
        Ok(self.faces.clone().unwrap_or_default())
    }

    fn release(&mut self) {
        self.faces = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::region::FaceRegion;

    fn frame() -> Frame {
        Frame::filled(100, 100, &[0, 0, 0])
    }

    fn write_json(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("faces.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_reads_records_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(
            dir.path(),
            r#"[
                {"left_eye_open":0.9,"right_eye_open":0.9,"smiling":0.9,"x":1,"y":2,"width":30,"height":40},
                {"left_eye_open":0.1,"right_eye_open":0.2,"smiling":0.3,"x":50,"y":60,"width":10,"height":10}
            ]"#,
        );
        let mut detector = JsonFaceDetector::new(&path);

        let faces = detector.detect(&frame()).unwrap();

        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].region, FaceRegion::new(1, 2, 30, 40));
        assert_eq!(faces[1].smiling, 0.3);
    }

    #[test]
    fn test_empty_array_means_no_faces() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(dir.path(), "[]");
        let mut detector = JsonFaceDetector::new(path);
        assert!(detector.detect(&frame()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut detector = JsonFaceDetector::new("/nonexistent/faces.json");
        assert!(matches!(detector.detect(&frame()), Err(EmojifyError::Io(_))));
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(
            dir.path(),
            r#"[{"left_eye_open":-1.0,"right_eye_open":0.9,"smiling":0.9,"x":0,"y":0,"width":10,"height":10}]"#,
        );
        let mut detector = JsonFaceDetector::new(path);
        match detector.detect(&frame()) {
            Err(EmojifyError::Detection(msg)) => assert!(msg.contains("left_eye_open")),
            other => panic!("expected detection error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_region_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(
            dir.path(),
            r#"[{"left_eye_open":0.5,"right_eye_open":0.5,"smiling":0.5,"x":0,"y":0,"width":0,"height":10}]"#,
        );
        let mut detector = JsonFaceDetector::new(path);
        assert!(matches!(
            detector.detect(&frame()),
            Err(EmojifyError::Detection(_))
        ));
    }

    #[test]
    fn test_release_forces_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(dir.path(), "[]");
        let mut detector = JsonFaceDetector::new(&path);
        assert!(detector.detect(&frame()).unwrap().is_empty());

        fs::write(
            &path,
            r#"[{"left_eye_open":0.5,"right_eye_open":0.5,"smiling":0.5,"x":0,"y":0,"width":5,"height":5}]"#,
        )
        .unwrap();
        assert!(detector.detect(&frame()).unwrap().is_empty());

        detector.release();
        assert_eq!(detector.detect(&frame()).unwrap().len(), 1);
    }

    #[test]
    fn test_sidecar_path() {
        assert_eq!(
            JsonFaceDetector::sidecar_path(Path::new("/photos/me.jpg")),
            PathBuf::from("/photos/me.jpg.faces.json")
        );
    }
}
