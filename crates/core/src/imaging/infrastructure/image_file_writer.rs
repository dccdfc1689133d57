use std::path::Path;

use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;

/// Writes frames with the `image` crate; format follows the file extension.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), EmojifyError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let invalid = || {
            EmojifyError::InvalidDimension("frame data does not match its dimensions".to_string())
        };
        match frame.channels() {
            3 => image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
                .ok_or_else(invalid)?
                .save(path)?,
            4 => image::RgbaImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
                .ok_or_else(invalid)?
                .save(path)?,
            other => return Err(EmojifyError::UnsupportedPixelFormat(other)),
        }
        Ok(())
    }
}
