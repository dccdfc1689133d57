use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;

/// Reads image files with the `image` crate.
///
/// Images carrying an alpha channel decode to RGBA frames, everything else
/// to RGB, so the pixel format survives a read/write cycle.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, EmojifyError> {
        let img = image::open(path)?;
        if img.width() == 0 || img.height() == 0 {
            return Err(EmojifyError::InvalidDimension(format!(
                "{} has no pixels",
                path.display()
            )));
        }
        let frame = if img.color().has_alpha() {
            Frame::from(img.to_rgba8())
        } else {
            Frame::from(img.to_rgb8())
        };
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_rgb(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("test.png");
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([50, 100, 200]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_reads_rgb_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_rgb(dir.path(), 100, 80);
        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!((frame.width(), frame.height(), frame.channels()), (100, 80, 3));
        assert_eq!(frame.pixel(0, 0), &[50, 100, 200]);
    }

    #[test]
    fn test_keeps_alpha_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([1, 2, 3, 4]))
            .save(&path)
            .unwrap();
        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.channels(), 4);
        assert_eq!(frame.pixel(3, 3), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_nonexistent_file_errors() {
        let result = ImageFileReader::new().read(Path::new("/nonexistent/test.png"));
        assert!(matches!(result, Err(EmojifyError::Image(_))));
    }
}
