use image::{DynamicImage, Rgba, RgbImage, RgbaImage};

use super::error::EmojifyError;

/// An image buffer: contiguous RGB or RGBA bytes in row-major order.
///
/// Frames are treated as immutable values by the public API; compositing
/// always produces a new frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// A frame with every pixel set to `pixel`; `pixel.len()` is the channel count.
    pub fn filled(width: u32, height: u32, pixel: &[u8]) -> Self {
        let data = pixel.repeat((width as usize) * (height as usize));
        Self::new(data, width, height, pixel.len() as u8)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels as usize;
        let start = ((y as usize) * (self.width as usize) + x as usize) * c;
        &self.data[start..start + c]
    }

    /// Fails unless the frame is RGB or RGBA.
    pub fn ensure_supported_format(&self) -> Result<(), EmojifyError> {
        match self.channels {
            3 | 4 => Ok(()),
            other => Err(EmojifyError::UnsupportedPixelFormat(other)),
        }
    }

    /// RGBA copy of the frame; RGB pixels become opaque.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let p = self.pixel(x, y);
            let alpha = if self.has_alpha() { p[3] } else { u8::MAX };
            Rgba([p[0], p[1], p[2], alpha])
        })
    }

    /// Converts `image` back to a frame with `channels` channels (3 or 4),
    /// dropping alpha for RGB.
    pub fn from_rgba_image(image: RgbaImage, channels: u8) -> Self {
        if channels == 4 {
            Frame::from(image)
        } else {
            Frame::from(DynamicImage::ImageRgba8(image).to_rgb8())
        }
    }
}

impl From<RgbImage> for Frame {
    fn from(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Frame::new(img.into_raw(), width, height, 3)
    }
}

impl From<RgbaImage> for Frame {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Frame::new(img.into_raw(), width, height, 4)
    }
}
