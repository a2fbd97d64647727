//! Packed RGB output buffer.

use std::path::Path;

use lumen_math::Color;

use crate::RenderError;

/// Row-major image of packed `0xRRGGBB` pixels, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Get the pixel at (x, y), with y counted from the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        Color::from_rgb24(self.pixels[(y * self.width + x) as usize])
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color.to_rgb24();
    }

    /// Unpack to interleaved RGB bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for &packed in &self.pixels {
            let rgb: [u8; 3] = Color::from_rgb24(packed).into();
            bytes.extend_from_slice(&rgb);
        }
        bytes
    }

    /// Write the image to `path`. The format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.to_rgb_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        log::info!(
            "Saved {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.pixels().len(), 12);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_set_get_packing() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(2, 1, Color::new(0x12, 0x34, 0x56));

        assert_eq!(fb.pixels()[5], 0x123456);
        assert_eq!(fb.get(2, 1), Color::new(0x12, 0x34, 0x56));
        assert_eq!(fb.get(0, 0), Color::BLACK);
    }

    #[test]
    fn test_to_rgb_bytes() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set(0, 0, Color::new(1, 2, 3));
        fb.set(1, 0, Color::new(250, 251, 252));
        assert_eq!(fb.to_rgb_bytes(), vec![1, 2, 3, 250, 251, 252]);
    }

    #[test]
    fn test_save_bmp() {
        let dir = std::env::temp_dir().join(format!("lumen_fb_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("Scene_test.bmp");

        let mut fb = FrameBuffer::new(3, 2);
        fb.set(0, 0, Color::new(255, 0, 0));
        fb.set(2, 1, Color::new(0, 0, 255));
        fb.save(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(2, 1).0, [0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_unknown_extension() {
        let fb = FrameBuffer::new(1, 1);
        let result = fb.save(std::env::temp_dir().join("lumen_fb.unknownext"));
        assert!(matches!(result, Err(RenderError::Image(_))));
    }
}
