use std::path::Path;

use anyhow::{Context, Result};
use bytemuck::cast_slice_mut;
use image::RgbaImage;

use crate::color::Color;
use crate::surface::Surface;

/// In-memory RGBA target. Alpha 0 marks pixels not written since the last clear.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; width as usize * height as usize * 4],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Color written at `(x, y)`, `None` if untouched or out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.index(x, y)?;
        (self.rgba[i + 3] != 0).then(|| Color::new(self.rgba[i], self.rgba[i + 1], self.rgba[i + 2]))
    }

    pub fn fill(&mut self, r: u8, g: u8, b: u8, a: u8) {
        let color: u32 = u32::from_le_bytes([r, g, b, a]);
        let buf_as_u32: &mut [u32] = cast_slice_mut(&mut self.rgba);
        buf_as_u32.fill(color);
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        let mut opaque = self.rgba.clone();
        for px in opaque.chunks_exact_mut(4) {
            px[3] = 255;
        }
        let img = RgbaImage::from_raw(self.width, self.height, opaque)
            .context("framebuffer size does not match its pixel data")?;
        img.save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

impl Surface for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.fill(0, 0, 0, 0);
    }

    fn set_pixel(&mut self, color: Color, x: i32, y: i32) {
        let Some(i) = self.index(x, y) else { return };
        self.rgba[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
