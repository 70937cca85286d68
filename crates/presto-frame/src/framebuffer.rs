//! In-memory RGB565 framebuffer.

use alloc::{vec, vec::Vec};

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

pub const PANEL_WIDTH: u32 = 480;
pub const PANEL_HEIGHT: u32 = 480;

/// Row-major pixel store, origin at the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(PANEL_WIDTH, PANEL_HEIGHT)
    }
}

impl FrameBuffer {
    /// Creates a black framebuffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Sets a pixel. Returns `false` when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) -> bool {
        let Some(index) = self.index(x, y) else {
            return false;
        };
        self.pixels[index] = color;
        true
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    /// Fills the clipped span `[x0, x1)` of row `y`.
    pub(crate) fn fill_span(&mut self, y: u32, x0: u32, x1: u32, color: Rgb565) {
        if y >= self.height {
            return;
        }
        let x1 = x1.min(self.width);
        if x0 >= x1 {
            return;
        }
        let row = (y * self.width) as usize;
        self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
    }

    /// Darkens the frame with a black checker of pitch `step`, shifted per row
    /// band. `2` is heavy, `3` light.
    pub fn dither_dim(&mut self, step: u32) {
        let step = step.max(1);
        for y in (0..self.height).step_by(step as usize) {
            let start = (y / step) % step;
            for x in (start..self.width).step_by(step as usize) {
                self.set_pixel(x, y, Rgb565::BLACK);
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}
