//! Software rasterizer
//!
//! Pixels are `0x00RRGGBB`, the layout softbuffer expects. Anything drawn
//! outside the buffer is clipped per pixel.

use glam::Vec2;

use super::{Rect, Renderer};

pub const BACKGROUND: u32 = 0x000000;
pub const FOREGROUND: u32 = 0xFFFFFF;

/// A CPU-side frame of fixed logical size
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    /// Frames finished so far
    frames: u64,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
            frames: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Colour at (x, y), `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    fn plot(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = FOREGROUND;
        }
    }

    /// Bresenham line between integer endpoints, both inclusive
    fn line(&mut self, (mut x0, mut y0): (i32, i32), (x1, y1): (i32, i32)) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x0, y0);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Nearest-neighbour scale into `dst`, which is `dst_width` x `dst_height`
    pub fn scale_into(&self, dst: &mut [u32], dst_width: usize, dst_height: usize) {
        if dst_width == 0 || dst_height == 0 {
            return;
        }
        for (py, row) in dst.chunks_exact_mut(dst_width).take(dst_height).enumerate() {
            let ly = py * self.height / dst_height;
            let src = &self.pixels[ly * self.width..(ly + 1) * self.width];
            for (px, out) in row.iter_mut().enumerate() {
                *out = src[px * self.width / dst_width];
            }
        }
    }
}

/// Truncate to the pixel grid the way integer screen points are formed
fn to_pixel(p: Vec2) -> (i32, i32) {
    (p.x as i32, p.y as i32)
}

impl Renderer for FrameBuffer {
    fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    fn draw_line_strip(&mut self, points: &[Vec2], closed: bool) {
        for pair in points.windows(2) {
            self.line(to_pixel(pair[0]), to_pixel(pair[1]));
        }
        match points {
            [only] => self.draw_point(*only),
            [first, .., last] if closed => self.line(to_pixel(*last), to_pixel(*first)),
            _ => {}
        }
    }

    fn draw_point(&mut self, p: Vec2) {
        let (x, y) = to_pixel(p);
        self.plot(x, y);
    }

    fn draw_filled_rect(&mut self, rect: Rect) {
        for y in rect.y..rect.y + rect.h.max(0) {
            for x in rect.x..rect.x + rect.w.max(0) {
                self.plot(x, y);
            }
        }
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
