//! Vector line-art rendering
//!
//! [`draw_frame`] describes a frame as line strips, points and filled rects on
//! a [`Renderer`]. The software [`FrameBuffer`] rasterizes them; the platform
//! layer presents its pixels.

pub mod framebuffer;
pub mod shapes;

pub use framebuffer::FrameBuffer;

use glam::Vec2;

use crate::consts::MAX_ASTEROID_VERTICES;
use crate::sim::GameState;

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// A drawing surface for white-on-black vector graphics
pub trait Renderer {
    /// Fill the frame with the background colour
    fn clear(&mut self);

    /// Connect consecutive `points`; `closed` also joins the last to the first
    fn draw_line_strip(&mut self, points: &[Vec2], closed: bool);

    fn draw_point(&mut self, p: Vec2);

    fn draw_filled_rect(&mut self, rect: Rect);

    /// Finish the frame
    fn present(&mut self);
}

/// Score position (top-left corner of the first digit)
const SCORE_ORIGIN: (i32, i32) = (10, 5);

/// Draw one complete frame of `state`
pub fn draw_frame(renderer: &mut impl Renderer, state: &GameState) {
    renderer.clear();

    for rect in shapes::number_rects(state.score, SCORE_ORIGIN.0, SCORE_ORIGIN.1) {
        renderer.draw_filled_rect(rect);
    }
    for i in 0..state.lives {
        renderer.draw_line_strip(&shapes::life_icon(i), false);
    }

    if state.ship.is_visible() {
        renderer.draw_line_strip(&shapes::ship_outline(&state.ship), false);
    }

    for bullet in state.bullets.iter() {
        renderer.draw_point(bullet.pos);
    }

    let mut outline = Vec::with_capacity(MAX_ASTEROID_VERTICES);
    for asteroid in state.asteroids.iter() {
        outline.clear();
        outline.extend(shapes::asteroid_outline(asteroid));
        renderer.draw_line_strip(&outline, true);
    }

    renderer.present();
}
