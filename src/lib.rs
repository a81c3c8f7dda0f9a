//! Vector Asteroids - a single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, collisions, level flow)
//! - `input`: Key state to ship control intents, fire cooldown
//! - `audio`: Sound cue dispatch and procedural synthesis
//! - `renderer`: Vector line-art drawing through a narrow `Renderer` trait
//! - `platform`: Native window, framebuffer presentation and frame pacing
//! - `settings`: Environment-driven runtime settings

pub mod audio;
#[cfg(feature = "frontend")]
pub mod error;
pub mod input;
#[cfg(feature = "frontend")]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical screen size
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Delay between frames, one simulation tick per frame (~60 Hz)
    pub const FRAME_DELAY_MS: u64 = 16;

    /// Ship hull length, also drives the collision radius and nose offset
    pub const SHIP_SIZE: f32 = 20.0;
    /// Thrust acceleration per tick
    pub const SHIP_ACCELERATION: f32 = 0.1;
    /// Degrees turned per tick while a turn key is held
    pub const SHIP_TURN_SPEED: f32 = 5.0;
    /// Velocity multiplier applied every tick
    pub const SHIP_FRICTION: f32 = 0.995;
    /// Heading at spawn, pointing up the screen
    pub const SHIP_START_HEADING: f32 = -90.0;
    /// Ticks of immunity after (re)spawning (3 seconds at 60 Hz)
    pub const RESPAWN_INVINCIBILITY: u32 = 180;
    pub const STARTING_LIVES: u32 = 3;

    pub const BULLET_SPEED: f32 = 7.0;
    pub const BULLET_LIFETIME: i32 = 60;
    pub const MAX_BULLETS: usize = 10;
    /// Minimum time between honoured fire requests
    pub const FIRE_COOLDOWN_MS: u64 = 200;

    pub const MAX_ASTEROIDS: usize = 50;
    pub const MIN_ASTEROID_VERTICES: usize = 8;
    pub const MAX_ASTEROID_VERTICES: usize = 16;
    pub const LARGE_ASTEROID: u8 = 3;
    /// Level N starts with N + this many large asteroids
    pub const EXTRA_ASTEROIDS_PER_LEVEL: u32 = 3;
    /// Fresh asteroids never appear closer than this to the ship
    pub const SAFE_SPAWN_RADIUS: f32 = 200.0;
    /// How far beyond the screen edge level asteroids are placed
    pub const SPAWN_EDGE_MARGIN: f32 = SHIP_SIZE * 4.0;
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;

    /// Audio output sample rate
    pub const SAMPLE_RATE: u32 = 44_100;
}

/// Unit vector for a heading given in degrees
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Wrap a single coordinate into [0, extent)
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Wrap a position onto the toroidal screen
#[inline]
pub fn wrap_position(pos: Vec2) -> Vec2 {
    use consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    Vec2::new(
        wrap_coordinate(pos.x, SCREEN_WIDTH),
        wrap_coordinate(pos.y, SCREEN_HEIGHT),
    )
}

/// Straight-line distance between two points (no wrap-around shortcut)
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Centre of the logical screen
#[inline]
pub fn screen_center() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH / 2.0, consts::SCREEN_HEIGHT / 2.0)
}
