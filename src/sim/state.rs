//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; the renderer and
//! audio dispatcher only read it after a tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::{Pool, Slot};
use crate::consts::*;
use crate::{heading_vector, screen_center, wrap_position};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; terminal
    GameOver,
}

/// Something that happened during a tick, consumed by audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bullet left the ship
    Fired,
    /// A bullet destroyed an asteroid
    AsteroidDestroyed { size: u8, pos: Vec2, points: u32 },
    /// The ship collided with an asteroid
    ShipDestroyed { lives_left: u32 },
    /// The last life was lost
    GameOver { final_score: u32 },
    /// A new level was set up
    LevelStarted { level: u32 },
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees
    pub heading: f32,
    pub alive: bool,
    /// Ticks of collision immunity left
    pub invincible_ticks: u32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            pos: screen_center(),
            vel: Vec2::ZERO,
            heading: SHIP_START_HEADING,
            alive: true,
            invincible_ticks: RESPAWN_INVINCIBILITY,
        }
    }
}

impl Ship {
    /// Put the ship back at the centre, stationary, facing up and shielded
    pub fn respawn(&mut self) {
        *self = Self::default();
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    /// Blink while invincible: drawn only on odd ten-tick phases
    pub fn is_visible(&self) -> bool {
        self.alive && (self.invincible_ticks == 0 || (self.invincible_ticks / 10) % 2 != 0)
    }

    /// Unit vector along the heading
    pub fn direction(&self) -> Vec2 {
        heading_vector(self.heading)
    }

    /// Point where bullets leave the hull
    pub fn nose(&self) -> Vec2 {
        self.pos + self.direction() * (SHIP_SIZE / 2.0)
    }

    pub fn turn(&mut self, degrees: f32) {
        self.heading += degrees;
    }

    pub fn thrust(&mut self) {
        self.vel += self.direction() * SHIP_ACCELERATION;
    }

    /// Move, apply friction, wrap and count down the shield
    pub fn integrate(&mut self) {
        self.pos = wrap_position(self.pos + self.vel);
        self.vel *= SHIP_FRICTION;
        self.invincible_ticks = self.invincible_ticks.saturating_sub(1);
    }
}

/// A bullet in flight
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks left before the bullet fizzles
    pub lifetime: i32,
    pub active: bool,
}

impl Bullet {
    /// Bullet fired from `ship`'s nose, inheriting its velocity
    pub fn fired_from(ship: &Ship) -> Self {
        Self {
            pos: ship.nose(),
            vel: ship.vel + ship.direction() * BULLET_SPEED,
            lifetime: BULLET_LIFETIME,
            active: true,
        }
    }

    /// Move, wrap and age; expires the bullet when its lifetime runs out
    pub fn integrate(&mut self) {
        self.pos = wrap_position(self.pos + self.vel);
        self.lifetime -= 1;
        if self.lifetime <= 0 {
            self.active = false;
        }
    }
}

impl Slot for Bullet {
    fn is_live(&self) -> bool {
        self.active
    }

    fn release(&mut self) {
        self.active = false;
    }
}

/// A drifting rock
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Cosmetic rotation in degrees
    pub angle: f32,
    /// Degrees per tick
    pub rotation_speed: f32,
    /// 3 = large, 2 = medium, 1 = small
    pub size: u8,
    /// Outline offsets from the centre; only the first `vertex_count` are used
    pub vertices: [Vec2; MAX_ASTEROID_VERTICES],
    pub vertex_count: usize,
    pub alive: bool,
}

impl Asteroid {
    /// Outline offsets from the centre (unrotated)
    pub fn outline(&self) -> &[Vec2] {
        &self.vertices[..self.vertex_count.min(MAX_ASTEROID_VERTICES)]
    }

    /// Bullets closer than this to the centre hit the asteroid
    pub fn bullet_radius(&self) -> f32 {
        f32::from(self.size) * 10.0
    }

    /// The ship's centre closer than this collides with the asteroid
    pub fn ship_radius(&self) -> f32 {
        f32::from(self.size) * 8.0 + SHIP_SIZE / 2.0
    }

    /// Points awarded for shooting it
    pub fn score_value(&self) -> u32 {
        (4 - u32::from(self.size.min(3))) * 20
    }

    pub fn integrate(&mut self) {
        self.pos = wrap_position(self.pos + self.vel);
        self.angle += self.rotation_speed;
    }
}

impl Slot for Asteroid {
    fn is_live(&self) -> bool {
        self.alive
    }

    fn release(&mut self) {
        self.alive = false;
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed, kept for logging and reproduction
    pub seed: u64,
    /// Seeded generator driving every random choice in the simulation
    pub rng: Pcg32,
    /// 1-based level number
    pub level: u32,
    pub lives: u32,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub ship: Ship,
    pub bullets: Pool<Bullet>,
    pub asteroids: Pool<Asteroid>,
    /// Events recorded during the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a new run at level 1 with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self::empty(seed);
        super::spawn::setup_level(&mut state);
        state
    }

    /// A run with no asteroids spawned yet (useful for scripted scenarios)
    pub fn empty(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 1,
            lives: STARTING_LIVES,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            ship: Ship::default(),
            bullets: Pool::new(MAX_BULLETS),
            asteroids: Pool::new(MAX_ASTEROIDS),
            events: Vec::with_capacity(16),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Spawn an asteroid using the state's generator (see [`super::spawn::spawn_asteroid`])
    pub fn spawn_asteroid(&mut self, pos: Vec2, size: u8) -> Option<usize> {
        super::spawn::spawn_asteroid(&mut self.asteroids, &mut self.rng, pos, size)
    }

    /// Fire a bullet from the ship into the first free slot
    pub fn fire_bullet(&mut self) -> bool {
        if !self.ship.alive {
            return false;
        }
        let fired = self.bullets.claim(Bullet::fired_from(&self.ship)).is_some();
        if fired {
            self.events.push(GameEvent::Fired);
        }
        fired
    }
}
