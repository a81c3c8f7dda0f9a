//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Fixed-capacity pools visited in slot order

pub mod collision;
pub mod pool;
pub mod spawn;
pub mod state;
pub mod tick;

pub use pool::{Pool, Slot};
pub use spawn::{setup_level, spawn_asteroid};
pub use state::{Asteroid, Bullet, GameEvent, GamePhase, GameState, Ship};
pub use tick::{TickInput, tick};
