//! Keyboard state to ship control intents
//!
//! The input mapper owns the fire cooldown: a held fire key produces a fire
//! request at most once per [`FIRE_COOLDOWN_MS`].

use crate::consts::FIRE_COOLDOWN_MS;
use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Thrust,
    Fire,
}

/// A polled keyboard/window device
pub trait InputSource {
    /// Drain pending events; true once the player asked to quit
    fn poll_quit(&mut self) -> bool;

    /// Whether `key` is currently held
    fn key_down(&self, key: Key) -> bool;
}

/// Translates key state into per-tick control intents
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    /// Timestamp of the last honoured fire request
    last_fire_ms: Option<u64>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this tick's controls from `source` at time `now_ms`
    pub fn map(&mut self, source: &impl InputSource, now_ms: u64) -> TickInput {
        TickInput {
            turn_left: source.key_down(Key::Left),
            turn_right: source.key_down(Key::Right),
            thrust: source.key_down(Key::Thrust),
            fire: source.key_down(Key::Fire) && self.try_fire(now_ms),
        }
    }

    /// Honour a fire request if the cooldown has elapsed, starting a new one
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        let ready = self
            .last_fire_ms
            .is_none_or(|last| now_ms.saturating_sub(last) >= FIRE_COOLDOWN_MS);
        if ready {
            self.last_fire_ms = Some(now_ms);
        }
        ready
    }
}
