//! Runtime settings
//!
//! Read once at startup from `ASTEROIDS_*` environment variables. Bad values
//! are reported and replaced with defaults rather than aborting the game.

use serde::{Deserialize, Serialize};

/// Master volume, 0.0 - 1.0
pub const VOLUME_VAR: &str = "ASTEROIDS_VOLUME";
/// `1`/`true`/`yes`/`on` to start muted
pub const MUTE_VAR: &str = "ASTEROIDS_MUTE";
/// Fixed RNG seed for a reproducible game
pub const SEED_VAR: &str = "ASTEROIDS_SEED";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
    /// Simulation seed; `None` picks one from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = lookup(VOLUME_VAR) {
            match raw.trim().parse::<f32>() {
                Ok(v) if v.is_finite() => settings.master_volume = v.clamp(0.0, 1.0),
                _ => log::warn!("Ignoring invalid {}={:?}", VOLUME_VAR, raw),
            }
        }

        if let Some(raw) = lookup(MUTE_VAR) {
            match parse_flag(&raw) {
                Some(flag) => settings.muted = flag,
                None => log::warn!("Ignoring invalid {}={:?}", MUTE_VAR, raw),
            }
        }

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => settings.seed = Some(seed),
                Err(e) => log::warn!("Ignoring invalid {}={:?}: {}", SEED_VAR, raw, e),
            }
        }

        settings
    }

    /// Output volume after muting
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// The configured seed, or one derived from the current time
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
