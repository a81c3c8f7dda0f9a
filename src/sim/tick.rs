//! Fixed timestep simulation tick
//!
//! Advances the whole game by one frame: controls, kinematics, collisions and
//! level flow. Side effects are recorded as [`GameEvent`]s on the state.

use super::collision;
use super::spawn::{fragment, setup_level};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Control intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    /// Thrust held this tick
    pub thrust: bool,
    /// Fire request that already passed the cooldown gate
    pub fire: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    apply_controls(state, input);

    if state.ship.alive {
        state.ship.integrate();
    }

    for bullet in state.bullets.iter_mut() {
        bullet.integrate();
    }

    update_asteroids(state);

    if state.asteroids.is_empty() && state.phase != GamePhase::GameOver {
        state.level += 1;
        setup_level(state);
    }
}

/// Turn, thrust and fire for a living ship
fn apply_controls(state: &mut GameState, input: &TickInput) {
    if !state.ship.alive {
        return;
    }
    if input.turn_left {
        state.ship.turn(-SHIP_TURN_SPEED);
    }
    if input.turn_right {
        state.ship.turn(SHIP_TURN_SPEED);
    }
    if input.thrust {
        state.ship.thrust();
    }
    if input.fire {
        state.fire_bullet();
    }
}

/// Move every asteroid and resolve its bullet and ship collisions.
///
/// Slots are visited in index order. Fragments landing in a later slot are
/// moved and tested in the same tick; fragments reusing an earlier slot wait
/// for the next one. The ship is tested against every visited asteroid, even
/// one a bullet just destroyed.
fn update_asteroids(state: &mut GameState) {
    // Once the ship is hit it is not tested again until the next tick
    let mut ship_hit = false;

    for index in 0..state.asteroids.capacity() {
        let Some(asteroid) = state.asteroids.get_mut(index) else {
            continue;
        };
        asteroid.integrate();

        let asteroid = asteroid.clone();

        if let Some(bullet) = collision::first_bullet_hit(state.bullets.iter_indexed(), &asteroid) {
            state.bullets.release(bullet);
            state.asteroids.release(index);

            let points = asteroid.score_value();
            state.score += points;
            state.events.push(GameEvent::AsteroidDestroyed {
                size: asteroid.size,
                pos: asteroid.pos,
                points,
            });
            fragment(&mut state.asteroids, &mut state.rng, asteroid.pos, asteroid.size);
        }

        if !ship_hit && collision::ship_hits_asteroid(&state.ship, &asteroid) {
            ship_hit = true;
            destroy_ship(state);
        }
    }
}

/// Lose a life and either respawn or end the run
fn destroy_ship(state: &mut GameState) {
    state.ship.alive = false;
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::ShipDestroyed {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {}, level {}, {} ticks",
            state.score,
            state.level,
            state.time_ticks
        );
        state.events.push(GameEvent::GameOver {
            final_score: state.score,
        });
    } else {
        log::info!("Ship destroyed, {} lives left", state.lives);
        state.ship.respawn();
    }
}
