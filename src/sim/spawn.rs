//! Asteroid spawning, fragmentation and level setup

use glam::Vec2;
use rand::Rng;

use super::pool::Pool;
use super::state::{Asteroid, GameEvent, GameState};
use crate::consts::*;
use crate::{distance, heading_vector};

/// Spawn an asteroid of `size` at `pos` into the first free slot.
///
/// Sizes below 1 end a fragmentation chain and spawn nothing. A full pool
/// silently drops the request.
pub fn spawn_asteroid<R: Rng>(
    pool: &mut Pool<Asteroid>,
    rng: &mut R,
    pos: Vec2,
    size: u8,
) -> Option<usize> {
    if size < 1 {
        return None;
    }

    let vertex_count = rng.random_range(MIN_ASTEROID_VERTICES..=MAX_ASTEROID_VERTICES);
    let base_radius = u32::from(size) * 8;
    let jitter = u32::from(size) * 4;
    let mut vertices = [Vec2::ZERO; MAX_ASTEROID_VERTICES];
    for (j, vertex) in vertices.iter_mut().take(vertex_count).enumerate() {
        let angle = j as f32 / vertex_count as f32 * 360.0;
        let radius = (base_radius + rng.random_range(0..jitter)) as f32;
        *vertex = heading_vector(angle) * radius;
    }

    let asteroid = Asteroid {
        pos,
        vel: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
        angle: 0.0,
        rotation_speed: rng.random_range(-1.0..1.0),
        size,
        vertices,
        vertex_count,
        alive: true,
    };

    let slot = pool.claim(asteroid);
    if slot.is_none() {
        log::debug!("Asteroid pool exhausted, dropping size {} spawn", size);
    }
    slot
}

/// Break a destroyed asteroid into two independent fragments one size down
pub fn fragment<R: Rng>(pool: &mut Pool<Asteroid>, rng: &mut R, pos: Vec2, size: u8) {
    if size > 1 {
        spawn_asteroid(pool, rng, pos, size - 1);
        spawn_asteroid(pool, rng, pos, size - 1);
    }
}

/// Either just before the near edge or just past the far edge of `extent`
fn beyond_edge<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    if rng.random_bool(0.5) {
        -SPAWN_EDGE_MARGIN
    } else {
        extent + SPAWN_EDGE_MARGIN
    }
}

/// Move `candidate` out along the line from `avoid` until it sits on the safe radius
fn push_clear(candidate: Vec2, avoid: Vec2) -> Vec2 {
    let away = (candidate - avoid).try_normalize().unwrap_or(Vec2::X);
    avoid + away * SAFE_SPAWN_RADIUS
}

/// Pick a spot just off a random screen edge, at least the safe radius from `avoid`
fn safe_spawn_position<R: Rng>(rng: &mut R, avoid: Vec2) -> Vec2 {
    let mut candidate = avoid;
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        candidate = if rng.random_bool(0.5) {
            let x = beyond_edge(rng, SCREEN_WIDTH);
            Vec2::new(x, rng.random_range(0.0..SCREEN_HEIGHT))
        } else {
            let y = beyond_edge(rng, SCREEN_HEIGHT);
            Vec2::new(rng.random_range(0.0..SCREEN_WIDTH), y)
        };
        if distance(candidate, avoid) >= SAFE_SPAWN_RADIUS {
            return candidate;
        }
    }
    push_clear(candidate, avoid)
}

/// Reset the ship, clear both pools and populate the current level
pub fn setup_level(state: &mut GameState) {
    state.ship.respawn();
    state.bullets.clear();
    state.asteroids.clear();

    let count = state.level + EXTRA_ASTEROIDS_PER_LEVEL;
    for _ in 0..count {
        let pos = safe_spawn_position(&mut state.rng, state.ship.pos);
        spawn_asteroid(&mut state.asteroids, &mut state.rng, pos, LARGE_ASTEROID);
    }

    log::info!(
        "Level {}: {} asteroids, seed {}",
        state.level,
        state.asteroids.live_count(),
        state.seed
    );
    state.events.push(GameEvent::LevelStarted { level: state.level });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_spawn_shape_ranges() {
        let mut pool = Pool::new(MAX_ASTEROIDS);
        let mut rng = rng();
        for size in 1..=3u8 {
            for _ in 0..10 {
                let slot = spawn_asteroid(&mut pool, &mut rng, Vec2::new(100.0, 100.0), size);
                let rock = pool.get(slot.unwrap()).unwrap();
                assert!((MIN_ASTEROID_VERTICES..=MAX_ASTEROID_VERTICES).contains(&rock.vertex_count));
                assert!(rock.vel.x >= -1.0 && rock.vel.x < 1.0);
                assert!(rock.rotation_speed >= -1.0 && rock.rotation_speed < 1.0);
                let min = f32::from(size) * 8.0;
                let max = min + f32::from(size) * 4.0;
                for v in rock.outline() {
                    let r = v.length();
                    assert!(r >= min - 1e-3 && r < max, "radius {} outside [{}, {})", r, min, max);
                }
            }
            pool.clear();
        }
    }

    #[test]
    fn test_size_zero_spawns_nothing() {
        let mut pool = Pool::new(MAX_ASTEROIDS);
        assert_eq!(spawn_asteroid(&mut pool, &mut rng(), Vec2::ZERO, 0), None);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pool_capacity_is_respected() {
        let mut pool = Pool::new(MAX_ASTEROIDS);
        let mut rng = rng();
        for _ in 0..MAX_ASTEROIDS {
            assert!(spawn_asteroid(&mut pool, &mut rng, Vec2::ZERO, 1).is_some());
        }
        assert_eq!(spawn_asteroid(&mut pool, &mut rng, Vec2::ZERO, 1), None);
        assert_eq!(pool.live_count(), MAX_ASTEROIDS);
    }

    #[test]
    fn test_fragment_halves_size() {
        let mut pool = Pool::new(MAX_ASTEROIDS);
        let mut rng = rng();
        let pos = Vec2::new(250.0, 120.0);
        fragment(&mut pool, &mut rng, pos, 3);
        assert_eq!(pool.live_count(), 2);
        assert!(pool.iter().all(|a| a.size == 2 && a.pos == pos));

        pool.clear();
        fragment(&mut pool, &mut rng, pos, 1);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_setup_level_spawns_clear_of_ship() {
        for level in 1..=8 {
            let mut state = GameState::empty(level as u64);
            state.level = level;
            state.ship.pos = Vec2::new(10.0, 10.0);
            state.bullets.claim(crate::sim::Bullet {
                active: true,
                lifetime: 5,
                ..Default::default()
            });
            setup_level(&mut state);

            assert!(state.bullets.is_empty());
            assert_eq!(state.ship.pos, crate::screen_center());
            assert_eq!(state.asteroids.live_count() as u32, level + 3);
            for rock in state.asteroids.iter() {
                assert_eq!(rock.size, LARGE_ASTEROID);
                assert!(distance(rock.pos, state.ship.pos) >= SAFE_SPAWN_RADIUS);
            }
            assert_eq!(state.events.last(), Some(&GameEvent::LevelStarted { level }));
        }
    }

    #[test]
    fn test_push_clear_lands_on_safe_radius() {
        let avoid = Vec2::new(100.0, 100.0);
        let pushed = push_clear(Vec2::new(130.0, 140.0), avoid);
        assert!((distance(pushed, avoid) - SAFE_SPAWN_RADIUS).abs() < 1e-3);
        assert!(pushed.x > avoid.x && pushed.y > avoid.y);

        // Degenerate direction still produces a valid spot
        let pushed = push_clear(avoid, avoid);
        assert!((distance(pushed, avoid) - SAFE_SPAWN_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn test_safe_position_with_ship_near_edge() {
        let mut rng = rng();
        let avoid = Vec2::new(0.0, 0.0);
        for _ in 0..100 {
            let pos = safe_spawn_position(&mut rng, avoid);
            assert!(distance(pos, avoid) >= SAFE_SPAWN_RADIUS - 1e-3);
        }
    }
}
