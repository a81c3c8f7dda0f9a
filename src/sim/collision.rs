//! Collision detection
//!
//! Everything is a circle here: bullets are points, the ship and asteroids use
//! radii derived from their size. Distances are straight-line, so objects on
//! opposite screen edges never touch across the wrap seam.

use glam::Vec2;

use super::state::{Asteroid, Bullet, Ship};
use crate::distance;

/// Whether `point` lies strictly inside the circle at `center`
#[inline]
pub fn circle_contains(center: Vec2, radius: f32, point: Vec2) -> bool {
    distance(center, point) < radius
}

/// Bullet-asteroid hit test
#[inline]
pub fn bullet_hits_asteroid(bullet: &Bullet, asteroid: &Asteroid) -> bool {
    circle_contains(asteroid.pos, asteroid.bullet_radius(), bullet.pos)
}

/// Ship-asteroid hit test, ignoring the ship's shield
#[inline]
pub fn ship_overlaps_asteroid(ship: &Ship, asteroid: &Asteroid) -> bool {
    circle_contains(asteroid.pos, asteroid.ship_radius(), ship.pos)
}

/// Ship-asteroid test honouring the invincibility window
#[inline]
pub fn ship_hits_asteroid(ship: &Ship, asteroid: &Asteroid) -> bool {
    ship.alive && !ship.is_invincible() && ship_overlaps_asteroid(ship, asteroid)
}

/// Index of the first bullet (in slot order) that hits `asteroid`
pub fn first_bullet_hit<'a>(
    bullets: impl Iterator<Item = (usize, &'a Bullet)>,
    asteroid: &Asteroid,
) -> Option<usize> {
    bullets
        .filter(|(_, bullet)| bullet.active)
        .find(|(_, bullet)| bullet_hits_asteroid(bullet, asteroid))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock(pos: Vec2, size: u8) -> Asteroid {
        Asteroid {
            pos,
            size,
            alive: true,
            ..Default::default()
        }
    }

    fn bullet(pos: Vec2) -> Bullet {
        Bullet {
            pos,
            active: true,
            lifetime: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_bullet_radius_scales_with_size() {
        let center = Vec2::new(100.0, 100.0);
        let shot = bullet(Vec2::new(125.0, 100.0));
        assert!(bullet_hits_asteroid(&shot, &rock(center, 3)));
        assert!(!bullet_hits_asteroid(&shot, &rock(center, 2)));
        // Exactly on the radius is a miss
        let edge = bullet(Vec2::new(110.0, 100.0));
        assert!(!bullet_hits_asteroid(&edge, &rock(center, 1)));
    }

    #[test]
    fn test_ship_shield_blocks_hit() {
        let target = rock(Vec2::new(400.0, 300.0), 3);
        let mut ship = Ship::default();
        assert!(ship_overlaps_asteroid(&ship, &target));
        assert!(!ship_hits_asteroid(&ship, &target));
        ship.invincible_ticks = 0;
        assert!(ship_hits_asteroid(&ship, &target));
        ship.alive = false;
        assert!(!ship_hits_asteroid(&ship, &target));
    }

    #[test]
    fn test_ship_collision_radius() {
        let mut ship = Ship {
            invincible_ticks: 0,
            ..Default::default()
        };
        let target = rock(ship.pos + Vec2::new(17.0, 0.0), 1);
        assert!(ship_hits_asteroid(&ship, &target));
        ship.pos.x -= 2.0;
        assert!(!ship_hits_asteroid(&ship, &target));
    }

    #[test]
    fn test_first_bullet_hit_prefers_lowest_slot() {
        let target = rock(Vec2::new(50.0, 50.0), 2);
        let mut spent = bullet(Vec2::new(50.0, 50.0));
        spent.active = false;
        let bullets = [
            bullet(Vec2::new(300.0, 300.0)),
            spent,
            bullet(Vec2::new(55.0, 50.0)),
            bullet(Vec2::new(50.0, 52.0)),
        ];
        assert_eq!(first_bullet_hit(bullets.iter().enumerate(), &target), Some(2));
        assert_eq!(first_bullet_hit(bullets[..2].iter().enumerate(), &target), None);
    }
}
