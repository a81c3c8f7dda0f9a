//! Shape generation for the vector line-art
//!
//! Pure geometry: everything here returns screen-space points or rects and
//! never touches a [`Renderer`](super::Renderer).

use glam::Vec2;

use super::Rect;
use crate::consts::{SCREEN_WIDTH, SHIP_SIZE};
use crate::sim::{Asteroid, Ship};

/// Angle (radians) from the nose to each rear corner of the hull
const HULL_CORNER_ANGLE: f32 = 2.5;

/// Segment thickness and length of a score digit
const SEG_THICKNESS: i32 = 3;
const SEG_LENGTH: i32 = 12;
/// Horizontal distance between digit origins
const DIGIT_ADVANCE: i32 = SEG_LENGTH + 4;
/// Padding between the requested origin and the first segment
const DIGIT_INSET: i32 = 5;

/// Lit segments per digit, bit order: top, upper-left, upper-right, middle,
/// lower-left, lower-right, bottom
const DIGIT_SEGMENTS: [u8; 10] = [
    0b1110111, // 0
    0b0010010, // 1
    0b1011101, // 2
    0b1011011, // 3
    0b0111010, // 4
    0b1101011, // 5
    0b1101111, // 6
    0b1010010, // 7
    0b1111111, // 8
    0b1111011, // 9
];

/// Ship hull: nose, left corner, tail notch, right corner
pub fn ship_outline(ship: &Ship) -> [Vec2; 4] {
    let a = ship.heading.to_radians();
    [
        ship.pos + Vec2::from_angle(a) * SHIP_SIZE,
        ship.pos + Vec2::from_angle(a + HULL_CORNER_ANGLE) * SHIP_SIZE * 0.8,
        ship.pos - Vec2::from_angle(a) * SHIP_SIZE * 0.5,
        ship.pos + Vec2::from_angle(a - HULL_CORNER_ANGLE) * SHIP_SIZE * 0.8,
    ]
}

/// Spare-life icon `index`, counted leftwards from the top-right corner
pub fn life_icon(index: u32) -> [Vec2; 5] {
    let right = SCREEN_WIDTH - 30.0 - index as f32 * 30.0;
    [
        Vec2::new(right, 10.0),
        Vec2::new(right - 20.0, 30.0),
        Vec2::new(right - 10.0, 25.0),
        Vec2::new(right, 30.0),
        Vec2::new(right, 10.0),
    ]
}

/// Asteroid outline in screen space, rotated by its cosmetic angle
pub fn asteroid_outline(asteroid: &Asteroid) -> impl Iterator<Item = Vec2> + '_ {
    let rotation = Vec2::from_angle(asteroid.angle.to_radians());
    asteroid
        .outline()
        .iter()
        .map(move |v| asteroid.pos + rotation.rotate(*v))
}

/// Filled rects for one seven-segment digit (values above 9 draw nothing)
pub fn digit_rects(digit: u8, x: i32, y: i32) -> impl Iterator<Item = Rect> {
    let mask = DIGIT_SEGMENTS.get(usize::from(digit)).copied().unwrap_or(0);
    let (x, y) = (x + DIGIT_INSET, y + DIGIT_INSET);
    let (t, l) = (SEG_THICKNESS, SEG_LENGTH);
    let segments = [
        Rect::new(x, y, l, t),
        Rect::new(x, y, t, l),
        Rect::new(x + l - t, y, t, l),
        Rect::new(x, y + l - t, l, t),
        Rect::new(x, y + l, t, l),
        Rect::new(x + l - t, y + l, t, l),
        Rect::new(x, y + 2 * l - t, l, t),
    ];
    segments
        .into_iter()
        .enumerate()
        .filter(move |(i, _)| mask & (0b1000000 >> i) != 0)
        .map(|(_, rect)| rect)
}

/// Filled rects for `number` in decimal, most significant digit at `x`
pub fn number_rects(number: u32, x: i32, y: i32) -> impl Iterator<Item = Rect> {
    let count = number.checked_ilog10().unwrap_or(0) + 1;
    (0..count).flat_map(move |i| {
        let digit = (number / 10u32.pow(count - 1 - i) % 10) as u8;
        digit_rects(digit, x + i as i32 * DIGIT_ADVANCE, y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-3
    }

    #[test]
    fn test_ship_points_up_at_spawn() {
        let ship = Ship::default();
        let [nose, left, tail, right] = ship_outline(&ship);
        assert!(close(nose, ship.pos + Vec2::new(0.0, -SHIP_SIZE)));
        assert!(close(tail, ship.pos + Vec2::new(0.0, SHIP_SIZE * 0.5)));
        // Rear corners are mirror images across the heading
        assert!((left.y - right.y).abs() < 1e-3);
        assert!((left.x - ship.pos.x + right.x - ship.pos.x).abs() < 1e-3);
    }

    #[test]
    fn test_life_icons_step_left() {
        assert_eq!(life_icon(0)[0], Vec2::new(SCREEN_WIDTH - 30.0, 10.0));
        assert_eq!(life_icon(2)[0], Vec2::new(SCREEN_WIDTH - 90.0, 10.0));
        let icon = life_icon(1);
        assert_eq!(icon[0], icon[4]);
    }

    #[test]
    fn test_asteroid_outline_rotates_about_centre() {
        let mut asteroid = Asteroid {
            pos: Vec2::new(100.0, 100.0),
            size: 1,
            vertex_count: 2,
            alive: true,
            ..Default::default()
        };
        asteroid.vertices[0] = Vec2::new(10.0, 0.0);
        asteroid.vertices[1] = Vec2::new(0.0, 10.0);

        let points: Vec<Vec2> = asteroid_outline(&asteroid).collect();
        assert_eq!(points.len(), 2);
        assert!(close(points[0], Vec2::new(110.0, 100.0)));

        asteroid.angle = 90.0;
        let points: Vec<Vec2> = asteroid_outline(&asteroid).collect();
        assert!(close(points[0], Vec2::new(100.0, 110.0)));
        assert!(close(points[1], Vec2::new(90.0, 100.0)));
    }

    #[test]
    fn test_segment_counts() {
        let lit: Vec<usize> = (0..10).map(|d| digit_rects(d, 0, 0).count()).collect();
        assert_eq!(lit, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
        assert_eq!(digit_rects(10, 0, 0).count(), 0);
    }

    #[test]
    fn test_digit_one_is_right_side_only() {
        let rects: Vec<Rect> = digit_rects(1, 0, 0).collect();
        assert!(rects.iter().all(|r| r.x == DIGIT_INSET + SEG_LENGTH - SEG_THICKNESS));
    }

    #[test]
    fn test_number_layout() {
        // "0" is drawn for a zero score
        assert_eq!(number_rects(0, 10, 5).count(), 6);

        // 120 -> digits 1, 2, 0 spaced one advance apart
        let rects: Vec<Rect> = number_rects(120, 10, 5).collect();
        assert_eq!(rects.len(), 2 + 5 + 6);
        // The leading "1" only lights its right-hand segments
        let first_x = rects.iter().map(|r| r.x).min();
        assert_eq!(first_x, Some(10 + DIGIT_INSET + SEG_LENGTH - SEG_THICKNESS));
        assert!(rects.iter().any(|r| r.x >= 10 + 2 * DIGIT_ADVANCE));
    }
}
