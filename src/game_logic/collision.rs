use crate::map::WorldBounds;
use bevy::prelude::*;

/// Flat snapshot of one world prop, rebuilt from the ECS each cycle so
/// the collision routines never borrow entity storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vec2,
    pub size: Vec2,
    pub solid: bool,
    pub pushable: bool,
}

impl Obstacle {
    /// A solid, immovable obstacle.
    pub fn fixed(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            solid: true,
            pushable: false,
        }
    }

    /// A solid obstacle the player can shove around.
    pub fn pushable(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            solid: true,
            pushable: true,
        }
    }
}

/// Axis-aligned rectangle overlap with exclusive edges: rectangles that
/// merely touch do not collide.
///
/// # Examples
///
/// ```
/// use bevy::prelude::Vec2;
/// use coinquest::game_logic::rects_overlap;
///
/// let tile = Vec2::splat(32.0);
/// assert!(rects_overlap(Vec2::ZERO, tile, Vec2::new(16.0, 16.0), tile));
/// assert!(!rects_overlap(Vec2::ZERO, tile, Vec2::new(32.0, 0.0), tile));
/// ```
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// True when the rectangle at `pos` intersects any solid obstacle.
pub fn hits_solid(pos: Vec2, size: Vec2, obstacles: &[Obstacle]) -> bool {
    obstacles
        .iter()
        .any(|obstacle| obstacle.solid && rects_overlap(pos, size, obstacle.position, obstacle.size))
}

/// Keeps a rectangle of the given size fully inside the world.
pub fn clamp_to_bounds(pos: Vec2, size: Vec2, bounds: &WorldBounds) -> Vec2 {
    Vec2::new(
        pos.x.clamp(0.0, bounds.width - size.x),
        pos.y.clamp(0.0, bounds.height - size.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: Vec2 = Vec2::splat(32.0);

    #[test]
    fn test_overlap_requires_intersection_on_both_axes() {
        // Overlapping on x only
        assert!(!rects_overlap(
            Vec2::ZERO,
            TILE,
            Vec2::new(16.0, 40.0),
            TILE
        ));
        // Overlapping on y only
        assert!(!rects_overlap(
            Vec2::ZERO,
            TILE,
            Vec2::new(40.0, 16.0),
            TILE
        ));
        // Overlapping on both
        assert!(rects_overlap(
            Vec2::ZERO,
            TILE,
            Vec2::new(16.0, 16.0),
            TILE
        ));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        assert!(!rects_overlap(Vec2::ZERO, TILE, Vec2::new(32.0, 0.0), TILE));
        assert!(!rects_overlap(Vec2::ZERO, TILE, Vec2::new(0.0, 32.0), TILE));
    }

    #[test]
    fn test_hits_solid_ignores_non_solid() {
        let obstacles = vec![
            Obstacle {
                position: Vec2::new(10.0, 10.0),
                size: TILE,
                solid: false,
                pushable: false,
            },
            Obstacle::fixed(Vec2::new(100.0, 100.0), TILE),
        ];
        assert!(!hits_solid(Vec2::new(10.0, 10.0), TILE, &obstacles));
        assert!(hits_solid(Vec2::new(90.0, 90.0), TILE, &obstacles));
    }

    #[test]
    fn test_clamp_keeps_rect_inside_world() {
        let bounds = WorldBounds {
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(
            clamp_to_bounds(Vec2::new(-5.0, 300.0), TILE, &bounds),
            Vec2::new(0.0, 300.0)
        );
        assert_eq!(
            clamp_to_bounds(Vec2::new(790.0, 590.0), TILE, &bounds),
            Vec2::new(768.0, 568.0)
        );
        assert_eq!(
            clamp_to_bounds(Vec2::new(400.0, 300.0), TILE, &bounds),
            Vec2::new(400.0, 300.0)
        );
    }
}
