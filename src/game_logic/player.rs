use bevy::prelude::*;

use crate::components::Speed;
use crate::game_logic::collision::{clamp_to_bounds, hits_solid, rects_overlap, Obstacle};
use crate::map::WorldBounds;
use crate::pathfinding::TILE_SIZE;

/// Outcome of resolving one tick of player movement.
///
/// `position` is where the player ends up this tick. `push` is set when a
/// pushable obstacle was shoved out of the way and names the obstacle's
/// index in the snapshot plus its new position, so the caller can write the
/// move back to the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerMove {
    pub position: Vec2,
    pub push: Option<BlockPush>,
}

/// A successful shove of one pushable obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPush {
    /// Index into the obstacle snapshot passed to [`resolve_move`].
    pub obstacle: usize,
    /// Top-left corner the obstacle lands on.
    pub to: Vec2,
}

/// Resolves the player's movement intent against the solid world.
///
/// The candidate position is `current + direction * speed`, with each axis
/// of `direction` in `{-1, 0, 1}`. Diagonal input is deliberately not
/// normalized, so moving diagonally covers `speed` on both axes at once.
///
/// If the candidate rectangle touches a pushable obstacle, that obstacle is
/// shoved `speed * push_strength` along the same direction. Only the first
/// overlapping pushable is considered per tick. The shove lands unless the
/// obstacle's new rectangle would overlap any other solid; a failed shove
/// cancels the whole move. Shoved obstacles are not clamped to the world,
/// only the player is.
///
/// After any shove, the candidate is tested against every solid obstacle
/// (the shoved one at its new position) and committed only when free. The
/// returned position is always clamped to the world rectangle.
///
/// # Arguments
///
/// * `current` - Player top-left corner before the move
/// * `direction` - Per-axis intent, each component in `{-1, 0, 1}`
/// * `speed` - Distance covered per tick on each active axis
/// * `push_strength` - Multiplier applied to `speed` for shove distance
/// * `obstacles` - Snapshot of the solid and pushable world
/// * `bounds` - World rectangle the player is clamped to
///
/// # Examples
///
/// ```
/// use bevy::prelude::Vec2;
/// use coinquest::components::Speed;
/// use coinquest::game_logic::player::resolve_move;
/// use coinquest::map::WorldBounds;
///
/// let bounds = WorldBounds {
///     width: 800.0,
///     height: 600.0,
/// };
/// let step = resolve_move(
///     Vec2::new(100.0, 100.0),
///     Vec2::new(1.0, 0.0),
///     Speed::new(2.0),
///     8.0,
///     &[],
///     &bounds,
/// );
/// assert_eq!(step.position, Vec2::new(102.0, 100.0));
/// assert!(step.push.is_none());
/// ```
pub fn resolve_move(
    current: Vec2,
    direction: Vec2,
    speed: Speed,
    push_strength: f32,
    obstacles: &[Obstacle],
    bounds: &WorldBounds,
) -> PlayerMove {
    let size = Vec2::splat(TILE_SIZE);

    if direction == Vec2::ZERO {
        return PlayerMove {
            position: clamp_to_bounds(current, size, bounds),
            push: None,
        };
    }

    let mut candidate = current + direction * speed;
    let mut push = None;

    for (index, block) in obstacles.iter().enumerate() {
        if !block.pushable || !rects_overlap(candidate, size, block.position, block.size) {
            continue;
        }
        let target = block.position + direction * speed * push_strength;
        let shove_blocked = obstacles.iter().enumerate().any(|(other_index, other)| {
            other_index != index
                && other.solid
                && rects_overlap(target, block.size, other.position, other.size)
        });
        if shove_blocked {
            candidate = current;
        } else {
            push = Some(BlockPush {
                obstacle: index,
                to: target,
            });
        }
        // Only one shove attempt per tick, even if more blocks overlap.
        break;
    }

    let blocked = match push {
        Some(shove) => obstacles.iter().enumerate().any(|(index, obstacle)| {
            let position = if index == shove.obstacle {
                shove.to
            } else {
                obstacle.position
            };
            obstacle.solid && rects_overlap(candidate, size, position, obstacle.size)
        }),
        None => hits_solid(candidate, size, obstacles),
    };

    PlayerMove {
        position: clamp_to_bounds(if blocked { current } else { candidate }, size, bounds),
        push,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: WorldBounds = WorldBounds {
        width: 800.0,
        height: 600.0,
    };

    fn tile(x: f32, y: f32) -> Obstacle {
        Obstacle::fixed(Vec2::new(x, y), Vec2::splat(32.0))
    }

    fn block(x: f32, y: f32) -> Obstacle {
        Obstacle::pushable(Vec2::new(x, y), Vec2::splat(32.0))
    }

    #[test]
    fn test_open_field_movement() {
        let step = resolve_move(
            Vec2::new(100.0, 100.0),
            Vec2::new(1.0, 0.0),
            Speed::new(2.0),
            8.0,
            &[],
            &BOUNDS,
        );
        assert_eq!(step.position, Vec2::new(102.0, 100.0));
        assert!(step.push.is_none());
    }

    #[test]
    fn test_diagonal_movement_is_not_normalized() {
        let step = resolve_move(
            Vec2::new(100.0, 100.0),
            Vec2::new(1.0, 1.0),
            Speed::new(2.0),
            8.0,
            &[],
            &BOUNDS,
        );
        assert_eq!(step.position, Vec2::new(102.0, 102.0));
    }

    #[test]
    fn test_zero_direction_holds_position() {
        let obstacles = vec![tile(132.0, 100.0)];
        let step = resolve_move(
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            Speed::new(2.0),
            8.0,
            &obstacles,
            &BOUNDS,
        );
        assert_eq!(step.position, Vec2::new(100.0, 100.0));
        assert!(step.push.is_none());
    }

    #[test]
    fn test_solid_obstacle_blocks_movement() {
        // Candidate rectangle [102, 134) just reaches the tile at x = 132.
        let obstacles = vec![tile(132.0, 100.0)];
        let step = resolve_move(
            Vec2::new(100.0, 100.0),
            Vec2::new(1.0, 0.0),
            Speed::new(2.0),
            8.0,
            &obstacles,
            &BOUNDS,
        );
        assert_eq!(step.position, Vec2::new(100.0, 100.0));
        assert!(step.push.is_none());
    }

    #[test]
    fn test_non_solid_prop_does_not_block() {
        let sign = Obstacle {
            position: Vec2::new(132.0, 100.0),
            size: Vec2::splat(32.0),
            solid: false,
            pushable: false,
        };
        let step = resolve_move(
            Vec2::new(100.0, 100.0),
            Vec2::new(1.0, 0.0),
            Speed::new(2.0),
            8.0,
            &[sign],
            &BOUNDS,
        );
        assert_eq!(step.position, Vec2::new(102.0, 100.0));
    }

    #[test]
    fn test_clamped_at_world_edges() {
        let step = resolve_move(
            Vec2::new(1.0, 100.0),
            Vec2::new(-1.0, 0.0),
            Speed::new(2.0),
            8.0,
            &[],
            &BOUNDS,
        );
        assert_eq!(step.position, Vec2::new(0.0, 100.0));

        let step = resolve_move(
            Vec2::new(767.0, 100.0),
            Vec2::new(1.0, 0.0),
            Speed::new(2.0),
            8.0,
            &[],
            &BOUNDS,
        );
        assert_eq!(step.position, Vec2::new(768.0, 100.0));
    }

    #[test]
    fn test_push_moves_block_ahead() {
        let obstacles = vec![block(132.0, 100.0)];
        let step = resolve_move(
            Vec2::new(100.0, 100.0),
            Vec2::new(1.0, 0.0),
            Speed::new(2.0),
            8.0,
            &obstacles,
            &BOUNDS,
        );
        assert_eq!(
            step.push,
            Some(BlockPush {
                obstacle: 0,
                to: Vec2::new(148.0, 100.0),
            })
        );
        assert_eq!(step.position, Vec2::new(102.0, 100.0));
    }

    #[test]
    fn test_push_into_wall_cancels_whole_move() {
        // The shove would land the block overlapping the tile at x = 164.
        let obstacles = vec![block(132.0, 100.0), tile(164.0, 100.0)];
        let step = resolve_move(
            Vec2::new(100.0, 100.0),
            Vec2::new(1.0, 0.0),
            Speed::new(2.0),
            8.0,
            &obstacles,
            &BOUNDS,
        );
        assert!(step.push.is_none());
        assert_eq!(step.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_push_into_second_block_cancels_move() {
        // Diagonal shove from the first block lands on the second one.
        let obstacles = vec![block(132.0, 100.0), block(132.0, 132.0)];
        let step = resolve_move(
            Vec2::new(100.0, 102.0),
            Vec2::new(1.0, 1.0),
            Speed::new(2.0),
            8.0,
            &obstacles,
            &BOUNDS,
        );
        assert!(step.push.is_none());
        assert_eq!(step.position, Vec2::new(100.0, 102.0));
    }

    #[test]
    fn test_pushed_block_may_leave_world() {
        // Blocks are not clamped, only the player is.
        let obstacles = vec![block(776.0, 100.0)];
        let step = resolve_move(
            Vec2::new(746.0, 100.0),
            Vec2::new(1.0, 0.0),
            Speed::new(2.0),
            8.0,
            &obstacles,
            &BOUNDS,
        );
        assert_eq!(
            step.push,
            Some(BlockPush {
                obstacle: 0,
                to: Vec2::new(792.0, 100.0),
            })
        );
        assert_eq!(step.position, Vec2::new(748.0, 100.0));
    }
}
