use crate::components::NavPath;
use bevy::prelude::*;

/// Pure steering result that can be tested without the Bevy runtime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub position: Vec2,
    pub arrived: bool,
}

/// Steps `step` world units straight toward `target`, holding position
/// once within `tolerance` of it. The degenerate zero-length direction
/// also counts as arrived.
pub fn steer_toward(current: Vec2, target: Vec2, step: f32, tolerance: f32) -> Steering {
    let distance = current.distance(target);
    if distance <= tolerance {
        return Steering {
            position: current,
            arrived: true,
        };
    }

    let direction = (target - current).normalize_or_zero();
    if direction == Vec2::ZERO {
        return Steering {
            position: current,
            arrived: true,
        };
    }

    Steering {
        position: current + direction * step,
        arrived: false,
    }
}

/// Moves along a waypoint path. Arriving within `tolerance` of the
/// current waypoint advances the cursor and consumes the tick without
/// moving; an exhausted or empty path holds position.
pub fn follow_path(current: Vec2, path: &mut NavPath, step: f32, tolerance: f32) -> Vec2 {
    let Some(waypoint) = path.current_waypoint() else {
        return current;
    };

    if current.distance(waypoint) < tolerance {
        path.advance();
        return current;
    }

    let direction = (waypoint - current).normalize_or_zero();
    current + direction * step
}
