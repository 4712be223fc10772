use bevy::prelude::*;
use pathfinding::prelude::astar;

pub mod grid;

pub use grid::*;

/// Find a tile path between two world positions using A*.
///
/// Waypoints are cell centers, excluding the cell the agent already
/// stands in. A blocked goal is rerouted to the nearest free cell
/// within `goal_search_radius` rings. Empty grids, out-of-bounds
/// endpoints, and unreachable goals all yield an empty path; callers
/// treat that as "no plan this cycle", not a failure.
pub fn find_path(
    grid: &CollisionGrid,
    start: Vec2,
    goal: Vec2,
    goal_search_radius: u32,
) -> Vec<Vec2> {
    if grid.is_empty() {
        return Vec::new();
    }

    let start_cell = world_to_grid(start);
    let mut goal_cell = world_to_grid(goal);

    if !grid.in_bounds(start_cell) || !grid.in_bounds(goal_cell) {
        return Vec::new();
    }

    if !grid.is_free(goal_cell) {
        if let Some(substitute) = nearest_free_cell(grid, goal_cell, goal_search_radius) {
            debug!(
                "Goal cell ({}, {}) blocked, rerouting to ({}, {})",
                goal_cell.x, goal_cell.y, substitute.x, substitute.y
            );
            goal_cell = substitute;
        }
    }

    // The start cell's own occupancy is never tested, so an agent
    // standing inside a blocked margin can still path out of it.
    let Some((cells, _cost)) = astar(
        &start_cell,
        |cell| {
            grid.neighbors(*cell)
                .into_iter()
                .map(|neighbor| (neighbor, 1u32))
                .collect::<Vec<_>>()
        },
        |cell| cell.manhattan_distance(&goal_cell),
        |cell| *cell == goal_cell,
    ) else {
        debug!(
            "No path from ({}, {}) to ({}, {})",
            start_cell.x, start_cell.y, goal_cell.x, goal_cell.y
        );
        return Vec::new();
    };

    cells.into_iter().skip(1).map(cell_center).collect()
}

/// Scan expanding squares around `center` for the first free cell.
/// Order is fixed: radius ascending, x offset in the outer loop, y in
/// the inner, so the substitute goal is deterministic.
fn nearest_free_cell(grid: &CollisionGrid, center: GridCell, max_radius: u32) -> Option<GridCell> {
    for radius in 1..=max_radius as i32 {
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                let cell = GridCell::new(center.x + dx, center.y + dy);
                if grid.is_free(cell) {
                    return Some(cell);
                }
            }
        }
    }
    None
}
