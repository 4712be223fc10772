use crate::game_logic::collision::Obstacle;
use bevy::prelude::*;

/// Edge length of one square tile in world units.
pub const TILE_SIZE: f32 = 32.0;

/// Neighbor offsets in scan order: south, east, north, west.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A single cell in the collision grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell (A* heuristic)
    pub fn manhattan_distance(&self, other: &GridCell) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }
}

/// Convert a world position to the cell containing it.
///
/// # Examples
///
/// ```
/// use bevy::prelude::Vec2;
/// use coinquest::pathfinding::grid::{world_to_grid, GridCell};
///
/// assert_eq!(world_to_grid(Vec2::new(70.0, 35.0)), GridCell::new(2, 1));
/// ```
pub fn world_to_grid(pos: Vec2) -> GridCell {
    GridCell::new(
        (pos.x / TILE_SIZE).floor() as i32,
        (pos.y / TILE_SIZE).floor() as i32,
    )
}

/// Top-left corner of a cell in world space
pub fn grid_to_world(cell: GridCell) -> Vec2 {
    Vec2::new(cell.x as f32 * TILE_SIZE, cell.y as f32 * TILE_SIZE)
}

/// Center of a cell in world space, where path waypoints land
pub fn cell_center(cell: GridCell) -> Vec2 {
    grid_to_world(cell) + Vec2::splat(TILE_SIZE / 2.0)
}

/// Tile occupancy for the whole world. Rebuilt wholesale whenever the
/// world topology changes; never patched in place.
#[derive(Debug, Clone, PartialEq, Resource)]
pub struct CollisionGrid {
    pub width: i32,
    pub height: i32,
    pub blocked: Vec<bool>,
}

impl CollisionGrid {
    /// Build occupancy from an obstacle snapshot. Each solid obstacle
    /// stamps the 4x4 block of cells from one tile before its anchor
    /// through two tiles after, which keeps paths clear of sprite edges
    /// and covers 2x2 props without per-obstacle footprint data.
    pub fn build(obstacles: &[Obstacle], world_width: f32, world_height: f32) -> Self {
        let width = (world_width / TILE_SIZE).floor().max(0.0) as i32;
        let height = (world_height / TILE_SIZE).floor().max(0.0) as i32;
        let mut grid = Self {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
        };

        for obstacle in obstacles {
            if !obstacle.solid {
                continue;
            }
            let anchor = world_to_grid(obstacle.position);
            if !grid.in_bounds(anchor) {
                continue;
            }
            for dx in -1..=2 {
                for dy in -1..=2 {
                    grid.set_blocked(GridCell::new(anchor.x + dx, anchor.y + dy), true);
                }
            }
        }

        debug!(
            "Collision grid rebuilt: {blocked}/{total} cells blocked",
            blocked = grid.blocked_count(),
            total = grid.blocked.len()
        );

        grid
    }

    pub fn in_bounds(&self, cell: GridCell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Whether a cell can be walked through. Out-of-bounds counts as
    /// blocked.
    pub fn is_free(&self, cell: GridCell) -> bool {
        if !self.in_bounds(cell) {
            return false;
        }
        let index = (cell.y * self.width + cell.x) as usize;
        !self.blocked.get(index).copied().unwrap_or(true)
    }

    /// Mark a single cell. Writes outside the grid are ignored.
    pub fn set_blocked(&mut self, cell: GridCell, value: bool) {
        if !self.in_bounds(cell) {
            return;
        }
        let index = (cell.y * self.width + cell.x) as usize;
        if let Some(slot) = self.blocked.get_mut(index) {
            *slot = value;
        }
    }

    /// Walkable neighbors of a cell in fixed scan order.
    pub fn neighbors(&self, cell: GridCell) -> Vec<GridCell> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|(dx, dy)| GridCell::new(cell.x + dx, cell.y + dy))
            .filter(|neighbor| self.is_free(*neighbor))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}
