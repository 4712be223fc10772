use crate::pathfinding::grid::TILE_SIZE;
use bevy::prelude::*;
use derive_more::{Add, Display, From, Mul};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Mul, Display, From)]
pub struct Speed(pub f32);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Add, Mul, Display, From)]
pub struct Distance(pub f32);

impl Speed {
    pub fn new(value: f32) -> Self {
        Self(value.max(0.0))
    }
    pub const ZERO: Speed = Speed(0.0);
}

impl Distance {
    pub fn new(value: f32) -> Self {
        Self(value.max(0.0))
    }
    pub const ZERO: Distance = Distance(0.0);
}

// Custom math operations for Vec2 * Speed
impl std::ops::Mul<Speed> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: Speed) -> Self::Output {
        self * rhs.0
    }
}

// Custom math operations for f32 comparisons
impl PartialOrd<f32> for Distance {
    fn partial_cmp(&self, other: &f32) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

impl PartialEq<f32> for Distance {
    fn eq(&self, other: &f32) -> bool {
        self.0 == *other
    }
}

/// An ordered list of world-space waypoints with a cursor marking the
/// next one to visit. The cursor never exceeds the waypoint count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavPath {
    waypoints: Vec<Vec2>,
    cursor: usize,
}

impl NavPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole path and rewinds the cursor. Paths are never
    /// edited in place; a re-plan swaps the entire list.
    pub fn set(&mut self, waypoints: Vec<Vec2>) {
        self.waypoints = waypoints;
        self.cursor = 0;
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.cursor = 0;
    }

    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.cursor).copied()
    }

    pub fn advance(&mut self) {
        if self.cursor < self.waypoints.len() {
            self.cursor += 1;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.waypoints.len()
    }

    pub fn final_destination(&self) -> Option<Vec2> {
        self.waypoints.last().copied()
    }

    pub fn current_index(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

/// How an agent decides where to go. Each mode carries only its own
/// state so switching modes cannot leak stale data.
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    Static,
    Chase { detection_range: Distance },
    Patrol { points: Vec<Vec2>, current: usize },
    Wander { target: Vec2, countdown: u32 },
}

impl Behavior {
    pub fn label(&self) -> &'static str {
        match self {
            Behavior::Static => "static",
            Behavior::Chase { .. } => "chase",
            Behavior::Patrol { .. } => "patrol",
            Behavior::Wander { .. } => "wander",
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Npc {
    pub name: String,
    pub speed: Speed,
    pub behavior: Behavior,
    pub path: NavPath,
    pub replan_cooldown: u32,
    pub hostile: bool,
    pub visible: bool,
}

impl Npc {
    pub fn new(name: &str, speed: Speed, behavior: Behavior) -> Self {
        Self {
            name: name.to_string(),
            speed,
            behavior,
            path: NavPath::new(),
            replan_cooldown: 0,
            hostile: false,
            visible: true,
        }
    }
}

#[derive(Component)]
pub struct Player {
    pub speed: Speed,
}

/// Kinds of world props. Everything that occupies space in the world
/// besides the player and the agents is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropKind {
    Tree,
    House,
    ShopSign,
    Chest,
    Block,
}

impl PropKind {
    /// Solid props block movement and stamp the collision grid.
    pub fn is_solid(self) -> bool {
        !matches!(self, PropKind::ShopSign)
    }

    /// Axis-aligned collision footprint in world units.
    pub fn footprint(self) -> Vec2 {
        match self {
            PropKind::House => Vec2::splat(TILE_SIZE * 2.0),
            _ => Vec2::splat(TILE_SIZE),
        }
    }

    pub fn is_pushable(self) -> bool {
        matches!(self, PropKind::Block)
    }

    pub fn is_container(self) -> bool {
        matches!(self, PropKind::Chest)
    }

    pub fn label(self) -> &'static str {
        match self {
            PropKind::Tree => "tree",
            PropKind::House => "house",
            PropKind::ShopSign => "shop sign",
            PropKind::Chest => "chest",
            PropKind::Block => "block",
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Prop {
    pub kind: PropKind,
}

/// Present on container props. An open container stops blocking
/// movement and drops out of the collision grid.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Container {
    pub open: bool,
}
