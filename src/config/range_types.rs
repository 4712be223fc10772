use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// A movement speed in world units per tick, constrained to [0.1, 20.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct MovementSpeed(f32);

impl MovementSpeed {
    const MIN: f32 = 0.1;
    const MAX: f32 = 20.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self::new(0.8)
    }
}

/// A speed multiplier constrained to [0.1, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct SpeedFactor(f32);

impl SpeedFactor {
    const MIN: f32 = 0.1;
    const MAX: f32 = 1.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for SpeedFactor {
    fn default() -> Self {
        Self::new(0.5)
    }
}

/// A detection range in world units, constrained to [10.0, 800.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct DetectionRange(f32);

impl DetectionRange {
    const MIN: f32 = 10.0;
    const MAX: f32 = 800.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for DetectionRange {
    fn default() -> Self {
        Self::new(150.0)
    }
}

/// A re-plan cooldown in ticks, constrained to [1, 600]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct ReplanCooldown(u32);

impl ReplanCooldown {
    const MIN: u32 = 1;
    const MAX: u32 = 600;

    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for ReplanCooldown {
    fn default() -> Self {
        Self::new(30)
    }
}

/// An arrival tolerance in world units, constrained to [0.5, 50.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct ArrivalTolerance(f32);

impl ArrivalTolerance {
    const MIN: f32 = 0.5;
    const MAX: f32 = 50.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for ArrivalTolerance {
    fn default() -> Self {
        Self::new(5.0)
    }
}

/// A pause duration in ticks, constrained to [1, 3600]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct PauseTicks(u32);

impl PauseTicks {
    const MIN: u32 = 1;
    const MAX: u32 = 3600;

    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PauseTicks {
    fn default() -> Self {
        Self::new(120)
    }
}

/// An edge inset in world units, constrained to [0.0, 200.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct BoundsMargin(f32);

impl BoundsMargin {
    const MIN: f32 = 0.0;
    const MAX: f32 = 200.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for BoundsMargin {
    fn default() -> Self {
        Self::new(50.0)
    }
}

/// A catch radius in world units, constrained to [1.0, 200.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct CatchRadius(f32);

impl CatchRadius {
    const MIN: f32 = 1.0;
    const MAX: f32 = 200.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for CatchRadius {
    fn default() -> Self {
        Self::new(30.0)
    }
}

/// A goal-search radius in grid cells, constrained to [1, 16]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct SearchRadius(u32);

impl SearchRadius {
    const MIN: u32 = 1;
    const MAX: u32 = 16;

    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self::new(4)
    }
}

/// A grid rebuild interval in ticks, constrained to [1, 3600]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct RebuildInterval(u32);

impl RebuildInterval {
    const MIN: u32 = 1;
    const MAX: u32 = 3600;

    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for RebuildInterval {
    fn default() -> Self {
        Self::new(60)
    }
}

/// A push strength multiplier applied to speed, constrained to [1.0, 32.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct PushStrength(f32);

impl PushStrength {
    const MIN: f32 = 1.0;
    const MAX: f32 = 32.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for PushStrength {
    fn default() -> Self {
        Self::new(8.0)
    }
}
