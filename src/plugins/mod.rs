pub mod player;
pub mod simulation;
pub mod world;

pub use player::*;
pub use simulation::*;
pub use world::*;
