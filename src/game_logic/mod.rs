pub mod behavior;
pub mod collision;
pub mod errors;
pub mod movement;
pub mod player;

pub use behavior::*;
pub use collision::*;
pub use errors::*;
pub use movement::*;
pub use player::*;
