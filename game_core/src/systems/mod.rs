pub mod autopilot;
pub mod collision;
pub mod movement;
pub mod scoring;

pub use autopilot::*;
pub use collision::*;
pub use movement::*;
pub use scoring::*;
