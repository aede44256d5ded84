//! Matelight Pong game core: entities, physics, the game state machine
//! and the drawing surface it renders into.

pub mod canvas;
pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod glyphs;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod states;
pub mod systems;

pub use canvas::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use game::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use states::*;
pub use systems::*;
