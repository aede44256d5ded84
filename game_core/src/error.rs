//! Error types for the game core

use thiserror::Error;

use crate::components::PlayerId;
use crate::states::StateKind;

/// Errors raised by the game core. None of them are fatal to the tick loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown reflection axis '{0}'")]
    InvalidAxis(String),

    #[error("no paddle for player {0}")]
    UnknownPlayer(PlayerId),

    #[error("state {0} cannot be entered without its timer")]
    UnreachableState(StateKind),

    #[error("screen {width}x{height} is too small for a paddle of height {paddle_height}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        paddle_height: u32,
    },
}
