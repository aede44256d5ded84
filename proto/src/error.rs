use game_core::PlayerId;
use thiserror::Error;

/// Errors for datagrams that cannot be turned into input events
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("datagram is not valid UTF-8")]
    NotUtf8,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("invalid controller id '{0}'")]
    InvalidId(String),

    #[error("invalid port '{0}'")]
    InvalidPort(String),

    #[error("invalid button states '{0}'")]
    InvalidStates(String),

    #[error("controller {0} is not registered")]
    UnknownController(PlayerId),
}
