//! Wire formats for Matelight Pong
//!
//! Controllers talk a small text protocol over UDP; the display takes one
//! raw RGB frame per datagram.

pub mod error;
pub mod frame;
pub mod hub;

pub use error::ProtocolError;
pub use hub::{ControllerHub, Handled};

use std::fmt;

use game_core::{Button, PlayerId};

/// Number of buttons a controller reports in its states message
pub const BUTTON_COUNT: usize = Button::ALL.len();

// ============================================================================
// C2S Messages (Controller to Server)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum C2S {
    /// Register; the server answers on `reply_port`
    New { reply_port: u16 },

    /// Keep-alive, also updates the reply port
    Ping { id: PlayerId, reply_port: u16 },

    /// Controller is going away
    Bye { id: PlayerId },

    /// Full button snapshot, in `Button::ALL` order
    States {
        id: PlayerId,
        buttons: [bool; BUTTON_COUNT],
    },
}

// ============================================================================
// S2C Messages (Server to Controller)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum S2C {
    /// Id assigned to a newly registered controller
    Uid { id: PlayerId },
}

// ============================================================================
// Text encoding
// ============================================================================

impl C2S {
    /// Parse a controller datagram
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        let text = std::str::from_utf8(bytes).map_err(|_| ProtocolError::NotUtf8)?;
        text.trim_end_matches(['\0', '\n', '\r']).parse()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl std::str::FromStr for C2S {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ProtocolError::UnknownCommand(s.to_string());
        let parts: Vec<&str> = s
            .strip_prefix("/controller/")
            .ok_or_else(unknown)?
            .split('/')
            .collect();

        match parts.as_slice() {
            ["new", port] => Ok(C2S::New {
                reply_port: parse_port(port)?,
            }),
            [id, "ping", port] => Ok(C2S::Ping {
                id: parse_id(id)?,
                reply_port: parse_port(port)?,
            }),
            [id, "kthxbye"] => Ok(C2S::Bye { id: parse_id(id)? }),
            [id, "states", bits] => Ok(C2S::States {
                id: parse_id(id)?,
                buttons: parse_buttons(bits)?,
            }),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for C2S {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            C2S::New { reply_port } => write!(f, "/controller/new/{reply_port}"),
            C2S::Ping { id, reply_port } => write!(f, "/controller/{id}/ping/{reply_port}"),
            C2S::Bye { id } => write!(f, "/controller/{id}/kthxbye"),
            C2S::States { id, buttons } => {
                let bits: String = buttons.iter().map(|&b| if b { '1' } else { '0' }).collect();
                write!(f, "/controller/{id}/states/{bits}")
            }
        }
    }
}

impl S2C {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        let text = std::str::from_utf8(bytes).map_err(|_| ProtocolError::NotUtf8)?;
        match text.trim_end().strip_prefix("/uid/") {
            Some(id) => Ok(S2C::Uid { id: parse_id(id)? }),
            None => Err(ProtocolError::UnknownCommand(text.to_string())),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for S2C {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            S2C::Uid { id } => write!(f, "/uid/{id}"),
        }
    }
}

fn parse_id(s: &str) -> Result<PlayerId, ProtocolError> {
    s.parse()
        .map(PlayerId)
        .map_err(|_| ProtocolError::InvalidId(s.to_string()))
}

fn parse_port(s: &str) -> Result<u16, ProtocolError> {
    s.parse()
        .map_err(|_| ProtocolError::InvalidPort(s.to_string()))
}

fn parse_buttons(bits: &str) -> Result<[bool; BUTTON_COUNT], ProtocolError> {
    let invalid = || ProtocolError::InvalidStates(bits.to_string());
    if bits.len() != BUTTON_COUNT {
        return Err(invalid());
    }

    let mut buttons = [false; BUTTON_COUNT];
    for (pressed, bit) in buttons.iter_mut().zip(bits.chars()) {
        *pressed = match bit {
            '0' => false,
            '1' => true,
            _ => return Err(invalid()),
        };
    }
    Ok(buttons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new() {
        let msg = C2S::from_bytes(b"/controller/new/1339").unwrap();
        assert_eq!(msg, C2S::New { reply_port: 1339 });
    }

    #[test]
    fn test_parse_ping_and_bye() {
        assert_eq!(
            "/controller/4/ping/2000".parse::<C2S>().unwrap(),
            C2S::Ping {
                id: PlayerId(4),
                reply_port: 2000
            }
        );
        assert_eq!(
            "/controller/4/kthxbye".parse::<C2S>().unwrap(),
            C2S::Bye { id: PlayerId(4) }
        );
    }

    #[test]
    fn test_parse_states() {
        let msg = C2S::from_bytes(b"/controller/2/states/01000000000001\n").unwrap();
        let C2S::States { id, buttons } = msg else {
            panic!("Message type mismatch");
        };
        assert_eq!(id, PlayerId(2));
        assert!(!buttons[0], "Up released");
        assert!(buttons[1], "Down held");
        assert!(buttons[13], "R2 held");
        assert_eq!(buttons.iter().filter(|&&b| b).count(), 2);
    }

    #[test]
    fn test_text_form_matches_parser() {
        let mut buttons = [false; BUTTON_COUNT];
        buttons[0] = true;
        let msg = C2S::States {
            id: PlayerId(9),
            buttons,
        };
        assert_eq!(msg.to_string(), "/controller/9/states/10000000000000");
        assert_eq!(C2S::from_bytes(&msg.to_bytes()).unwrap(), msg);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            C2S::from_bytes(b"/display/new/1"),
            Err(ProtocolError::UnknownCommand("/display/new/1".to_string()))
        );
        assert_eq!(
            C2S::from_bytes(b"/controller/abc/kthxbye"),
            Err(ProtocolError::InvalidId("abc".to_string()))
        );
        assert_eq!(
            C2S::from_bytes(b"/controller/new/99999"),
            Err(ProtocolError::InvalidPort("99999".to_string()))
        );
        assert_eq!(
            C2S::from_bytes(b"/controller/1/states/0102"),
            Err(ProtocolError::InvalidStates("0102".to_string()))
        );
        assert_eq!(C2S::from_bytes(&[0xff, 0xfe]), Err(ProtocolError::NotUtf8));
    }

    #[test]
    fn test_uid_reply() {
        let reply = S2C::Uid { id: PlayerId(3) };
        assert_eq!(reply.to_bytes(), b"/uid/3".to_vec());
        assert_eq!(S2C::from_bytes(b"/uid/3").unwrap(), reply);
    }
}
