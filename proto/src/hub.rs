use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use game_core::{Button, InputEvent, Params, PlayerId};
use tracing::{debug, info};

use crate::{ProtocolError, BUTTON_COUNT, C2S, S2C};

/// A registered controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    /// Where replies go: the sender's IP with its announced port
    pub reply_addr: SocketAddr,
    pub buttons: [bool; BUTTON_COUNT],
    pub last_seen: Instant,
}

/// Result of handling one datagram
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Handled {
    pub events: Vec<InputEvent>,
    pub reply: Option<(SocketAddr, S2C)>,
}

/// Turns controller datagrams into input events and remembers who is
/// connected
#[derive(Debug, Clone)]
pub struct ControllerHub {
    controllers: HashMap<PlayerId, Controller>,
    next_id: u32,
    timeout: Duration,
}

impl ControllerHub {
    /// Ids are handed out counting up from `first_id`
    pub fn new(first_id: u32) -> Self {
        Self {
            controllers: HashMap::new(),
            next_id: first_id,
            timeout: Duration::from_secs(Params::CONTROLLER_TIMEOUT_SECS),
        }
    }

    /// Forget controllers after `timeout` without a datagram
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Controller> {
        self.controllers.get(&id)
    }

    /// Handle a datagram received from `from`
    pub fn handle_datagram(
        &mut self,
        bytes: &[u8],
        from: SocketAddr,
    ) -> Result<Handled, ProtocolError> {
        self.handle_datagram_at(bytes, from, Instant::now())
    }

    /// Handle a datagram that arrived at `now`. Once it is accepted,
    /// controllers silent for longer than the timeout are dropped and
    /// reported as disconnected ahead of the datagram's own events.
    pub fn handle_datagram_at(
        &mut self,
        bytes: &[u8],
        from: SocketAddr,
        now: Instant,
    ) -> Result<Handled, ProtocolError> {
        let msg = C2S::from_bytes(bytes)?;
        let mut handled = self.handle_message(msg, from, now)?;
        let mut events = self.prune_stale(now);
        if !events.is_empty() {
            events.append(&mut handled.events);
            handled.events = events;
        }
        Ok(handled)
    }

    /// Drop controllers not heard from within the timeout
    pub fn prune_stale(&mut self, now: Instant) -> Vec<InputEvent> {
        let timeout = self.timeout;
        let mut stale: Vec<PlayerId> = self
            .controllers
            .iter()
            .filter(|(_, c)| now.saturating_duration_since(c.last_seen) > timeout)
            .map(|(&id, _)| id)
            .collect();
        stale.sort();

        for &id in &stale {
            self.controllers.remove(&id);
            info!(controller = %id, "controller timed out");
        }
        stale
            .into_iter()
            .map(|id| InputEvent::Disconnected { id })
            .collect()
    }

    pub fn handle_message(
        &mut self,
        msg: C2S,
        from: SocketAddr,
        now: Instant,
    ) -> Result<Handled, ProtocolError> {
        match msg {
            C2S::New { reply_port } => {
                Ok(self.register(SocketAddr::new(from.ip(), reply_port), now))
            }
            C2S::Ping { id, reply_port } => {
                let controller = self.controller_mut(id)?;
                controller.reply_addr = SocketAddr::new(from.ip(), reply_port);
                controller.last_seen = now;
                Ok(Handled {
                    events: vec![InputEvent::Ping { id }],
                    reply: None,
                })
            }
            C2S::Bye { id } => {
                self.controllers
                    .remove(&id)
                    .ok_or(ProtocolError::UnknownController(id))?;
                info!(controller = %id, "controller disconnected");
                Ok(Handled {
                    events: vec![InputEvent::Disconnected { id }],
                    reply: None,
                })
            }
            C2S::States { id, buttons } => {
                let controller = self.controller_mut(id)?;
                let events = diff_buttons(id, &controller.buttons, &buttons);
                controller.buttons = buttons;
                controller.last_seen = now;
                Ok(Handled {
                    events,
                    reply: None,
                })
            }
        }
    }

    /// A known address keeps its id and asks for a seat again; the game
    /// ignores the join if that id is already playing.
    fn register(&mut self, reply_addr: SocketAddr, now: Instant) -> Handled {
        let known = self
            .controllers
            .iter_mut()
            .find(|(_, c)| c.reply_addr == reply_addr);

        if let Some((&id, controller)) = known {
            controller.last_seen = now;
            debug!(controller = %id, %reply_addr, "controller registered again");
            return Handled {
                events: vec![InputEvent::PlayerJoined { id }],
                reply: Some((reply_addr, S2C::Uid { id })),
            };
        }

        let id = PlayerId(self.next_id);
        self.next_id += 1;
        self.controllers.insert(
            id,
            Controller {
                reply_addr,
                buttons: [false; BUTTON_COUNT],
                last_seen: now,
            },
        );
        info!(controller = %id, %reply_addr, "new controller");

        Handled {
            events: vec![InputEvent::PlayerJoined { id }],
            reply: Some((reply_addr, S2C::Uid { id })),
        }
    }

    fn controller_mut(&mut self, id: PlayerId) -> Result<&mut Controller, ProtocolError> {
        self.controllers
            .get_mut(&id)
            .ok_or(ProtocolError::UnknownController(id))
    }
}

/// Key events between two button snapshots, in button order
fn diff_buttons(
    id: PlayerId,
    old: &[bool; BUTTON_COUNT],
    new: &[bool; BUTTON_COUNT],
) -> Vec<InputEvent> {
    Button::ALL
        .iter()
        .zip(old.iter().zip(new.iter()))
        .filter_map(|(&button, (&was, &is))| match (was, is) {
            (false, true) => Some(InputEvent::KeyDown { id, button }),
            (true, false) => Some(InputEvent::KeyUp { id, button }),
            (true, true) => Some(InputEvent::KeyPressed { id, button }),
            (false, false) => None,
        })
        .collect()
}
