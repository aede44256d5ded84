//! Controller input events

use std::collections::VecDeque;

use crate::components::PlayerId;

/// Controller buttons, in the order controllers report their states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    Start,
    Select,
    L1,
    R1,
    L2,
    R2,
}

impl Button {
    pub const ALL: [Button; 14] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::Start,
        Button::Select,
        Button::L1,
        Button::R1,
        Button::L2,
        Button::R2,
    ];

    pub fn from_index(index: usize) -> Option<Button> {
        Self::ALL.get(index).copied()
    }
}

/// A discrete event from a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PlayerJoined { id: PlayerId },
    Disconnected { id: PlayerId },
    KeyDown { id: PlayerId, button: Button },
    KeyUp { id: PlayerId, button: Button },
    /// Held-key repeat
    KeyPressed { id: PlayerId, button: Button },
    Ping { id: PlayerId },
}

impl InputEvent {
    pub fn player(&self) -> PlayerId {
        match *self {
            InputEvent::PlayerJoined { id }
            | InputEvent::Disconnected { id }
            | InputEvent::KeyDown { id, .. }
            | InputEvent::KeyUp { id, .. }
            | InputEvent::KeyPressed { id, .. }
            | InputEvent::Ping { id } => id,
        }
    }

    /// Button traffic, as opposed to connection events
    pub fn is_key(&self) -> bool {
        matches!(
            self,
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } | InputEvent::KeyPressed { .. }
        )
    }
}

/// Anything the tick loop can drain pending events from
pub trait InputSource {
    /// Take every event that arrived since the last poll
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// In-memory event queue
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pub events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl InputSource for EventQueue {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }
}
