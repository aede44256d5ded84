use std::fmt;
use std::str::FromStr;

use glam::{IVec2, Vec2};
use rand::Rng;
use tracing::warn;

use crate::error::GameError;
use crate::map::GameMap;
use crate::params::Params;
use crate::resources::GameRng;

/// Controller-assigned player identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which screen edge a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // first player, x = 0
    Right, // second player, x = width - 1
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Slot index in the player table
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Axis a velocity component is reflected on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl FromStr for Axis {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            other => Err(GameError::InvalidAxis(other.to_string())),
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Advance one tick. Bounds are the caller's concern.
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce by negating the velocity component of `axis`
    pub fn reflect(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.vel.x = -self.vel.x,
            Axis::Y => self.vel.y = -self.vel.y,
        }
    }

    /// Reflect on an axis given by name; unknown names leave the velocity untouched
    pub fn reflect_named(&mut self, axis: &str) -> Result<(), GameError> {
        match axis.parse::<Axis>() {
            Ok(axis) => {
                self.reflect(axis);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "ignoring reflection");
                Err(err)
            }
        }
    }

    /// Reset ball to `spawn` heading in a random diagonal direction
    pub fn reset(&mut self, spawn: Vec2, speed: Vec2, rng: &mut GameRng) {
        self.pos = spawn;

        let x_sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let y_sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(speed.x.abs() * x_sign, speed.y.abs() * y_sign);
    }

    /// Display pixel, rounded from the sub-pixel position
    pub fn pixel(&self) -> IVec2 {
        self.pos.round().as_ivec2()
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub player_id: PlayerId,
    pub pos: Vec2, // top pixel of the paddle
    pub height: u32,
    pub side: Side,
}

impl Paddle {
    /// Create a paddle at its home position
    pub fn new(player_id: PlayerId, side: Side, height: u32, map: &GameMap) -> Self {
        Self {
            player_id,
            pos: Self::home(side, height, map),
            height,
            side,
        }
    }

    /// Middle of the home edge, kept on screen for tall paddles
    fn home(side: Side, height: u32, map: &GameMap) -> Vec2 {
        let home = map.paddle_home(side);
        Vec2::new(home.x, map.clamp_paddle_y(home.y, height))
    }

    pub fn is_first_player(&self) -> bool {
        self.side == Side::Left
    }

    pub fn move_up(&mut self, map: &GameMap) {
        self.pos.y = map.clamp_paddle_y(self.pos.y - Params::PADDLE_STEP, self.height);
    }

    pub fn move_down(&mut self, map: &GameMap) {
        self.pos.y = map.clamp_paddle_y(self.pos.y + Params::PADDLE_STEP, self.height);
    }

    /// Axis-aligned hit test. The paddle is one pixel wide; x is matched
    /// within one pixel so a fast ball cannot step over it. The lower edge
    /// is exclusive.
    pub fn check_collision(&self, ball: &Ball) -> bool {
        let x_hit = (self.pos.x - ball.pos.x).abs() <= Params::PADDLE_REACH;
        let y_hit = self.pos.y <= ball.pos.y && ball.pos.y < self.pos.y + self.height as f32;
        x_hit && y_hit
    }

    /// Move back to the middle of the home edge
    pub fn reset(&mut self, map: &GameMap) {
        self.pos = Self::home(self.side, self.height, map);
    }

    /// Top pixel for drawing
    pub fn pixel(&self) -> IVec2 {
        self.pos.round().as_ivec2()
    }

    /// Centre row, used by the autopilot
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height as f32 / 2.0
    }
}
