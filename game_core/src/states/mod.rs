//! Game states and the behaviour every state implements

mod game_over;
mod pause;
mod running;
mod waiting;

use std::fmt;

pub use game_over::GameOver;
pub use pause::{Pause, PauseKind};
pub use running::Running;
pub use waiting::Waiting;

use crate::canvas::{Canvas, Color};
use crate::error::GameError;
use crate::game::Game;

/// Name of a state, used for logging and for pause targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Waiting,
    Starting,
    Running,
    Scored,
    GameOver,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateKind::Waiting => "waiting",
            StateKind::Starting => "starting",
            StateKind::Running => "running",
            StateKind::Scored => "scored",
            StateKind::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Per-tick behaviour of a state
pub trait StateBehavior {
    /// Advance one tick. `Some(next)` asks the machine to switch states.
    fn update(&mut self, game: &mut Game) -> Result<Option<GameState>, GameError>;

    /// Draw the state onto a cleared canvas
    fn render(&self, game: &Game, canvas: &mut dyn Canvas);
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    Waiting(Waiting),
    Paused(Pause),
    Running(Running),
    GameOver(GameOver),
}

impl GameState {
    pub fn waiting() -> Self {
        GameState::Waiting(Waiting)
    }

    /// Countdown before the first serve
    pub fn starting(game: &Game) -> Self {
        GameState::Paused(Pause::starting(game.time.now, game.config.start_delay))
    }

    /// Break after a point
    pub fn scored(game: &Game) -> Self {
        GameState::Paused(Pause::scored(game.time.now, game.config.score_delay))
    }

    pub fn running() -> Self {
        GameState::Running(Running)
    }

    pub fn game_over() -> Self {
        GameState::GameOver(GameOver)
    }

    /// Build a state from its name. Pauses need a timer set up by their
    /// owner and cannot be entered this way.
    pub fn enter(kind: StateKind) -> Result<Self, GameError> {
        match kind {
            StateKind::Waiting => Ok(Self::waiting()),
            StateKind::Running => Ok(Self::running()),
            StateKind::GameOver => Ok(Self::game_over()),
            StateKind::Starting | StateKind::Scored => Err(GameError::UnreachableState(kind)),
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            GameState::Waiting(_) => StateKind::Waiting,
            GameState::Paused(pause) => pause.kind.into(),
            GameState::Running(_) => StateKind::Running,
            GameState::GameOver(_) => StateKind::GameOver,
        }
    }

    fn behavior(&self) -> &dyn StateBehavior {
        match self {
            GameState::Waiting(state) => state,
            GameState::Paused(state) => state,
            GameState::Running(state) => state,
            GameState::GameOver(state) => state,
        }
    }

    fn behavior_mut(&mut self) -> &mut dyn StateBehavior {
        match self {
            GameState::Waiting(state) => state,
            GameState::Paused(state) => state,
            GameState::Running(state) => state,
            GameState::GameOver(state) => state,
        }
    }
}

impl StateBehavior for GameState {
    fn update(&mut self, game: &mut Game) -> Result<Option<GameState>, GameError> {
        self.behavior_mut().update(game)
    }

    fn render(&self, game: &Game, canvas: &mut dyn Canvas) {
        self.behavior().render(game, canvas)
    }
}

/// Paddles as vertical lines, one pixel wide
pub(crate) fn draw_paddles(game: &Game, canvas: &mut dyn Canvas) {
    for paddle in game.players.iter() {
        let top = paddle.pixel();
        let bottom = top + glam::IVec2::new(0, paddle.height.saturating_sub(1) as i32);
        canvas.draw_line(top, bottom, Color::RED);
    }
}

pub(crate) fn draw_ball(game: &Game, canvas: &mut dyn Canvas) {
    canvas.draw_dot(game.ball.pixel(), Color::GREEN);
}
