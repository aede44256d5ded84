use tracing::debug;

use super::{draw_paddles, GameState, StateBehavior, StateKind};
use crate::canvas::{Canvas, Color};
use crate::error::GameError;
use crate::game::Game;
use crate::glyphs::draw_text_centered;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    /// Countdown before play begins
    Starting,
    /// Break after a point, showing the score
    Scored,
}

impl From<PauseKind> for StateKind {
    fn from(kind: PauseKind) -> Self {
        match kind {
            PauseKind::Starting => StateKind::Starting,
            PauseKind::Scored => StateKind::Scored,
        }
    }
}

/// A timed break that hands over to `next` once `delay` seconds have
/// passed since `entered_at`
#[derive(Debug, Clone, PartialEq)]
pub struct Pause {
    pub kind: PauseKind,
    pub entered_at: f64,
    pub delay: f32,
    pub next: StateKind,
    /// Re-serve the ball on the first update
    pub reset_ball: bool,
}

impl Pause {
    pub fn starting(now: f64, delay: f32) -> Self {
        Self {
            kind: PauseKind::Starting,
            entered_at: now,
            delay,
            next: StateKind::Running,
            reset_ball: false,
        }
    }

    pub fn scored(now: f64, delay: f32) -> Self {
        Self {
            kind: PauseKind::Scored,
            entered_at: now,
            delay,
            next: StateKind::Running,
            reset_ball: true,
        }
    }

    pub fn elapsed(&self, game: &Game) -> f32 {
        game.time.elapsed_since(self.entered_at)
    }

    /// The delay must be strictly exceeded
    pub fn is_over(&self, game: &Game) -> bool {
        self.elapsed(game) > self.delay
    }

    /// Whole seconds left, as shown on the countdown
    pub fn countdown(&self, game: &Game) -> u32 {
        (self.delay - self.elapsed(game).floor()).max(0.0) as u32
    }
}

impl StateBehavior for Pause {
    fn update(&mut self, game: &mut Game) -> Result<Option<GameState>, GameError> {
        if self.reset_ball {
            game.reset_ball();
            self.reset_ball = false;
            debug!(vel = ?game.ball.vel, "ball served");
        }
        if self.is_over(game) {
            return GameState::enter(self.next).map(Some);
        }
        Ok(None)
    }

    fn render(&self, game: &Game, canvas: &mut dyn Canvas) {
        draw_paddles(game, canvas);
        let text = match self.kind {
            PauseKind::Starting => self.countdown(game).to_string(),
            PauseKind::Scored => game.score.to_string(),
        };
        draw_text_centered(canvas, &text, game.map.center(), Color::DARK_YELLOW);
    }
}
