use glam::IVec2;

use super::{GameState, StateBehavior};
use crate::canvas::{Canvas, Color};
use crate::components::Side;
use crate::error::GameError;
use crate::game::Game;
use crate::glyphs::draw_text;

/// Lobby: waits until both paddles are taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Waiting;

impl StateBehavior for Waiting {
    fn update(&mut self, game: &mut Game) -> Result<Option<GameState>, GameError> {
        if game.players.is_full() {
            return Ok(Some(GameState::starting(game)));
        }
        Ok(None)
    }

    fn render(&self, game: &Game, canvas: &mut dyn Canvas) {
        let labels = [
            (Side::Left, "P0", IVec2::new(0, 2)),
            (Side::Right, "P1", IVec2::new(8, 2)),
        ];
        for (side, text, origin) in labels {
            let color = if game.players.is_seated(side) {
                Color::GREEN
            } else {
                Color::GREY
            };
            draw_text(canvas, text, origin, color);
        }
    }
}
