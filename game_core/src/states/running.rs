use tracing::info;

use super::{draw_ball, draw_paddles, GameState, StateBehavior};
use crate::canvas::Canvas;
use crate::error::GameError;
use crate::game::Game;
use crate::systems::{check_collisions, check_scoring, move_ball};

/// Ball in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Running;

impl StateBehavior for Running {
    fn update(&mut self, game: &mut Game) -> Result<Option<GameState>, GameError> {
        // A goal ends the rally before anything moves or bounces
        if let Some(scorer) = check_scoring(&game.ball, &game.map, &mut game.score) {
            info!(?scorer, score = %game.score, "point scored");
            if let Some(winner) = game.score.has_winner(game.config.win_threshold) {
                info!(?winner, score = %game.score, "game won");
                return Ok(Some(GameState::game_over()));
            }
            return Ok(Some(GameState::scored(game)));
        }

        check_collisions(&mut game.ball, &game.players, &game.map);
        move_ball(&mut game.ball);
        Ok(None)
    }

    fn render(&self, game: &Game, canvas: &mut dyn Canvas) {
        draw_paddles(game, canvas);
        draw_ball(game, canvas);
    }
}
