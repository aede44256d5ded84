use super::{GameState, StateBehavior};
use crate::canvas::Canvas;
use crate::error::GameError;
use crate::game::Game;

/// End of a match: everything is reset and a new countdown starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOver;

impl StateBehavior for GameOver {
    fn update(&mut self, game: &mut Game) -> Result<Option<GameState>, GameError> {
        game.reset_ball();
        game.reset_paddles();
        game.reset_scores();
        Ok(Some(GameState::starting(game)))
    }

    fn render(&self, _game: &Game, _canvas: &mut dyn Canvas) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, GameMap, GameRng, PlayerId, Score, StateKind};
    use glam::Vec2;

    #[test]
    fn test_game_over_resets_everything() {
        let mut game = Game::new(GameMap::default(), Config::default(), GameRng::new(1));
        game.construct_player(PlayerId(1));
        game.construct_player(PlayerId(2));
        game.score = Score { left: 3, right: 1 };
        game.ball.pos = Vec2::new(14.5, 0.0);
        for paddle in game.players.iter_mut() {
            paddle.pos.y = 0.0;
        }

        let next = GameOver.update(&mut game).unwrap();

        assert_eq!(next.map(|s| s.kind()), Some(StateKind::Starting));
        assert_eq!(game.score, Score::new());
        assert_eq!(game.ball.pos, game.map.ball_spawn());
        for paddle in game.players.iter() {
            assert_eq!(paddle.pos, game.map.paddle_home(paddle.side));
        }
        assert_eq!(game.players.len(), 2, "Players stay seated");
    }
}
