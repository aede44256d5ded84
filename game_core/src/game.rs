use glam::Vec2;
use tracing::{debug, info};

use crate::components::{Ball, Paddle, PlayerId};
use crate::config::Config;
use crate::error::GameError;
use crate::input::InputEvent;
use crate::map::GameMap;
use crate::resources::{GameRng, Players, Score, Time};
use crate::systems::move_paddle;

/// Everything a match consists of. States borrow it mutably on every call.
pub struct Game {
    pub map: GameMap,
    pub config: Config,
    pub players: Players,
    pub ball: Ball,
    pub score: Score,
    pub time: Time,
    pub rng: GameRng,
}

impl Game {
    pub fn new(map: GameMap, config: Config, rng: GameRng) -> Self {
        let mut game = Self {
            map,
            config,
            players: Players::new(),
            ball: Ball::new(map.ball_spawn(), Vec2::ZERO),
            score: Score::new(),
            time: Time::default(),
            rng,
        };
        game.reset_ball();
        game
    }

    /// Seat a new controller. Returns false when the id is already playing
    /// or both paddles are taken.
    pub fn construct_player(&mut self, id: PlayerId) -> bool {
        match self.players.join(id, self.config.paddle_height, &self.map) {
            Some(paddle) => {
                info!(player = %id, side = ?paddle.side, "new controller joined");
                true
            }
            None => {
                debug!(player = %id, "join ignored");
                false
            }
        }
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Option<Paddle> {
        let removed = self.players.remove(id);
        if let Some(paddle) = &removed {
            info!(player = %id, side = ?paddle.side, "controller left");
        }
        removed
    }

    /// Put the ball back in the centre with a fresh random direction
    pub fn reset_ball(&mut self) {
        let spawn = self.map.ball_spawn();
        self.ball.reset(spawn, self.config.ball_speed, &mut self.rng);
    }

    pub fn reset_paddles(&mut self) {
        self.players.reset_all(&self.map);
    }

    pub fn reset_scores(&mut self) {
        self.score.reset();
    }

    /// Apply a single controller event
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), GameError> {
        match event {
            InputEvent::PlayerJoined { id } => {
                self.construct_player(id);
            }
            InputEvent::Disconnected { id } => {
                self.remove_player(id).ok_or(GameError::UnknownPlayer(id))?;
            }
            InputEvent::KeyDown { id, button } | InputEvent::KeyPressed { id, button } => {
                let paddle = self
                    .players
                    .get_mut(id)
                    .ok_or(GameError::UnknownPlayer(id))?;
                move_paddle(paddle, button, &self.map);
            }
            InputEvent::KeyUp { id, .. } => {
                if !self.players.contains(id) {
                    return Err(GameError::UnknownPlayer(id));
                }
            }
            InputEvent::Ping { id } => {
                debug!(player = %id, "ping");
            }
        }
        Ok(())
    }
}
