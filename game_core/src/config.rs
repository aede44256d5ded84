use glam::Vec2;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_height: u32,
    /// Per-tick ball speed magnitude on each axis; signs are randomized on reset
    pub ball_speed: Vec2,
    pub start_delay: f32,
    pub score_delay: f32,
    pub win_threshold: u32,
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_height: Params::PADDLE_HEIGHT,
            ball_speed: Vec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
            start_delay: Params::START_DELAY,
            score_delay: Params::SCORE_DELAY,
            win_threshold: Params::WIN_THRESHOLD,
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds between two ticks at the configured rate
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}
