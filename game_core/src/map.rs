use glam::Vec2;

use crate::components::Side;
use crate::error::GameError;
use crate::params::Params;

/// Screen geometry of the Matelight the game is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMap {
    pub width: u32,
    pub height: u32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self {
            width: Params::SCREEN_WIDTH,
            height: Params::SCREEN_HEIGHT,
        }
    }
}

impl GameMap {
    /// Create a map, rejecting screens that cannot hold two paddles and a ball
    pub fn new(width: u32, height: u32, paddle_height: u32) -> Result<Self, GameError> {
        if width < 3 || height < paddle_height.max(2) {
            return Err(GameError::InvalidDimensions {
                width,
                height,
                paddle_height,
            });
        }
        Ok(Self { width, height })
    }

    /// Rightmost pixel column
    pub fn right_edge(&self) -> f32 {
        self.width as f32 - 1.0
    }

    /// Bottom pixel row
    pub fn bottom_edge(&self) -> f32 {
        self.height as f32 - 1.0
    }

    /// Ball spawn point (screen centre)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }

    /// Home position of the paddle on the given side
    pub fn paddle_home(&self, side: Side) -> Vec2 {
        let middle = (self.height / 2) as f32 - 1.0;
        let x = match side {
            Side::Left => 0.0,
            Side::Right => self.right_edge(),
        };
        Vec2::new(x, middle.max(0.0))
    }

    /// Clamp a paddle's top row so the whole paddle stays on screen
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: u32) -> f32 {
        let max_y = self.height.saturating_sub(paddle_height) as f32;
        y.clamp(0.0, max_y)
    }

    /// Side whose goal the ball has reached, if any
    pub fn goal_reached(&self, pos: Vec2) -> Option<Side> {
        if pos.x <= 0.0 {
            Some(Side::Left)
        } else if pos.x >= self.right_edge() {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Whether the ball touches the top or bottom wall
    pub fn wall_reached(&self, pos: Vec2) -> bool {
        pos.y <= 0.0 || pos.y >= self.bottom_edge()
    }

    /// Pixel centre used to centre text and countdowns
    pub fn center(&self) -> glam::IVec2 {
        glam::IVec2::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_rejects_tiny_screens() {
        assert!(GameMap::new(2, 16, 3).is_err(), "Too narrow");
        assert!(GameMap::new(15, 2, 3).is_err(), "Shorter than a paddle");
        assert!(GameMap::new(15, 16, 3).is_ok());
    }

    #[test]
    fn test_map_paddle_home() {
        let map = GameMap::default();
        assert_eq!(map.paddle_home(Side::Left), Vec2::new(0.0, 7.0));
        assert_eq!(map.paddle_home(Side::Right), Vec2::new(14.0, 7.0));
    }

    #[test]
    fn test_map_clamp_paddle_y() {
        let map = GameMap::default();
        assert_eq!(map.clamp_paddle_y(-1.0, 3), 0.0);
        assert_eq!(map.clamp_paddle_y(14.0, 3), 13.0);
        assert_eq!(map.clamp_paddle_y(6.0, 3), 6.0);
    }

    #[test]
    fn test_map_goal_reached() {
        let map = GameMap::default();
        assert_eq!(map.goal_reached(Vec2::new(0.0, 5.0)), Some(Side::Left));
        assert_eq!(map.goal_reached(Vec2::new(-0.3, 5.0)), Some(Side::Left));
        assert_eq!(map.goal_reached(Vec2::new(14.0, 5.0)), Some(Side::Right));
        assert_eq!(map.goal_reached(Vec2::new(0.5, 5.0)), None);
        assert_eq!(map.goal_reached(Vec2::new(13.9, 5.0)), None);
    }

    #[test]
    fn test_map_wall_reached() {
        let map = GameMap::default();
        assert!(map.wall_reached(Vec2::new(5.0, 0.0)));
        assert!(map.wall_reached(Vec2::new(5.0, 15.2)));
        assert!(!map.wall_reached(Vec2::new(5.0, 7.5)));
    }
}
