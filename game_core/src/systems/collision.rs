use crate::{Axis, Ball, GameMap, Players, Side};

/// What the ball touched during a collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collisions {
    pub paddle: Option<Side>,
    pub wall: bool,
}

/// Check ball collisions with paddles and walls. Both checks run every
/// tick, so a ball hitting a paddle in a corner reflects on both axes.
pub fn check_collisions(ball: &mut Ball, players: &Players, map: &GameMap) -> Collisions {
    let mut hits = Collisions::default();

    if let Some(paddle) = players.iter().find(|p| p.check_collision(ball)) {
        ball.reflect(Axis::X);
        hits.paddle = Some(paddle.side);
    }

    if map.wall_reached(ball.pos) {
        ball.reflect(Axis::Y);
        hits.wall = true;
    }

    hits
}
