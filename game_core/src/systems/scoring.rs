use crate::{Ball, GameMap, Score, Side};

/// Check if ball reached a goal edge. The point goes to the side that did
/// not let the ball pass; returns that side.
pub fn check_scoring(ball: &Ball, map: &GameMap, score: &mut Score) -> Option<Side> {
    let scorer = map.goal_reached(ball.pos)?.opponent();
    score.increment(scorer);
    Some(scorer)
}
