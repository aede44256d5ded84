use crate::{Ball, Button, GameMap, Paddle};

/// Apply a direction button to a paddle. Returns whether the button
/// steers at all; moves at the screen edge are absorbed by the clamp.
pub fn move_paddle(paddle: &mut Paddle, button: Button, map: &GameMap) -> bool {
    match button {
        Button::Up => paddle.move_up(map),
        Button::Down => paddle.move_down(map),
        _ => return false,
    }
    true
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball) {
    ball.update();
}
