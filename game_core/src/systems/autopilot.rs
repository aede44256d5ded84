use crate::{Ball, Button, Game, GameMap, InputEvent, Paddle, Params, PlayerId, Side};

/// Button a computer player would hold this tick, if any.
///
/// While the ball approaches, the paddle tracks the height at which the
/// ball will cross its column, folding wall bounces into the prediction.
/// Otherwise it drifts back to the middle of the screen.
pub fn autopilot_button(paddle: &Paddle, ball: &Ball, map: &GameMap) -> Option<Button> {
    let approaching = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };

    let target_y = if approaching {
        let time_to_reach = ((paddle.pos.x - ball.pos.x) / ball.vel.x).max(0.0);
        fold_into_screen(ball.pos.y + ball.vel.y * time_to_reach, map.bottom_edge())
    } else {
        map.ball_spawn().y
    };

    let diff = target_y - paddle.center_y();
    if diff > Params::DEMO_DEADZONE {
        Some(Button::Down)
    } else if diff < -Params::DEMO_DEADZONE {
        Some(Button::Up)
    } else {
        None
    }
}

/// Reflect a predicted row back into `[0, bottom]` the way the walls would
fn fold_into_screen(y: f32, bottom: f32) -> f32 {
    if bottom <= 0.0 {
        return 0.0;
    }
    let period = 2.0 * bottom;
    let folded = y.rem_euclid(period);
    if folded > bottom {
        period - folded
    } else {
        folded
    }
}

/// Held-key events steering the given players' paddles
pub fn autopilot_events(game: &Game, ids: &[PlayerId]) -> Vec<InputEvent> {
    ids.iter()
        .filter_map(|&id| {
            let paddle = game.players.get(id)?;
            let button = autopilot_button(paddle, &game.ball, &game.map)?;
            Some(InputEvent::KeyPressed { id, button })
        })
        .collect()
}
