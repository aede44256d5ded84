/// Game tuning parameters for Matelight Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (one Matelight crate)
    pub const SCREEN_WIDTH: u32 = 15;
    pub const SCREEN_HEIGHT: u32 = 16;

    // Paddle
    pub const PADDLE_HEIGHT: u32 = 3;
    pub const PADDLE_STEP: f32 = 1.0; // pixels per move event

    // Ball
    pub const BALL_SPEED_X: f32 = 0.8; // pixels per tick
    pub const BALL_SPEED_Y: f32 = 0.3;

    // Collision tolerance on the x axis, covers the ball step size
    pub const PADDLE_REACH: f32 = 1.0;

    // State timers (seconds)
    pub const START_DELAY: f32 = 3.0;
    pub const SCORE_DELAY: f32 = 2.0;

    // Score: a player wins once their score is strictly above this
    pub const WIN_THRESHOLD: u32 = 2;

    // Loop
    pub const TICK_RATE: u32 = 15;

    // Network
    pub const DISPLAY_PORT: u16 = 1337;
    pub const CONTROLLER_PORT: u16 = 1338;
    pub const CONTROLLER_TIMEOUT_SECS: u64 = 60; // silence before a controller is forgotten

    // Demo mode
    pub const DEMO_PLAYERS: [u32; 2] = [1, 2];
    pub const DEMO_DEADZONE: f32 = 0.5;
}
