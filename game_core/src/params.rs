/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (pixels)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;
    pub const WALL_SIZE: f32 = 20.0;
    pub const COURT_MARGIN_X: f32 = 12.0;
    pub const COURT_MARGIN_Y: f32 = 4.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 48.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 100.0; // per axis, before acceleration
    pub const BALL_ACCELERATION: f32 = 3.0;

    // Opponent
    pub const AI_REACTION_DISTANCE: f32 = 250.0;
    pub const AI_TOLERANCE: f32 = 10.0;
    pub const AI_STEP: f32 = 5.0; // pixels per tick

    // Score
    pub const WIN_SCORE: u32 = 7; // First to 7 wins

    // Timing
    pub const FPS: u32 = 60;

    // Start button
    pub const BUTTON_WIDTH: f32 = 120.0;
    pub const BUTTON_HEIGHT: f32 = 40.0;
}
