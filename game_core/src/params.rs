/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: f32 = 1330.0;
    pub const ARENA_HEIGHT: f32 = 1000.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_START_Y: f32 = 250.0;
    pub const PLAYER_PADDLE_SPEED: f32 = 8.0; // px per tick
    pub const COMPUTER_PADDLE_SPEED: f32 = 4.0; // px per tick

    // Ball
    pub const BALL_SIZE: f32 = 150.0;
    pub const BALL_START_X: f32 = 400.0;
    pub const BALL_START_Y: f32 = 300.0;
    pub const BALL_START_VX: f32 = 5.0;
    pub const BALL_START_VY: f32 = 5.0;
    pub const BALL_SERVE_VY: f32 = 4.0; // serve vy drawn from [-4, 4)
    pub const DEFLECTION_FACTOR: f32 = 0.3; // vy per px of offset from paddle center
    pub const SPIN_FACTOR: f32 = 0.03; // radians per tick at reference speed
    pub const SPIN_REFERENCE_SPEED: f32 = 15.0;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // AI
    pub const AI_REACTION_DELAY_MIN_MS: f32 = 100.0;
    pub const AI_REACTION_DELAY_MAX_MS: f32 = 600.0;
    pub const AI_ERROR_MARGIN_MIN: f32 = 20.0;
    pub const AI_ERROR_MARGIN_MAX: f32 = 80.0;
    pub const AI_JITTER: f32 = 10.0;
    pub const AI_DEAD_ZONE: f32 = 5.0;
    pub const AI_IDLE_DRIFT_CHANCE: f32 = 0.02;
    pub const AI_IDLE_DRIFT_SPREAD: f32 = 50.0;
    pub const AI_IDLE_SPEED_FACTOR: f32 = 0.5;
    pub const AI_DIFFICULTY_START: f32 = 0.75;
    pub const AI_DIFFICULTY_STEP: f32 = 0.02; // added every time the player scores
    pub const AI_DIFFICULTY_MAX: f32 = 0.9;
}
