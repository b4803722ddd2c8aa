use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
///
/// Fixed for the lifetime of a match; every system borrows it read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_start_y: f32,
    pub player_paddle_speed: f32,
    pub computer_paddle_speed: f32,
    pub ball_size: f32,
    pub ball_start_pos: Vec2,
    pub ball_start_vel: Vec2,
    pub ball_serve_vy: f32,
    pub deflection_factor: f32,
    pub spin_factor: f32,
    pub spin_reference_speed: f32,
    pub win_score: u8,
    pub ai: AiTuning,
}

/// Knobs for the computer opponent
#[derive(Debug, Clone)]
pub struct AiTuning {
    pub reaction_delay_min_ms: f32,
    pub reaction_delay_max_ms: f32,
    pub error_margin_min: f32,
    pub error_margin_max: f32,
    pub jitter: f32,
    pub dead_zone: f32,
    pub idle_drift_chance: f32,
    pub idle_drift_spread: f32,
    pub idle_speed_factor: f32,
    pub difficulty_start: f32,
    pub difficulty_step: f32,
    pub difficulty_max: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            reaction_delay_min_ms: Params::AI_REACTION_DELAY_MIN_MS,
            reaction_delay_max_ms: Params::AI_REACTION_DELAY_MAX_MS,
            error_margin_min: Params::AI_ERROR_MARGIN_MIN,
            error_margin_max: Params::AI_ERROR_MARGIN_MAX,
            jitter: Params::AI_JITTER,
            dead_zone: Params::AI_DEAD_ZONE,
            idle_drift_chance: Params::AI_IDLE_DRIFT_CHANCE,
            idle_drift_spread: Params::AI_IDLE_DRIFT_SPREAD,
            idle_speed_factor: Params::AI_IDLE_SPEED_FACTOR,
            difficulty_start: Params::AI_DIFFICULTY_START,
            difficulty_step: Params::AI_DIFFICULTY_STEP,
            difficulty_max: Params::AI_DIFFICULTY_MAX,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_start_y: Params::PADDLE_START_Y,
            player_paddle_speed: Params::PLAYER_PADDLE_SPEED,
            computer_paddle_speed: Params::COMPUTER_PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_start_pos: Vec2::new(Params::BALL_START_X, Params::BALL_START_Y),
            ball_start_vel: Vec2::new(Params::BALL_START_VX, Params::BALL_START_VY),
            ball_serve_vy: Params::BALL_SERVE_VY,
            deflection_factor: Params::DEFLECTION_FACTOR,
            spin_factor: Params::SPIN_FACTOR,
            spin_reference_speed: Params::SPIN_REFERENCE_SPEED,
            win_score: Params::WIN_SCORE,
            ai: AiTuning::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest legal paddle top offset
    pub fn paddle_max_y(&self) -> f32 {
        self.arena_height - self.paddle_height
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    /// Get the left edge X of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => 0.0,
            Side::Computer => self.arena_width - self.paddle_width,
        }
    }

    /// Ball X beyond which the computer paddle can return it
    pub fn computer_hit_x(&self) -> f32 {
        self.arena_width - self.paddle_width - self.ball_size
    }

    /// Ball position after a goal: arena center minus half the ball size
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.ball_size / 2.0,
            self.arena_height / 2.0 - self.ball_size / 2.0,
        )
    }

    pub fn paddle_speed(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_paddle_speed,
            Side::Computer => self.computer_paddle_speed,
        }
    }
}
