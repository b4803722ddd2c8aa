use std::fmt;

use glam::Vec2;

use crate::config::{AiTuning, Config};
use crate::resources::RandomSource;

/// Which end of the table an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human player, left edge
    Player,
    /// Scripted opponent, right edge
    Computer,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Computer => "computer",
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top offset, kept in [0, arena_height - height]
    pub height: f32,
    pub width: f32,
    pub speed: f32, // px per tick at full intent
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            y: config.paddle_start_y,
            height: config.paddle_height,
            width: config.paddle_width,
            speed: config.paddle_speed(side),
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Directional input for the player paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddleIntent {
    Up,
    Down,
    #[default]
    Stop,
}

impl PaddleIntent {
    /// -1 = up, 0 = stop, 1 = down
    pub fn dir(self) -> f32 {
        match self {
            PaddleIntent::Up => -1.0,
            PaddleIntent::Down => 1.0,
            PaddleIntent::Stop => 0.0,
        }
    }
}

/// Vertical velocity a paddle will move by this tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleMotion {
    pub vy: f32,
}

/// Ball component
///
/// `pos` is the top-left corner of the ball's bounding square.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub rotation: f32, // Radians, free running
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            rotation: 0.0,
        }
    }

    /// Ball at its opening position
    pub fn kickoff(config: &Config) -> Self {
        Self::new(config.ball_start_pos, config.ball_start_vel, config.ball_size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Serve from the center back toward the side that just conceded
    pub fn reset(&mut self, config: &Config, rng: &mut dyn RandomSource) {
        self.pos = config.ball_spawn();
        self.vel.x = -self.vel.x;
        self.vel.y = rng.range(-config.ball_serve_vy, config.ball_serve_vy);
    }

    /// Advance the cosmetic spin in proportion to linear speed
    pub fn spin(&mut self, config: &Config) {
        let scaled = self.vel / config.spin_reference_speed;
        self.rotation += config.spin_factor * scaled.length();
    }
}

/// Per-point state of the computer opponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiController {
    pub reaction_delay_ms: f32,
    pub error_margin: f32,
    pub last_decision_ms: u64,
    pub target_y: f32,
    pub difficulty: f32, // 0.0 = always sloppy, 1.0 = always near-optimal
}

impl AiController {
    pub fn new(tuning: &AiTuning, paddle_y: f32, rng: &mut dyn RandomSource) -> Self {
        let mut ai = Self {
            reaction_delay_ms: 0.0,
            error_margin: 0.0,
            last_decision_ms: 0,
            target_y: paddle_y,
            difficulty: tuning.difficulty_start,
        };
        ai.reset_for_point(tuning, paddle_y, rng);
        ai
    }

    /// Draw fresh reaction delay and error margin; difficulty is kept
    pub fn reset_for_point(&mut self, tuning: &AiTuning, paddle_y: f32, rng: &mut dyn RandomSource) {
        self.reaction_delay_ms = rng.range(tuning.reaction_delay_min_ms, tuning.reaction_delay_max_ms);
        self.error_margin = rng.range(tuning.error_margin_min, tuning.error_margin_max);
        self.last_decision_ms = 0;
        self.target_y = paddle_y;
    }

    /// Make the opponent slightly sharper; never decreases
    pub fn ramp_difficulty(&mut self, tuning: &AiTuning) {
        self.difficulty = (self.difficulty + tuning.difficulty_step).min(tuning.difficulty_max);
    }
}
