use std::collections::VecDeque;

use crate::components::{PaddleIntent, Side};

/// Frame timing for the current tick
///
/// Integration advances one unit per tick; `now_ms` is only read by the AI
/// to gate its reaction delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub tick: u64,   // Ticks executed this match
    pub now_ms: u64, // Wall clock supplied by the host for this tick
}

impl Time {
    pub fn new(now_ms: u64) -> Self {
        Self { tick: 0, now_ms }
    }

    pub fn advance(&mut self, now_ms: u64) {
        self.tick += 1;
        self.now_ms = now_ms;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub computer: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.computer >= win_score {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

/// Source of uniform randomness for the AI and serves
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform value in `[lo, hi)`
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_unit() * (hi - lo)
    }

    /// True with probability `p`
    fn chance(&mut self, p: f32) -> bool {
        self.next_unit() < p
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f32 {
        use rand::Rng;
        self.0.gen::<f32>()
    }
}

/// Replays a fixed list of unit values, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRng {
    /// Values are clamped into `[0, 1)`; an empty list always yields 0.
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source that always yields the same value
    pub fn constant(value: f32) -> Self {
        Self::new([value])
    }

    /// How many values have been drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.computer_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> Option<Side> {
        if self.player_scored {
            Some(Side::Player)
        } else if self.computer_scored {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

/// Pending player intents, drained at the start of each tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub intents: VecDeque<PaddleIntent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.intents.clear();
    }

    pub fn push(&mut self, intent: PaddleIntent) {
        self.intents.push_back(intent);
    }

    /// Drain the queue, returning the most recent intent if any arrived
    pub fn take_latest(&mut self) -> Option<PaddleIntent> {
        let latest = self.intents.back().copied();
        self.intents.clear();
        latest
    }
}
