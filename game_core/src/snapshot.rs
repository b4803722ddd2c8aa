//! Read-only view of the simulation handed to the renderer each frame

use crate::components::Side;
use crate::match_state::Phase;
use crate::resources::Events;

/// Ball as the renderer needs it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallView {
    pub x: f32, // Top-left corner
    pub y: f32,
    pub size: f32,
    pub rotation: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub ball: BallView,
    pub player_y: f32,
    pub computer_y: f32,
    pub player_score: u8,
    pub computer_score: u8,
    pub phase: Phase,
    pub winner: Option<Side>, // Only set when phase is Over
    pub events: Events,
    pub tick: u64,
}

impl Snapshot {
    pub fn winner_label(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Over => self.winner.map(Side::label),
            _ => None,
        }
    }

    pub fn score(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player_score,
            Side::Computer => self.computer_score,
        }
    }
}
