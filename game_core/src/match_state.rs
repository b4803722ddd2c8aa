//! Match State Machine
//!
//! Tracks the score and the Idle -> Playing -> Over lifecycle of one match.

use crate::components::Side;
use crate::resources::Score;

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the start signal
    Idle,
    /// Ticks execute
    Playing,
    /// A side reached the win score
    Over,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    GameOver,
    Reset,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_phase: Phase,
    to_phase: Phase,
    action: MatchAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn from_phase(&self) -> Phase {
        self.from_phase
    }

    pub fn to_phase(&self) -> Phase {
        self.to_phase
    }

    pub fn action(&self) -> MatchAction {
        self.action
    }
}

/// Score and phase of the current match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    phase: Phase,
    score: Score,
    winner: Option<Side>,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            score: Score::new(),
            winner: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Winner, only once the match is over
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Over => self.winner,
            _ => None,
        }
    }

    pub fn winner_label(&self) -> Option<&'static str> {
        self.winner().map(Side::label)
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_phase(action).is_some()
    }

    /// Attempt a transition
    ///
    /// Illegal actions leave the phase untouched and report `success: false`.
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_phase = self.phase;

        let Some(next_phase) = self.get_next_phase(action) else {
            log::debug!("ignored {:?} while {:?}", action, from_phase);
            return TransitionResult {
                success: false,
                from_phase,
                to_phase: from_phase,
                action,
            };
        };

        if action == MatchAction::Reset {
            self.score = Score::new();
            self.winner = None;
        }
        self.phase = next_phase;
        log::info!("match {:?} -> {:?}", from_phase, next_phase);

        TransitionResult {
            success: true,
            from_phase,
            to_phase: next_phase,
            action,
        }
    }

    /// Count a goal; ends the match when a side reaches `win_score`
    ///
    /// Returns the winner if this goal decided the match. Goals outside
    /// `Playing` are ignored.
    pub fn record_goal(&mut self, side: Side, win_score: u8) -> Option<Side> {
        if self.phase != Phase::Playing {
            return None;
        }

        self.score.increment(side);
        let winner = self.score.has_winner(win_score)?;
        self.winner = Some(winner);
        self.transition(MatchAction::GameOver);
        log::info!(
            "{} wins {}-{}",
            winner,
            self.score.get(winner),
            self.score.get(winner.opponent())
        );
        Some(winner)
    }

    /// Get next phase for a given action (if valid)
    fn get_next_phase(&self, action: MatchAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::Idle, MatchAction::Start) => Some(Phase::Playing),
            (Phase::Playing, MatchAction::GameOver) => Some(Phase::Over),
            (_, MatchAction::Reset) => Some(Phase::Idle),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
