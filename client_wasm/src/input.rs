//! Keyboard input handling
//!
//! Maps `KeyboardEvent.code` values to driver commands. Kept free of web-sys
//! so it can be tested natively.

use game_core::PaddleIntent;

/// What a key press asks the driver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(PaddleIntent),
    Start,
    Reset,
}

/// Handle key down event
pub fn handle_key_down(code: &str) -> Option<Command> {
    match code {
        "ArrowUp" => Some(Command::Intent(PaddleIntent::Up)),
        "ArrowDown" => Some(Command::Intent(PaddleIntent::Down)),
        "Space" => Some(Command::Start),
        "KeyR" | "Enter" => Some(Command::Reset),
        _ => None,
    }
}

/// Handle key up event
///
/// Releasing either arrow stops the paddle, even if the other is still held.
pub fn handle_key_up(code: &str) -> Option<Command> {
    match code {
        "ArrowUp" | "ArrowDown" => Some(Command::Intent(PaddleIntent::Stop)),
        _ => None,
    }
}
