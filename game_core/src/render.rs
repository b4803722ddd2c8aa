//! Renderer-agnostic draw list built from a snapshot
//!
//! The shell executes these on whatever surface it has. Whether the ball
//! sprite loaded only changes how the ball is drawn, never the simulation.

use glam::Vec2;

use crate::config::Config;
use crate::snapshot::Snapshot;

/// Flat colors used by the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn css(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

/// Availability of the ball image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteStatus {
    Ready,
    #[default]
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
        color: Color,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: f32,
        gap: f32,
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    /// Ball image centered at `center`, rotated by `rotation` radians
    Sprite {
        center: Vec2,
        size: f32,
        rotation: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

const CENTER_LINE_DASH: f32 = 10.0;

/// Commands for one frame, back to front
pub fn frame_commands(snapshot: &Snapshot, config: &Config, sprite: SpriteStatus) -> Vec<DrawCommand> {
    let width = config.arena_width;
    let height = config.arena_height;
    let ball = &snapshot.ball;
    let ball_center = Vec2::new(ball.x + ball.size / 2.0, ball.y + ball.size / 2.0);

    let ball_cmd = match sprite {
        SpriteStatus::Ready => DrawCommand::Sprite {
            center: ball_center,
            size: ball.size,
            rotation: ball.rotation,
        },
        SpriteStatus::Missing => DrawCommand::Circle {
            center: ball_center,
            radius: ball.size / 2.0,
            color: Color::White,
        },
    };

    vec![
        DrawCommand::Clear {
            width,
            height,
            color: Color::Black,
        },
        DrawCommand::DashedLine {
            from: Vec2::new(width / 2.0, 0.0),
            to: Vec2::new(width / 2.0, height),
            dash: CENTER_LINE_DASH,
            gap: CENTER_LINE_DASH,
            color: Color::White,
        },
        DrawCommand::Rect {
            x: 0.0,
            y: snapshot.player_y,
            width: config.paddle_width,
            height: config.paddle_height,
            color: Color::White,
        },
        DrawCommand::Rect {
            x: width - config.paddle_width,
            y: snapshot.computer_y,
            width: config.paddle_width,
            height: config.paddle_height,
            color: Color::White,
        },
        ball_cmd,
    ]
}
