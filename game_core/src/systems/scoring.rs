use crate::{AiController, Ball, Config, Events, Paddle, RandomSource, Side};
use hecs::World;

/// Which side, if any, the ball has just scored for
pub fn detect_goal(ball: &Ball, config: &Config) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Computer)
    } else if ball.pos.x > config.arena_width {
        Some(Side::Player)
    } else {
        None
    }
}

/// Check if ball left the arena
///
/// On a goal the ball is served again from the center and the opponent draws
/// fresh per-point parameters. A player goal also sharpens the opponent.
/// Counting the point is left to the match state.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut dyn RandomSource,
) -> Option<Side> {
    let mut scored = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = detect_goal(ball, config) {
            ball.reset(config, rng);
            scored = Some(side);
        }
    }

    let side = scored?;
    match side {
        Side::Player => events.player_scored = true,
        Side::Computer => events.computer_scored = true,
    }

    for (_entity, (paddle, ai)) in world.query_mut::<(&Paddle, &mut AiController)>() {
        ai.reset_for_point(&config.ai, paddle.y, rng);
        if side == Side::Player {
            ai.ramp_difficulty(&config.ai);
            log::debug!("opponent difficulty now {:.2}", ai.difficulty);
        }
    }

    log::debug!("goal for {}", side);
    Some(side)
}
