use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::resources::*;

/// Step a paddle toward `target` at a fixed speed, holding still inside the dead-zone
pub fn step_toward(y: f32, target: f32, speed: f32, dead_zone: f32) -> f32 {
    if y < target - dead_zone {
        speed
    } else if y > target + dead_zone {
        -speed
    } else {
        0.0
    }
}

/// Decide the computer paddle's velocity for this tick
///
/// While the ball approaches, the target is refreshed at most once per
/// reaction delay; with probability `1 - difficulty` the new target carries
/// the full error margin, otherwise only a small jitter. While the ball moves
/// away the paddle mostly holds, occasionally drifting toward the middle at
/// reduced speed.
pub fn decide_velocity(
    ai: &mut AiController,
    paddle: &Paddle,
    ball: &Ball,
    config: &Config,
    now_ms: u64,
    rng: &mut dyn RandomSource,
) -> f32 {
    let tuning = &config.ai;

    if ball.vel.x > 0.0 {
        let since_decision = now_ms.saturating_sub(ai.last_decision_ms) as f32;
        if since_decision > ai.reaction_delay_ms {
            ai.last_decision_ms = now_ms;

            let spread = if rng.next_unit() > ai.difficulty {
                ai.error_margin
            } else {
                tuning.jitter
            };
            let aim = ball.pos.y - paddle.height / 2.0 + rng.range(-spread, spread);
            ai.target_y = config.clamp_paddle_y(aim);
            log::trace!("ai retarget to {:.1} (spread {:.1})", ai.target_y, spread);
        }

        step_toward(paddle.y, ai.target_y, paddle.speed, tuning.dead_zone)
    } else if rng.chance(tuning.idle_drift_chance) {
        let center = config.arena_height / 2.0 - paddle.height / 2.0;
        ai.target_y = center + rng.range(-tuning.idle_drift_spread, tuning.idle_drift_spread);

        step_toward(
            paddle.y,
            ai.target_y,
            paddle.speed * tuning.idle_speed_factor,
            tuning.dead_zone,
        )
    } else {
        0.0
    }
}

/// Run the opponent controller for every AI-driven paddle
pub fn update_ai(world: &mut World, config: &Config, time: &Time, rng: &mut dyn RandomSource) {
    let ball = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };

    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, (paddle, ai, motion)) in
        world.query_mut::<(&Paddle, &mut AiController, &mut PaddleMotion)>()
    {
        motion.vy = decide_velocity(ai, paddle, &ball, config, time.now_ms, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup(difficulty: f32) -> (Config, AiController, Paddle) {
        let config = Config::new();
        let mut ai = AiController::new(&config.ai, 250.0, &mut SequenceRng::constant(0.0));
        ai.difficulty = difficulty;
        let paddle = Paddle::new(Side::Computer, &config);
        (config, ai, paddle)
    }

    fn approaching_ball(y: f32) -> Ball {
        Ball::new(Vec2::new(600.0, y), Vec2::new(5.0, 0.0), 150.0)
    }

    #[test]
    fn test_step_toward_respects_dead_zone() {
        assert_eq!(step_toward(100.0, 200.0, 4.0, 5.0), 4.0);
        assert_eq!(step_toward(300.0, 200.0, 4.0, 5.0), -4.0);
        assert_eq!(step_toward(196.0, 200.0, 4.0, 5.0), 0.0);
        assert_eq!(step_toward(205.0, 200.0, 4.0, 5.0), 0.0);
    }

    #[test]
    fn test_no_retarget_before_reaction_delay() {
        let (config, mut ai, paddle) = setup(1.0);
        // reaction delay is 100ms with a zero draw
        let mut rng = SequenceRng::constant(0.5);

        let vy = decide_velocity(&mut ai, &paddle, &approaching_ball(700.0), &config, 100, &mut rng);

        assert_eq!(ai.target_y, 250.0, "target unchanged inside the delay window");
        assert_eq!(vy, 0.0);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_optimal_retarget_uses_small_jitter() {
        let (config, mut ai, paddle) = setup(1.0);
        // first draw decides optimal (0.5 <= 1.0), second is the jitter (0.5 => 0)
        let mut rng = SequenceRng::constant(0.5);

        let vy = decide_velocity(&mut ai, &paddle, &approaching_ball(700.0), &config, 101, &mut rng);

        assert_eq!(ai.last_decision_ms, 101);
        assert_eq!(ai.target_y, 650.0);
        assert_eq!(vy, 4.0);
    }

    #[test]
    fn test_sloppy_retarget_uses_error_margin() {
        let (config, mut ai, paddle) = setup(0.0);
        ai.error_margin = 40.0;
        // 0.9 > difficulty => noisy; then 0.9 => +0.8 * margin
        let mut rng = SequenceRng::constant(0.9);

        decide_velocity(&mut ai, &paddle, &approaching_ball(700.0), &config, 1_000, &mut rng);

        assert!((ai.target_y - (650.0 + 32.0)).abs() < 1e-3);
    }

    #[test]
    fn test_target_is_clamped_to_arena() {
        let (config, mut ai, paddle) = setup(1.0);
        let mut rng = SequenceRng::constant(0.99);

        decide_velocity(&mut ai, &paddle, &approaching_ball(990.0), &config, 1_000, &mut rng);

        assert_eq!(ai.target_y, config.paddle_max_y());
    }

    #[test]
    fn test_idle_drift_moves_at_half_speed() {
        let (config, mut ai, mut paddle) = setup(0.75);
        paddle.y = 0.0;
        let receding = Ball::new(Vec2::new(600.0, 400.0), Vec2::new(-5.0, 0.0), 150.0);
        // 0.01 < 0.02 => drift; spread draw 0.01 => just above center - 50
        let mut rng = SequenceRng::constant(0.01);

        let vy = decide_velocity(&mut ai, &paddle, &receding, &config, 5_000, &mut rng);

        assert_eq!(vy, 2.0);
        assert!((ai.target_y - 401.0).abs() < 1e-3);
    }

    #[test]
    fn test_holds_when_ball_recedes() {
        let (config, mut ai, paddle) = setup(0.75);
        let receding = Ball::new(Vec2::new(600.0, 400.0), Vec2::new(-5.0, 0.0), 150.0);
        let mut rng = SequenceRng::constant(0.5);

        let vy = decide_velocity(&mut ai, &paddle, &receding, &config, 5_000, &mut rng);

        assert_eq!(vy, 0.0);
        assert_eq!(ai.target_y, 250.0);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let (config, mut ai, mut paddle) = setup(1.0);
        let ball = approaching_ball(500.0);
        let mut rng = SequenceRng::constant(0.5);
        let goal = 500.0 - paddle.height / 2.0;

        for tick in 0..200u64 {
            let vy = decide_velocity(&mut ai, &paddle, &ball, &config, 1_000 + tick * 16, &mut rng);
            paddle.y = config.clamp_paddle_y(paddle.y + vy);
        }

        assert!((paddle.y - goal).abs() <= 5.0, "settled at {}", paddle.y);
    }
}
