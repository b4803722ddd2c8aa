use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Whether the ball's vertical position falls inside a paddle's hit window
///
/// The window is shifted up by half the ball size so contact lines up with
/// the middle of the ball sprite rather than its bounding box.
pub fn in_hit_window(ball: &Ball, paddle: &Paddle) -> bool {
    let half = ball.size / 2.0;
    ball.pos.y > paddle.y - half && ball.pos.y < paddle.y + paddle.height - half
}

/// Whether the ball has reached the paddle's face on the X axis
pub fn at_paddle_face(ball: &Ball, side: Side, config: &Config) -> bool {
    match side {
        Side::Player => ball.pos.x < config.paddle_width,
        Side::Computer => ball.pos.x > config.computer_hit_x(),
    }
}

/// Check ball collisions with walls and paddles
///
/// One discrete check per tick with no sub-stepping; a fast enough ball can
/// pass through a paddle between two ticks.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls are perfectly elastic
        if ball.pos.y < 0.0 || ball.pos.y > config.arena_height - ball.size {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if at_paddle_face(ball, paddle.side, config) && in_hit_window(ball, paddle) {
                ball.vel.x = -ball.vel.x;

                // Deflect in proportion to the offset from the paddle center
                let delta_y = ball.pos.y - paddle.center_y();
                ball.vel.y = delta_y * config.deflection_factor;

                events.ball_hit_paddle = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Events) {
        (hecs::World::new(), Config::new(), Events::new())
    }

    fn ball_after(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball exists");
        *ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        let ball_vel = Vec2::new(5.0, -4.0);
        create_ball(&mut world, Vec2::new(600.0, -1.0), ball_vel, &config);

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_after(&world);
        assert_eq!(ball.vel.y, 4.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, ball_vel.x, "X velocity should be unchanged");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        let bottom = config.arena_height - config.ball_size;
        create_ball(&mut world, Vec2::new(600.0, bottom + 2.0), Vec2::new(5.0, 4.0), &config);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_after(&world).vel.y, -4.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_bounce_inside_arena() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(600.0, 0.0), Vec2::new(5.0, -4.0), &config);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_after(&world).vel.y, -4.0, "Touching the wall is not a hit");
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, &config); // y = 250, center 300
        create_ball(&mut world, Vec2::new(10.0, 240.0), Vec2::new(-5.0, 2.0), &config);

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_after(&world);
        assert_eq!(ball.vel.x, 5.0, "Ball should bounce right after hitting left paddle");
        assert!((ball.vel.y - (240.0 - 300.0) * 0.3).abs() < 1e-4);
        assert!(events.ball_hit_paddle, "Should trigger ball_hit_paddle event");
    }

    #[test]
    fn test_ball_collides_with_computer_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Computer, &config); // y = 250, center 300
        let x = config.computer_hit_x() + 3.0;
        create_ball(&mut world, Vec2::new(x, 270.0), Vec2::new(5.0, 0.0), &config);

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_after(&world);
        assert_eq!(ball.vel.x, -5.0, "Ball should bounce left after hitting right paddle");
        // Every hit inside the window sits above the paddle center, so it deflects up
        assert!((ball.vel.y + 9.0).abs() < 1e-4);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_hit_window_is_offset_by_half_ball() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Player, &config); // y = 250, height 100
        let at = |y: f32| Ball::new(Vec2::new(5.0, y), Vec2::new(-5.0, 0.0), config.ball_size);

        // Window is (250 - 75, 250 + 100 - 75) = (175, 275)
        assert!(!in_hit_window(&at(175.0), &paddle));
        assert!(in_hit_window(&at(176.0), &paddle));
        assert!(in_hit_window(&at(274.0), &paddle));
        assert!(!in_hit_window(&at(275.0), &paddle));
        assert!(!in_hit_window(&at(300.0), &paddle), "Paddle bottom half misses");
    }

    #[test]
    fn test_ball_misses_paddle_outside_window() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, &config);
        create_ball(&mut world, Vec2::new(10.0, 600.0), Vec2::new(-5.0, 1.0), &config);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_after(&world).vel.x, -5.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_far_from_paddles_is_untouched() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Computer, &config);
        create_ball(&mut world, Vec2::new(600.0, 250.0), Vec2::new(-5.0, 1.0), &config);

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_after(&world);
        assert_eq!(ball.vel, Vec2::new(-5.0, 1.0));
        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, &config);

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
