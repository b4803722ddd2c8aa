use crate::{Ball, Config, Paddle, PaddleMotion};
use hecs::World;

/// Apply paddle velocity for this tick, clamped to the arena
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, motion)) in world.query_mut::<(&mut Paddle, &PaddleMotion)>() {
        paddle.y = config.clamp_paddle_y(paddle.y + motion.vy);
    }
}

/// Move ball by one tick of velocity and advance its spin
pub fn move_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
        ball.spin(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_paddle_moves_by_velocity() {
        let mut world = World::new();
        let config = Config::new();
        let player = create_paddle(&mut world, Side::Player, &config);
        world.get::<&mut PaddleMotion>(player).unwrap().vy = 8.0;

        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(player).unwrap().y, 258.0);
    }

    #[test]
    fn test_paddle_clamped_at_top_and_bottom() {
        let mut world = World::new();
        let config = Config::new();
        let player = create_paddle(&mut world, Side::Player, &config);
        let computer = create_paddle(&mut world, Side::Computer, &config);
        world.get::<&mut Paddle>(player).unwrap().y = 3.0;
        world.get::<&mut PaddleMotion>(player).unwrap().vy = -8.0;
        world.get::<&mut Paddle>(computer).unwrap().y = 898.0;
        world.get::<&mut PaddleMotion>(computer).unwrap().vy = 4.0;

        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(player).unwrap().y, 0.0);
        assert_eq!(world.get::<&Paddle>(computer).unwrap().y, 900.0);
    }

    #[test]
    fn test_ball_moves_one_velocity_per_tick() {
        let mut world = World::new();
        let config = Config::new();
        let ball = create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(5.0, -3.0), &config);

        move_ball(&mut world, &config);
        move_ball(&mut world, &config);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, Vec2::new(410.0, 294.0));
        assert!(ball.rotation > 0.0, "Ball should spin while moving");
    }
}
