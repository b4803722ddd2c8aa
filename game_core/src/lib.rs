pub mod components;
pub mod config;
pub mod driver;
pub mod game;
pub mod match_state;
pub mod params;
pub mod render;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use game::*;
pub use match_state::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
///
/// Integration advances by one unit of velocity per call; `time.now_ms` only
/// gates the opponent's reaction delay. Returns the side that scored, if any.
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut dyn RandomSource,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Player input, no reaction delay
    ingest_inputs(world, input);
    apply_intents(world);

    // 2. Opponent decides its velocity from the pre-move ball
    update_ai(world, config, time, rng);

    // 3. Integrate paddles and ball
    move_paddles(world, config);
    move_ball(world, config);

    // 4. Walls and paddles
    check_collisions(world, config, events);

    // 5. Ball left the arena
    check_scoring(world, config, events, rng)
}

/// Helper to create a paddle entity at its starting height
///
/// The player paddle also carries a `PaddleIntent` for keyboard input.
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(side, config);
    match side {
        Side::Player => world.spawn((paddle, PaddleMotion::default(), PaddleIntent::default())),
        Side::Computer => world.spawn((paddle, PaddleMotion::default())),
    }
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_size),))
}
