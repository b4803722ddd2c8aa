use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply the most recent queued intent to the player paddle
///
/// The intent persists on the paddle until a new one arrives, so a held key
/// keeps the paddle moving.
pub fn ingest_inputs(world: &mut World, input: &mut InputQueue) {
    let Some(latest) = input.take_latest() else {
        return;
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Player {
            *intent = latest;
        }
    }
}

/// Turn held intents into paddle velocity for this tick
pub fn apply_intents(world: &mut World) {
    for (_entity, (paddle, intent, motion)) in
        world.query_mut::<(&Paddle, &PaddleIntent, &mut PaddleMotion)>()
    {
        motion.vy = intent.dir() * paddle.speed;
    }
}
