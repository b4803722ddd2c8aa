use hecs::{Entity, World};

use crate::components::*;
use crate::config::Config;
use crate::match_state::{MatchAction, MatchState, Phase, TransitionResult};
use crate::resources::*;
use crate::snapshot::{BallView, Snapshot};
use crate::{create_ball, create_paddle, step};

/// The single mutable simulation context
///
/// Holds the ball, both paddles and the opponent's controller in a `World`,
/// plus the match state. Everything here is mutated only from inside a tick
/// or an explicit start/reset.
pub struct Game {
    pub world: World,
    pub config: Config,
    pub time: Time,
    pub match_state: MatchState,
    pub events: Events,
    pub input: InputQueue,
    rng: Box<dyn RandomSource>,
    player: Entity,
    computer: Entity,
    ball: Entity,
}

impl Game {
    pub fn new(config: Config, mut rng: Box<dyn RandomSource>) -> Self {
        let mut world = World::new();

        let player = create_paddle(&mut world, Side::Player, &config);
        let computer = create_paddle(&mut world, Side::Computer, &config);
        let ai = AiController::new(&config.ai, config.paddle_start_y, rng.as_mut());
        // Entity was spawned just above
        let _ = world.insert_one(computer, ai);
        let ball = create_ball(
            &mut world,
            config.ball_start_pos,
            config.ball_start_vel,
            &config,
        );

        Self {
            world,
            config,
            time: Time::default(),
            match_state: MatchState::new(),
            events: Events::new(),
            input: InputQueue::new(),
            rng,
            player,
            computer,
            ball,
        }
    }

    /// Default rules with a seeded generator
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Config::new(), Box::new(GameRng::new(seed)))
    }

    pub fn phase(&self) -> Phase {
        self.match_state.phase()
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }

    pub fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .get::<&Paddle>(self.paddle_entity(side))
            .ok()
            .map(|paddle| *paddle)
    }

    pub fn ai(&self) -> Option<AiController> {
        self.world.get::<&AiController>(self.computer).ok().map(|ai| *ai)
    }

    /// Queue a new direction for the player paddle
    pub fn push_intent(&mut self, intent: PaddleIntent) {
        self.input.push(intent);
    }

    /// Idle -> Playing; a no-op in any other phase
    pub fn start(&mut self) -> TransitionResult {
        self.match_state.transition(MatchAction::Start)
    }

    /// Full reset back to Idle: scores, ball, paddles, spin, difficulty and AI
    pub fn reset(&mut self) {
        let config = &self.config;
        let rng = self.rng.as_mut();

        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(config, rng);
            ball.rotation = 0.0;
        }

        for (_entity, (paddle, motion)) in self.world.query_mut::<(&mut Paddle, &mut PaddleMotion)>() {
            paddle.y = config.paddle_start_y;
            motion.vy = 0.0;
        }

        for (_entity, intent) in self.world.query_mut::<&mut PaddleIntent>() {
            *intent = PaddleIntent::Stop;
        }

        for (_entity, (paddle, ai)) in self.world.query_mut::<(&Paddle, &mut AiController)>() {
            ai.difficulty = config.ai.difficulty_start;
            ai.reset_for_point(&config.ai, paddle.y, rng);
        }

        self.input.clear();
        self.events.clear();
        self.time = Time::default();
        self.match_state.transition(MatchAction::Reset);
    }

    /// Run one tick; does nothing unless the match is playing
    ///
    /// Returns the side that scored this tick, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<Side> {
        if !self.match_state.is_playing() {
            return None;
        }

        self.time.advance(now_ms);
        let goal = step(
            &mut self.world,
            &self.time,
            &self.config,
            &mut self.events,
            &mut self.input,
            self.rng.as_mut(),
        );

        if let Some(side) = goal {
            self.match_state.record_goal(side, self.config.win_score);
        }
        goal
    }

    /// Renderable state after the latest tick
    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball().unwrap_or_else(|| Ball::kickoff(&self.config));
        let paddle_y = |side| {
            self.paddle(side)
                .map(|paddle| paddle.y)
                .unwrap_or(self.config.paddle_start_y)
        };
        let score = self.match_state.score();

        Snapshot {
            ball: BallView {
                x: ball.pos.x,
                y: ball.pos.y,
                size: ball.size,
                rotation: ball.rotation,
            },
            player_y: paddle_y(Side::Player),
            computer_y: paddle_y(Side::Computer),
            player_score: score.player,
            computer_score: score.computer,
            phase: self.match_state.phase(),
            winner: self.match_state.winner(),
            events: self.events.clone(),
            tick: self.time.tick,
        }
    }
}
