use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::food::Food;
use crate::input::InputAction;
use crate::snake::Snake;

/// Coarse game state. `NotStarted` until the first start input, `Running`
/// for the rest of the process lifetime; deaths soft-reset, never pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
}

/// What one tick did, so the caller knows when to republish the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickOutcome {
    pub ate: bool,
    pub died: bool,
}

impl TickOutcome {
    pub fn score_changed(self) -> bool {
        self.ate || self.died
    }
}

/// All mutable game state, owned by the loop controller. The binary drives
/// `tick` from a real-time timer; tests drive it directly.
pub struct Game {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub high_score: u32,
    pub phase: Phase,
    rng: SmallRng,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let food = Food::new(&mut rng);
        Self {
            snake: Snake::new(),
            food,
            score: 0,
            high_score: 0,
            phase: Phase::NotStarted,
            rng,
        }
    }

    /// Apply a key action, gated by phase. Before the start key arrives only
    /// the start key does anything; once running it is inert.
    pub fn apply(&mut self, action: InputAction) {
        match (self.phase, action) {
            (Phase::NotStarted, InputAction::Start) => {
                self.phase = Phase::Running;
                info!("game started");
            }
            (Phase::Running, InputAction::Turn(dir)) => self.snake.set_direction(dir),
            _ => {}
        }
    }

    /// One update step: advance the snake, soft-reset on self-collision,
    /// then check the food cell. The food check runs after a reset too,
    /// since the respawned pellet can land on the fresh head.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if !self.snake.advance() {
            debug!(score = self.score, "self collision, resetting");
            self.high_score = self.high_score.max(self.score);
            self.snake.reset();
            self.food.randomize(&mut self.rng);
            self.score = 0;
            outcome.died = true;
        }

        if self.snake.head() == self.food.position {
            self.snake.grow();
            self.score += 1;
            self.high_score = self.high_score.max(self.score);
            self.food.randomize(&mut self.rng);
            outcome.ate = true;
            debug!(score = self.score, "food eaten");
        }

        outcome
    }
}
