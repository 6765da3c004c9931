//! One play session: simulation state, RNG and high-score tracking behind a
//! single "advance one frame" entry point for the frame driver.

use rand::Rng;

use crate::compute::{self, Intent, IntentOutcome, TickReport};
use crate::config::GameConfig;
use crate::entities::GameState;
use crate::render::{self, Surface};
use crate::score_store::{HighScore, ScoreStore};

pub struct Session<S, R> {
    state: GameState,
    rng: R,
    high_score: HighScore<S>,
}

impl<S: ScoreStore, R: Rng> Session<S, R> {
    pub fn new(config: GameConfig, store: S, mut rng: R) -> Self {
        let state = compute::init_state(config, &mut rng);
        Self {
            state,
            rng,
            high_score: HighScore::load(store),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for frontends and tests that stage scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn handle(&mut self, intent: Intent) -> IntentOutcome {
        compute::handle_intent(&mut self.state, intent)
    }

    /// Apply one frame's intents in order, including any queued after a
    /// restart. Returns true if one of them restarted the game.
    pub fn handle_all<I: IntoIterator<Item = Intent>>(&mut self, intents: I) -> bool {
        let mut restarted = false;
        for intent in intents {
            restarted |= self.handle(intent) == IntentOutcome::Restarted;
        }
        restarted
    }

    /// Simulate one tick, persist a beaten high score, then draw the frame.
    pub fn advance<F: Surface>(&mut self, surface: &mut F) -> TickReport {
        let report = compute::tick(&mut self.state, &mut self.rng);
        self.high_score.observe(self.state.score);
        render::draw_frame(surface, &self.state, self.high_score.best(), &mut self.rng);
        report
    }

    pub fn score_store(&self) -> &S {
        self.high_score.store()
    }
}
