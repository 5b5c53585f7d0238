//! Game Session
//!
//! One run of the game: the three entities, the score counters and the
//! persistence hook. `tick` advances the simulation by exactly one step
//! and reports what happened, so the shell can react (sound cues,
//! screen changes) without the session knowing about either.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::score::HighScoreStore;
use crate::viewport::Viewport;
use super::collision::overlaps;
use super::entities::{Coin, Explorer, Monkey, EXPLORER_START_X};

/// Points for grabbing a coin. Survival pays 1 point per tick on top.
pub const COIN_BONUS: u32 = 10;

/// What a single tick did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutcome {
    /// A coin was grabbed this tick
    pub coin_collected: bool,
    /// The monkey caught the explorer; the run is over
    pub hit_monkey: bool,
}

/// All state for one run, plus the record that outlives it
pub struct GameSession {
    pub explorer: Explorer,
    pub monkey: Monkey,
    pub coin: Coin,
    pub score: u32,
    pub high_score: u32,
    viewport: Viewport,
    store: Box<dyn HighScoreStore>,
    rng: StdRng,
}

impl GameSession {
    pub fn new(viewport: Viewport, store: Box<dyn HighScoreStore>) -> Self {
        Self::with_rng(viewport, store, StdRng::from_entropy())
    }

    /// Construct with an explicit generator. Tests seed this for
    /// deterministic coin placement.
    pub fn with_rng(viewport: Viewport, store: Box<dyn HighScoreStore>, rng: StdRng) -> Self {
        let high_score = store.load();
        let mut session = Self {
            explorer: Explorer::new(viewport),
            monkey: Monkey::new(viewport),
            coin: Coin::new(),
            score: 0,
            high_score,
            viewport,
            store,
            rng,
        };
        session.place_coin();
        session
    }

    /// Reset all per-run state. Safe to call mid-run; a restart behaves
    /// exactly like the first start.
    pub fn start(&mut self) {
        self.score = 0;
        self.explorer.moving_left = false;
        self.explorer.moving_right = false;
        self.explorer.velocity_y = 0.0;
        self.explorer.is_jumping = false;
        self.apply_layout();
        self.monkey.x = self.viewport.width;
        self.monkey.y = self.explorer.y;
    }

    /// Advance the simulation by one step.
    ///
    /// Order matters: movement first, then the monkey check, then the
    /// coin check, then the survival point. On the tick the monkey
    /// connects the record is persisted (if beaten) and the rest of the
    /// tick is skipped, so the final score is exactly what the player
    /// saw last.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.explorer.update_vertical();
        self.explorer.update_horizontal(self.viewport);
        self.monkey.advance(self.viewport);

        if overlaps(&self.explorer.bounds(), &self.monkey.bounds()) {
            if self.score > self.high_score {
                self.high_score = self.score;
                if let Err(e) = self.store.save(self.score) {
                    eprintln!("Failed to save high score: {}", e);
                }
            }
            outcome.hit_monkey = true;
            return outcome;
        }

        if overlaps(&self.explorer.bounds(), &self.coin.bounds()) {
            self.score += COIN_BONUS;
            self.place_coin();
            outcome.coin_collected = true;
        }

        self.score += 1;
        outcome
    }

    /// React to a window size change; entities re-anchor to the new
    /// ground line.
    pub fn handle_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.apply_layout();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Re-anchor everything to the current viewport: explorer back at
    /// the spawn point, monkey re-seated on the ground (respawned at the
    /// right edge if it had fully wrapped off), coin re-placed.
    fn apply_layout(&mut self) {
        let ground = self.viewport.ground_y();
        self.explorer.x = EXPLORER_START_X;
        self.explorer.y = ground;
        self.explorer.initial_y = ground;
        if self.monkey.is_off_screen() {
            self.monkey.x = self.viewport.width;
        }
        self.monkey.y = ground;
        self.place_coin();
    }

    fn place_coin(&mut self) {
        self.coin.place(self.viewport, &mut self.rng);
    }
}
