use log::warn;

use crate::AppState;

/// The most ticks a single frame may catch up on. Lag beyond
/// that is dropped.
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Fixed timestep accumulator. Turns the real frame time into
/// a number of simulation ticks to run.
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    tick: f32,
    accumulated: f32,
}

impl Ticker {
    pub fn new(tick: f32) -> Self {
        Self {
            tick,
            accumulated: 0.0,
        }
    }

    pub fn tick(&self) -> f32 {
        self.tick
    }

    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Accounts for `real_dt` seconds and returns how many updates
    /// are due. Time keeps flowing in every state, but only
    /// [AppState::Playing] gets updates.
    pub fn advance(&mut self, state: AppState, real_dt: f32) -> u32 {
        self.accumulated += real_dt;

        let mut ticks = 0;
        while self.accumulated >= self.tick && ticks < MAX_TICKS_PER_FRAME {
            self.accumulated -= self.tick;
            ticks += 1;
        }

        if self.accumulated >= self.tick {
            warn!("LAG by {:.2}ms", self.accumulated * 1000.0);
            self.accumulated %= self.tick;
        }

        if state.is_playing() { ticks } else { 0 }
    }
}
