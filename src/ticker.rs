//! Tick Scheduling
//!
//! Fixed-timestep driver for the simulation. Wall-clock frame time is
//! fed into an accumulator and drained in whole ticks, so gameplay
//! speed doesn't depend on the display refresh rate.

/// Simulation rate in ticks per second
pub const TICK_RATE: f32 = 60.0;

/// Upper bound on ticks drained per frame. After a long stall (window
/// drag, laptop sleep) the backlog is dropped instead of fast-forwarding
/// the run.
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Accumulator-based fixed-timestep clock.
///
/// Starting always begins a fresh schedule: calling `start` while
/// already running discards the pending accumulator, so a restart can
/// never stack a second schedule on top of the first.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f32,
    accumulator: f32,
    running: bool,
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            interval: 1.0 / TICK_RATE,
            accumulator: 0.0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.accumulator = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.accumulator = 0.0;
        self.running = false;
    }

    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed one frame's elapsed time and drain the ticks it pays for.
    /// Returns 0 while stopped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.interval;
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = 0.0;
        }
        ticks
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
