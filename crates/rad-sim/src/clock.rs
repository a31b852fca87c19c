//! Frame-delta to fixed-sub-step conversion and the run-state machine.
//!
//! ```text
//!            start()              pause() / toggle_pause()
//!  Stopped ──────────► Running ◄─────────────────────────► Paused
//!     ▲                   │        resume() / toggle_pause()   │
//!     └───────────────────┴──────── stop() / reset() ──────────┘
//! ```
//!
//! Only `Running` converts deltas into sub-steps.  A driver delta is clamped
//! to `max_frame_ms`, added to an accumulator, and drained in whole
//! `fixed_step_ms` units; the remainder carries over to the next frame.

use rad_core::{ClockConfig, SimTime};

/// Lifecycle state of a simulation.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl RunState {
    pub fn as_str(self) -> &'static str {
        match self {
            RunState::Stopped => "stopped",
            RunState::Running => "running",
            RunState::Paused  => "paused",
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct SimulationClock {
    config:      ClockConfig,
    state:       RunState,
    now:         SimTime,
    accumulator: f64,
}

impl SimulationClock {
    /// A stopped clock at `t = 0`.  `config` must already be validated.
    pub fn new(config: ClockConfig) -> Self {
        Self { config, state: RunState::Stopped, now: SimTime::ZERO, accumulator: 0.0 }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Replace the frame settings, keeping time and state.  The accumulator
    /// is dropped since it was measured in the old step size.
    pub fn set_config(&mut self, config: ClockConfig) {
        self.config = config;
        self.accumulator = 0.0;
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Simulated time of the last completed sub-step.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Milliseconds banked towards the next sub-step.
    #[inline]
    pub fn pending_ms(&self) -> f64 {
        self.accumulator
    }

    /// Move to `state`.  Returns `true` if the state changed.
    pub fn set_state(&mut self, state: RunState) -> bool {
        let changed = self.state != state;
        self.state = state;
        changed
    }

    /// Back to `t = 0` with nothing banked.  Does not touch the run state.
    pub fn reset(&mut self) {
        self.now = SimTime::ZERO;
        self.accumulator = 0.0;
    }

    /// Bank `delta_ms` and return how many whole sub-steps are now due.
    ///
    /// Returns 0 unless running.  Negative and non-finite deltas count as 0;
    /// deltas above `max_frame_ms` are clamped to it.
    pub fn advance(&mut self, delta_ms: f64) -> usize {
        if !self.is_running() {
            return 0;
        }
        let delta = if delta_ms.is_finite() { delta_ms.clamp(0.0, self.config.max_frame_ms) } else { 0.0 };
        self.accumulator += delta;

        let step = self.config.fixed_step_ms;
        let due = (self.accumulator / step).floor();
        self.accumulator -= due * step;
        // Guard against a remainder left a hair negative by rounding.
        self.accumulator = self.accumulator.max(0.0);
        due as usize
    }

    /// Advance `now` by one sub-step and return the new time.
    #[inline]
    pub fn tick(&mut self) -> SimTime {
        self.now += self.config.fixed_step_ms;
        self.now
    }

    #[inline]
    pub fn fixed_step_ms(&self) -> f64 {
        self.config.fixed_step_ms
    }

    #[inline]
    pub fn fixed_step_secs(&self) -> f64 {
        self.config.fixed_step_secs()
    }
}
