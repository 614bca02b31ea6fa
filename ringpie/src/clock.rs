// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The driving clock: elapsed play time to sweep angle.
//!
//! The clock does not read wall time. The host calls [`SweepClock::tick`] with the time
//! elapsed since the previous frame and feeds [`SweepClock::angle`] to
//! [`RenderState::advance`](crate::RenderState::advance).

use core::f64::consts::PI;
use core::time::Duration;

use crate::segment::{FULL_TURN, START_ANGLE};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Maps linear time fraction to animation fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end, fastest in the middle (a half cosine).
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Applies the curve to `t` in `0..=1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() * 0.5 + 0.5,
        }
    }
}

/// Sweeps an angle from [`START_ANGLE`] through a full turn.
///
/// Play time starts at zero on [`start`](Self::start) and includes the start delay; the angle
/// stays at the start value until the delay has elapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepClock {
    start_delay: Duration,
    duration: Duration,
    easing: Easing,
    play_time: Duration,
    paused_play_time: Duration,
    running: bool,
}

impl Default for SweepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepClock {
    /// Creates a stopped clock with a 200 ms delay and a 1 s sweep.
    pub fn new() -> Self {
        Self {
            start_delay: Duration::from_millis(200),
            duration: Duration::from_millis(1000),
            easing: Easing::default(),
            play_time: Duration::ZERO,
            paused_play_time: Duration::ZERO,
            running: false,
        }
    }

    /// Sets the delay before the sweep begins.
    #[must_use]
    pub fn with_start_delay(mut self, start_delay: Duration) -> Self {
        self.start_delay = start_delay;
        self
    }

    /// Sets how long the sweep takes once it begins.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Starts (or restarts) the sweep from the beginning.
    pub fn start(&mut self) {
        self.play_time = Duration::ZERO;
        self.paused_play_time = Duration::ZERO;
        self.running = true;
        log::debug!(
            "sweep clock started: delay {:?}, duration {:?}",
            self.start_delay,
            self.duration
        );
    }

    /// Starts the sweep only if `ready` holds (e.g. the layout has data). Returns whether it
    /// started.
    pub fn start_if(&mut self, ready: bool) -> bool {
        if ready {
            self.start();
        }
        ready
    }

    /// Advances play time by `dt` if running, and returns the new angle.
    pub fn tick(&mut self, dt: Duration) -> f64 {
        if self.running {
            self.play_time = self.play_time.saturating_add(dt);
            if self.play_time >= self.total() {
                self.play_time = self.total();
                self.running = false;
            }
        }
        self.angle()
    }

    /// Stops the clock, remembering the current play time for [`resume`](Self::resume).
    pub fn pause(&mut self) {
        self.paused_play_time = self.play_time;
        self.running = false;
        log::debug!("sweep clock paused at {:?}", self.play_time);
    }

    /// Restarts the clock at the play time stored by [`pause`](Self::pause).
    ///
    /// Does nothing if no play time was stored.
    pub fn resume(&mut self) {
        if self.paused_play_time.is_zero() {
            return;
        }
        self.play_time = self.paused_play_time;
        self.running = self.play_time < self.total();
        log::debug!("sweep clock resumed at {:?}", self.play_time);
    }

    /// Jumps to `play_time` (clamped to the total length) without changing the running flag.
    pub fn seek(&mut self, play_time: Duration) {
        self.play_time = play_time.min(self.total());
    }

    /// Start delay plus sweep duration.
    pub fn total(&self) -> Duration {
        self.start_delay.saturating_add(self.duration)
    }

    /// Elapsed play time, including the start delay.
    pub fn play_time(&self) -> Duration {
        self.play_time
    }

    /// Linear fraction of the sweep completed, `0..=1`.
    pub fn fraction(&self) -> f64 {
        let into_sweep = self.play_time.saturating_sub(self.start_delay);
        if self.duration.is_zero() {
            return if self.play_time >= self.start_delay { 1.0 } else { 0.0 };
        }
        (into_sweep.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Current driving angle, in `START_ANGLE..=START_ANGLE + 360`.
    pub fn angle(&self) -> f64 {
        START_ANGLE + FULL_TURN * self.easing.apply(self.fraction())
    }

    /// Returns `true` while the clock advances on [`tick`](Self::tick).
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns `true` once play time has reached the end of the sweep.
    pub fn is_finished(&self) -> bool {
        self.play_time >= self.total()
    }
}
