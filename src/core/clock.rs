use std::time::Instant;

/// Smallest time scale; pausing drops to this instead of zero so `delta / time_scale` stays finite
pub const TIME_SCALE_MIN: f64 = 1e-7;
pub const TIME_SCALE_MAX: f64 = 1.0;

/// Monotonic wall clock - seconds since construction
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock was created
    pub fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Scaled simulation clock
///
/// Converts wall-clock readings into simulated time that can be paused,
/// slowed down or sped up. `time_scale` always stays inside
/// `[time_scale_min, time_scale_max]` and `time_scale_min` is positive.
#[derive(Debug, Clone)]
pub struct FrameClock {
    real_time: f64,
    sim_time: f64,
    last_sim_time: f64,
    delta: f64,
    real_delta: f64,
    time_scale: f64,
    time_scale_min: f64,
    time_scale_max: f64,
    resume_scale: f64,
}

impl FrameClock {
    pub fn new(time_scale_min: f64, time_scale_max: f64) -> Self {
        let time_scale_min = if time_scale_min > 0.0 {
            time_scale_min
        } else {
            TIME_SCALE_MIN
        };
        let time_scale_max = time_scale_max.max(time_scale_min);

        Self {
            real_time: 0.0,
            sim_time: 0.0,
            last_sim_time: 0.0,
            delta: 0.0,
            real_delta: 0.0,
            time_scale: 1.0_f64.clamp(time_scale_min, time_scale_max),
            time_scale_min,
            time_scale_max,
            resume_scale: 1.0_f64.clamp(time_scale_min, time_scale_max),
        }
    }

    /// Advance to `wall_clock_now` and return the simulated delta
    ///
    /// Readings are expected to be non-decreasing; a regressing clock yields
    /// a negative delta.
    pub fn tick(&mut self, wall_clock_now: f64) -> f64 {
        self.last_sim_time = self.sim_time;
        self.real_delta = wall_clock_now - self.real_time;
        self.sim_time += self.real_delta * self.time_scale;
        self.real_time = wall_clock_now;
        self.delta = self.sim_time - self.last_sim_time;
        self.delta
    }

    pub fn set_time_scale(&mut self, requested: f64) {
        // NaN falls through `clamp` unchanged
        self.time_scale = if requested.is_nan() {
            self.time_scale_min
        } else {
            requested.clamp(self.time_scale_min, self.time_scale_max)
        };
    }

    /// Nudge the rate; while paused the step applies to the rate restored on resume
    pub fn adjust_time_scale(&mut self, step: f64) {
        if self.is_paused() {
            let resumed = self.resume_scale + step;
            self.resume_scale = if resumed > self.time_scale_min {
                resumed.min(self.time_scale_max)
            } else {
                self.time_scale_min
            };
        } else {
            self.set_time_scale(self.time_scale + step);
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.is_paused() {
            self.time_scale = if self.resume_scale > self.time_scale_min {
                self.resume_scale
            } else {
                1.0_f64.clamp(self.time_scale_min, self.time_scale_max)
            };
        } else {
            self.resume_scale = self.time_scale;
            self.time_scale = self.time_scale_min;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.time_scale <= self.time_scale_min
    }

    /// Wall-clock seconds covered by the last tick, unaffected by later scale changes
    pub fn real_delta(&self) -> f64 {
        self.real_delta
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn real_time(&self) -> f64 {
        self.real_time
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn time_scale_min(&self) -> f64 {
        self.time_scale_min
    }

    pub fn time_scale_max(&self) -> f64 {
        self.time_scale_max
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TIME_SCALE_MIN, TIME_SCALE_MAX)
    }
}
