/// Frame-rate sampler - counts frames and reports an average once per interval
#[derive(Debug, Clone, Copy)]
pub struct FpsMeter {
    interval: f32,
    elapsed: f32,
    frames: u32,
    fps: f32,
}

impl FpsMeter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Record one frame of `delta` wall seconds; returns the new average when an interval completes
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval && self.elapsed > 0.0 {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last reported average
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new(1.0)
    }
}
