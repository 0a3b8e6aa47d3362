/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Simulated seconds since start
    pub sim_time: f64,
    /// Simulated seconds covered by this frame
    pub delta: f64,
    /// Wall-clock seconds covered by this frame
    pub real_delta: f64,
}

impl FrameInfo {
    pub fn new(number: u64, sim_time: f64, delta: f64, real_delta: f64) -> Self {
        Self {
            number,
            sim_time,
            delta,
            real_delta,
        }
    }
}
