/// Animation state for revealing a trajectory incrementally in time order.
///
/// Playback only controls how much of the already-computed trajectory is
/// drawn; the underlying data is never touched. Progress is measured in
/// samples and driven by wall-clock frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    /// Whether the plot reveals the trajectory over time at all. When off,
    /// the full path is drawn.
    pub animate: bool,
    /// Whether the reveal is currently advancing.
    pub playing: bool,
    /// Reveal speed, in trajectory samples per second.
    pub samples_per_second: f64,
    progress: f64,
}

impl Playback {
    #[must_use]
    pub fn new() -> Self {
        Self {
            animate: false,
            playing: false,
            samples_per_second: 120.0,
            progress: 0.0,
        }
    }

    /// Advances the reveal by one frame of `dt` seconds.
    ///
    /// Saturates at `total` samples and pauses there, so a finished reveal
    /// stays on screen until restarted.
    pub fn advance(&mut self, dt: f64, total: usize) {
        if !(self.animate && self.playing) {
            return;
        }

        self.progress += dt * self.samples_per_second;
        if self.progress >= total as f64 {
            self.progress = total as f64;
            self.playing = false;
        }
    }

    /// Rewinds the reveal to the start, e.g. when a new trajectory arrives.
    pub fn rewind(&mut self) {
        self.progress = 0.0;
    }

    /// Whether the reveal has consumed the whole trajectory.
    #[must_use]
    pub fn at_end(&self, total: usize) -> bool {
        self.progress >= total as f64
    }

    /// How many samples of a `total`-sample trajectory should be drawn.
    ///
    /// Always at least one, so the seed marker's neighborhood is visible from
    /// the first frame.
    #[must_use]
    pub fn visible(&self, total: usize) -> usize {
        if !self.animate || total == 0 {
            return total;
        }
        (self.progress as usize).clamp(1, total)
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}
