/// Synthetic upload progress
///
/// The backend gives no transfer feedback, so the progress bar is a
/// bounded counter advanced by a periodic tick while a request is in
/// flight: +10 every tick, capped at 90. Completion jumps it to 100,
/// failure abandons it where it stands; either way it settles back to 0
/// after a short delay. The tick source (an iced subscription) only exists
/// while `is_ticking` is true, which is what cancels the timer the moment
/// the real response arrives.
#[derive(Debug, Clone, Default)]
pub struct UploadProgress {
    value: f32,
    ticking: bool,
    run: u64,
}

impl UploadProgress {
    /// Begin a new run. Bumps the run number so settle timers armed for a
    /// previous run are ignored.
    pub fn start(&mut self) {
        self.run += 1;
        self.value = 0.0;
        self.ticking = true;
    }

    /// One periodic advance. No-op once the run is over.
    pub fn tick(&mut self) {
        if self.ticking {
            self.value = (self.value + 10.0).min(90.0);
        }
    }

    /// The request succeeded: stop ticking and show completion.
    pub fn finish(&mut self) {
        self.ticking = false;
        self.value = 100.0;
    }

    /// The request failed: stop ticking, leave the value where it is.
    pub fn abandon(&mut self) {
        self.ticking = false;
    }

    /// Reset to 0 after the settle delay, unless a newer run started.
    pub fn settle(&mut self, run: u64) {
        if self.run == run {
            self.value = 0.0;
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn run(&self) -> u64 {
        self.run
    }
}
