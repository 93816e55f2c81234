/// Length of one stopwatch tick in milliseconds.
pub const TICK_MS: u64 = 10;

/// A tick-driven stopwatch for timing a batch of problems.
///
/// The host calls [`Stopwatch::tick`] at a fixed cadence; the stopwatch only
/// counts while it is active and not paused. It never reads the wall clock,
/// which keeps timing deterministic in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopwatch {
    elapsed_ms: u64,
    active: bool,
    paused: bool,
}

impl Stopwatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the elapsed time and deactivate.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Activate and unpause. Elapsed time is kept.
    pub fn start(&mut self) {
        self.active = true;
        self.paused = false;
    }

    /// Pause the stopwatch. Idempotent.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume counting if the stopwatch is active. Idempotent.
    pub fn resume(&mut self) {
        if self.active {
            self.paused = false;
        }
    }

    /// Flip between paused and running. Has no effect on an inactive stopwatch.
    pub fn toggle(&mut self) {
        if self.active {
            self.paused = !self.paused;
        }
    }

    /// Advance by one tick when running and return the elapsed time.
    pub fn tick(&mut self) -> u64 {
        if self.is_running() {
            self.elapsed_ms = self.elapsed_ms.saturating_add(TICK_MS);
        }
        self.elapsed_ms
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active && !self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_stopwatch_ignores_ticks() {
        let mut watch = Stopwatch::new();
        assert_eq!(watch.tick(), 0);
        watch.toggle();
        assert!(!watch.is_running());
    }

    #[test]
    fn ticks_accumulate_while_running() {
        let mut watch = Stopwatch::new();
        watch.start();
        for _ in 0..5 {
            watch.tick();
        }
        assert_eq!(watch.elapsed_ms(), 50);
    }

    #[test]
    fn pause_is_idempotent_and_freezes_time() {
        let mut watch = Stopwatch::new();
        watch.start();
        watch.tick();
        watch.pause();
        watch.pause();
        watch.tick();
        assert_eq!(watch.elapsed_ms(), TICK_MS);

        watch.resume();
        watch.tick();
        assert_eq!(watch.elapsed_ms(), 2 * TICK_MS);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut watch = Stopwatch::new();
        watch.start();
        watch.tick();
        watch.reset();
        assert_eq!(watch, Stopwatch::default());
        watch.resume();
        assert!(!watch.is_running());
    }
}
