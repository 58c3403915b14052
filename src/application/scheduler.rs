/// Bounds for the step rate
pub const MIN_TICKS_PER_SECOND: f32 = 1.0;
pub const MAX_TICKS_PER_SECOND: f32 = 120.0;

/// Most steps a single frame may run to catch up after a stall
pub const MAX_CATCH_UP: u32 = 4;

/// Scheduler owns the play/pause state and the cadence of steps.
/// It knows nothing about the universe; the caller runs however many
/// steps `poll` reports.
#[derive(Clone, Debug)]
pub struct Scheduler {
    running: bool,
    ticks_per_second: f32,
    accumulator: f32,
}

impl Scheduler {
    pub fn new(ticks_per_second: f32) -> Self {
        Self {
            running: false,
            ticks_per_second: ticks_per_second.clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND),
            accumulator: 0.0,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second
    }

    pub fn play(&mut self) {
        self.running = true;
    }

    /// Stop the cadence. Pending time is dropped so resuming starts fresh.
    pub fn pause(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn toggle(&mut self) {
        if self.running { self.pause() } else { self.play() }
    }

    pub fn set_ticks_per_second(&mut self, ticks_per_second: f32) {
        self.ticks_per_second = ticks_per_second.clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND);
    }

    /// Advance the clock by `delta_time` seconds and return the number of
    /// steps due this frame
    pub fn poll(&mut self, delta_time: f32) -> u32 {
        if !self.running {
            return 0;
        }

        let interval = 1.0 / self.ticks_per_second;
        self.accumulator += delta_time.max(0.0);

        let due = (self.accumulator / interval) as u32;
        if due > MAX_CATCH_UP {
            self.accumulator = 0.0;
            return MAX_CATCH_UP;
        }
        self.accumulator -= due as f32 * interval;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paused_never_fires() {
        let mut scheduler = Scheduler::new(10.0);
        assert_eq!(scheduler.poll(5.0), 0);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut scheduler = Scheduler::new(10.0);
        scheduler.play();
        assert_eq!(scheduler.poll(0.06), 0);
        assert_eq!(scheduler.poll(0.06), 1);
        assert_eq!(scheduler.poll(0.25), 2);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut scheduler = Scheduler::new(60.0);
        scheduler.play();
        assert_eq!(scheduler.poll(10.0), MAX_CATCH_UP);
        assert_eq!(scheduler.poll(0.0), 0);
    }

    #[test]
    fn test_pause_drops_pending_time() {
        let mut scheduler = Scheduler::new(10.0);
        scheduler.play();
        assert_eq!(scheduler.poll(0.09), 0);
        scheduler.toggle();
        assert!(!scheduler.is_running());
        scheduler.toggle();
        assert_eq!(scheduler.poll(0.05), 0);
    }

    #[test]
    fn test_rate_is_clamped() {
        let mut scheduler = Scheduler::new(1000.0);
        assert_eq!(scheduler.ticks_per_second(), MAX_TICKS_PER_SECOND);
        scheduler.set_ticks_per_second(0.0);
        assert_eq!(scheduler.ticks_per_second(), MIN_TICKS_PER_SECOND);
    }
}
