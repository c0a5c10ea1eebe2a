use std::time::Instant;

/// Per-frame timing: frame number, wall-clock seconds since start, and
/// delta since the previous frame. Elapsed time drives trail aging only;
/// rotation stays per-frame on purpose.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Monotonic clock that stamps one [`FrameInfo`] per tick.
#[derive(Debug)]
pub struct FrameClock {
    frame_number: u64,
    start: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start: now,
            last_tick: now,
        }
    }

    /// Advance the clock and return this frame's timing.
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo {
            number: self.frame_number,
            time: now.duration_since(self.start).as_secs_f32(),
            delta: now.duration_since(self.last_tick).as_secs_f32(),
        };
        self.frame_number += 1;
        self.last_tick = now;
        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn frame_numbers_increment() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().number, 0);
        assert_eq!(clock.tick().number, 1);
        assert_eq!(clock.tick().number, 2);
    }

    #[test]
    fn time_is_monotonic_and_delta_positive() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        thread::sleep(Duration::from_millis(10));
        let second = clock.tick();

        assert!(second.time > first.time);
        assert!(second.delta >= 0.009);
        assert!(second.delta < 0.5);
    }
}
