/// Monotone frame clock.
///
/// The host hands us its `requestAnimationFrame` timestamp each frame. The
/// clock anchors the first timestamp as the origin and reports elapsed time
/// since then, holding steady if the host clock ever reads backwards (tab
/// restore, clock adjustment). Orbital positions are recomputed from this
/// absolute elapsed time, so a forward jump shifts phase but never distance.
pub struct FrameClock {
    origin_ms: Option<f64>,
    elapsed_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin_ms: None,
            elapsed_ms: 0.0,
        }
    }

    /// Feed the host timestamp for this frame; returns monotone elapsed
    /// milliseconds since the first frame.
    pub fn frame(&mut self, now_ms: f64) -> f64 {
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let elapsed = now_ms - origin;
        if elapsed > self.elapsed_ms {
            self.elapsed_ms = elapsed;
        }
        self.elapsed_ms
    }

    /// Elapsed milliseconds as of the most recent frame.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
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

    #[test]
    fn first_frame_is_time_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame(12345.0), 0.0);
    }

    #[test]
    fn elapsed_counts_from_first_frame() {
        let mut clock = FrameClock::new();
        clock.frame(1000.0);
        assert_eq!(clock.frame(1016.0), 16.0);
        assert_eq!(clock.frame(1032.0), 32.0);
    }

    #[test]
    fn backwards_timestamps_hold_steady() {
        let mut clock = FrameClock::new();
        clock.frame(1000.0);
        clock.frame(1100.0);
        // Host clock glitch — elapsed must not decrease
        assert_eq!(clock.frame(1050.0), 100.0);
        assert_eq!(clock.elapsed_ms(), 100.0);
    }

    #[test]
    fn recovers_after_backwards_glitch() {
        let mut clock = FrameClock::new();
        clock.frame(1000.0);
        clock.frame(1100.0);
        clock.frame(1050.0);
        assert_eq!(clock.frame(1200.0), 200.0);
    }
}
