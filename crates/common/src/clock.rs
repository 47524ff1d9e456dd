//! Fixed-step frame clock for driving animations.
//!
//! Scenario replay runs on a deterministic timeline: every frame advances
//! by exactly one frame interval, independent of wall time. The wall-clock
//! start is only recorded for report headers.

/// A fixed-rate frame clock.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Nanoseconds between two frames.
    frame_interval_ns: u64,

    /// Number of frames advanced so far.
    frame_index: u64,

    /// Wall-clock time at clock start (RFC 3339 string).
    started_wall: String,
}

impl FrameClock {
    /// Create a clock ticking at `frame_rate_hz`, anchored to now.
    ///
    /// A zero rate is treated as 1 Hz. The interval never drops below 1 ns.
    pub fn start(frame_rate_hz: u32) -> Self {
        Self {
            frame_interval_ns: (1_000_000_000 / frame_rate_hz.max(1) as u64).max(1),
            frame_index: 0,
            started_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Nanoseconds between two frames.
    pub fn frame_interval_ns(&self) -> u64 {
        self.frame_interval_ns
    }

    /// Seconds between two frames, as fed to the animation driver.
    pub fn frame_dt_secs(&self) -> f32 {
        Self::ns_to_secs(self.frame_interval_ns) as f32
    }

    /// Timeline position of the current frame in nanoseconds.
    pub fn now_ns(&self) -> u64 {
        self.frame_index.saturating_mul(self.frame_interval_ns)
    }

    /// Index of the current frame.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advance by one frame and return the new timeline position.
    pub fn advance(&mut self) -> u64 {
        self.frame_index += 1;
        self.now_ns()
    }

    /// Number of whole frames needed to cover `duration_ns`.
    pub fn frames_for(&self, duration_ns: u64) -> u64 {
        duration_ns.div_ceil(self.frame_interval_ns)
    }

    /// Wall-clock time at clock start.
    pub fn started_wall(&self) -> &str {
        &self.started_wall
    }

    /// Convert nanoseconds to seconds.
    pub fn ns_to_secs(ns: u64) -> f64 {
        ns as f64 / 1_000_000_000.0
    }

    /// Convert milliseconds to nanoseconds.
    pub fn ms_to_ns(ms: u64) -> u64 {
        ms.saturating_mul(1_000_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        let clock = FrameClock::start(60);
        assert_eq!(clock.frame_interval_ns(), 16_666_666);
        assert!((clock.frame_dt_secs() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate_falls_back_to_one_hz() {
        let clock = FrameClock::start(0);
        assert_eq!(clock.frame_interval_ns(), 1_000_000_000);
    }

    #[test]
    fn test_rate_above_one_ghz_keeps_a_positive_interval() {
        let clock = FrameClock::start(2_000_000_000);
        assert_eq!(clock.frame_interval_ns(), 1);
        assert_eq!(clock.frames_for(1_000), 1_000);
    }

    #[test]
    fn test_large_durations_saturate() {
        assert_eq!(FrameClock::ms_to_ns(u64::MAX), u64::MAX);
        let mut clock = FrameClock::start(1);
        clock.frame_index = u64::MAX;
        assert_eq!(clock.now_ns(), u64::MAX);
    }

    #[test]
    fn test_advance() {
        let mut clock = FrameClock::start(100);
        assert_eq!(clock.now_ns(), 0);
        assert_eq!(clock.advance(), 10_000_000);
        assert_eq!(clock.advance(), 20_000_000);
        assert_eq!(clock.frame_index(), 2);
    }

    #[test]
    fn test_frames_for_rounds_up() {
        let clock = FrameClock::start(100);
        assert_eq!(clock.frames_for(0), 0);
        assert_eq!(clock.frames_for(10_000_000), 1);
        assert_eq!(clock.frames_for(10_000_001), 2);
    }

    #[test]
    fn test_conversions() {
        assert!((FrameClock::ns_to_secs(1_500_000_000) - 1.5).abs() < 1e-9);
        assert_eq!(FrameClock::ms_to_ns(600), 600_000_000);
    }

    #[test]
    fn test_started_wall_is_rfc3339() {
        let clock = FrameClock::start(60);
        assert!(chrono::DateTime::parse_from_rfc3339(clock.started_wall()).is_ok());
    }
}
