//! Auto-scroll bookkeeping: decides when a user's own scrolling should stop
//! the transcript from following playback.
//!
//! Programmatic (player-initiated) scrolls must be filtered out by the
//! caller before observation; the tracker only ever sees user scrolling.

/// How long after initiating a smooth programmatic scroll its scroll events
/// are still attributed to the player rather than the user.
pub const PROGRAMMATIC_SCROLL_SETTLE_MS: i32 = 600;

/// A scroll at least this fraction of the viewport height, this fast, is a
/// deliberate move away from the playing clip.
const DISABLE_DISTANCE_VIEWPORT_FRACTION: f64 = 0.5;
const DISABLE_WINDOW_MS: f64 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollVerdict {
    Keep,
    DisableAutoScroll,
}

/// Position/time of the last observed user scroll.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTracker {
    last_position: f64,
    last_time_ms: f64,
}

impl ScrollTracker {
    pub fn new(position: f64, now_ms: f64) -> Self {
        Self { last_position: position, last_time_ms: now_ms }
    }

    /// Observe a user scroll event. Scrolling at least half the viewport
    /// height within one second disables auto-scroll; everything else keeps
    /// the current setting.
    pub fn observe(&mut self, position: f64, now_ms: f64, viewport_height: f64) -> ScrollVerdict {
        let distance = (position - self.last_position).abs();
        let elapsed = now_ms - self.last_time_ms;

        self.last_position = position;
        self.last_time_ms = now_ms;

        if distance >= viewport_height * DISABLE_DISTANCE_VIEWPORT_FRACTION
            && elapsed <= DISABLE_WINDOW_MS
        {
            ScrollVerdict::DisableAutoScroll
        } else {
            ScrollVerdict::Keep
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_half_viewport_scroll_disables() {
        let mut t = ScrollTracker::new(0.0, 0.0);
        assert_eq!(t.observe(500.0, 300.0, 1000.0), ScrollVerdict::DisableAutoScroll);
    }

    #[test]
    fn slow_scroll_keeps_auto_scroll() {
        let mut t = ScrollTracker::new(0.0, 0.0);
        assert_eq!(t.observe(500.0, 1500.0, 1000.0), ScrollVerdict::Keep);
    }

    #[test]
    fn short_scroll_keeps_auto_scroll() {
        let mut t = ScrollTracker::new(0.0, 0.0);
        assert_eq!(t.observe(100.0, 50.0, 1000.0), ScrollVerdict::Keep);
    }

    #[test]
    fn upward_scroll_counts_too() {
        let mut t = ScrollTracker::new(2000.0, 0.0);
        assert_eq!(t.observe(1400.0, 200.0, 1000.0), ScrollVerdict::DisableAutoScroll);
    }

    #[test]
    fn distance_accumulates_from_last_observation() {
        let mut t = ScrollTracker::new(0.0, 0.0);
        // Many small steps, each under the threshold.
        assert_eq!(t.observe(200.0, 100.0, 1000.0), ScrollVerdict::Keep);
        assert_eq!(t.observe(400.0, 200.0, 1000.0), ScrollVerdict::Keep);
        // One big jump trips it.
        assert_eq!(t.observe(1000.0, 300.0, 1000.0), ScrollVerdict::DisableAutoScroll);
    }
}
