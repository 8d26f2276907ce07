pub const VIEW_THRESHOLD: f64 = 0.5;

/// Fires once per watch page when half the video has been played.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewTracker {
    tracked: bool,
}

impl ViewTracker {
    pub fn is_tracked(&self) -> bool {
        self.tracked
    }

    /// Returns true exactly once, on the first update at or past the threshold.
    pub fn observe(&mut self, current_time: f64, duration: f64) -> bool {
        if self.tracked || !(duration.is_finite() && duration > 0.0) {
            return false;
        }
        if current_time / duration >= VIEW_THRESHOLD {
            self.tracked = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_half() {
        let mut tracker = ViewTracker::default();
        assert!(!tracker.observe(10.0, 100.0));
        assert!(!tracker.observe(49.9, 100.0));
        assert!(tracker.observe(50.0, 100.0));
        assert!(!tracker.observe(80.0, 100.0));
        assert!(tracker.is_tracked());
    }

    #[test]
    fn unknown_duration_never_fires() {
        let mut tracker = ViewTracker::default();
        assert!(!tracker.observe(10.0, 0.0));
        assert!(!tracker.observe(10.0, f64::NAN));
        assert!(!tracker.observe(10.0, f64::INFINITY));
    }
}
