//! Counters for gesture and render activity.

/// Activity counters collected by a slider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderMetrics {
    /// Gestures that captured a thumb (immediately or after deferral)
    pub gestures_started: usize,

    /// Touch-starts declined because several contacts were down
    pub gestures_declined: usize,

    /// Touch-starts that had to wait for measurements
    pub gestures_deferred: usize,

    /// Pointer samples delivered to the slider
    pub samples_received: usize,

    /// Samples dropped because no gesture was active or the track was unmeasured
    pub samples_ignored: usize,

    /// Samples that mapped to the value already reported
    pub samples_suppressed: usize,

    /// Value-changed notifications delivered to the host
    pub notifications: usize,

    /// Render passes that pushed at least one leaf
    pub renders: usize,

    /// Render passes with nothing dirty
    pub renders_skipped: usize,

    /// Leaf updates pushed across all render passes
    pub leaves_rendered: usize,
}

impl SliderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of received samples that changed nothing (0.0 to 1.0).
    pub fn suppression_rate(&self) -> f32 {
        if self.samples_received == 0 {
            0.0
        } else {
            (self.samples_suppressed + self.samples_ignored) as f32 / self.samples_received as f32
        }
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Format metrics as a human-readable string.
    pub fn format(&self) -> String {
        format!(
            "Slider Metrics:\n\
             \x20 Gestures: {} started, {} deferred, {} declined\n\
             \x20 Samples: {} received, {} suppressed, {} ignored ({:.1}% idle)\n\
             \x20 Notifications: {}\n\
             \x20 Renders: {} ({} skipped, {} leaf updates)",
            self.gestures_started,
            self.gestures_deferred,
            self.gestures_declined,
            self.samples_received,
            self.samples_suppressed,
            self.samples_ignored,
            self.suppression_rate() * 100.0,
            self.notifications,
            self.renders,
            self.renders_skipped,
            self.leaves_rendered,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppression_rate() {
        let mut metrics = SliderMetrics::new();
        assert_eq!(metrics.suppression_rate(), 0.0);
        metrics.samples_received = 10;
        metrics.samples_suppressed = 6;
        metrics.samples_ignored = 2;
        assert!((metrics.suppression_rate() - 0.8).abs() < 1e-6);
        metrics.reset();
        assert_eq!(metrics, SliderMetrics::default());
    }

    #[test]
    fn test_format_mentions_counts() {
        let metrics = SliderMetrics {
            notifications: 3,
            ..Default::default()
        };
        assert!(metrics.format().contains("Notifications: 3"));
    }
}
