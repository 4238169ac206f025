use std::time::Duration;

/// Averages the frame rate over a reporting interval.
pub(crate) struct FpsReport {
    frame_count: u32,
    last_time: u64,
    interval: u64,
}

impl FpsReport {
    pub(crate) fn new(now_micros: u64, interval: Duration) -> Self {
        FpsReport {
            frame_count: 0,
            last_time: now_micros,
            interval: micros(interval),
        }
    }

    pub(crate) fn set_interval(&mut self, interval: Duration) {
        self.interval = micros(interval);
    }

    /// Counts a frame, returns the average once the interval has elapsed.
    pub(crate) fn update(&mut self, now_micros: u64) -> Option<f32> {
        self.frame_count += 1;
        let elapsed = now_micros.saturating_sub(self.last_time);
        if elapsed >= self.interval && elapsed > 0 {
            let fps = self.frame_count as f32 / (elapsed as f32 / 1_000_000.0);
            self.frame_count = 0;
            self.last_time = now_micros;
            Some(fps)
        } else {
            None
        }
    }
}

fn micros(interval: Duration) -> u64 {
    u64::try_from(interval.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_once_per_interval() {
        let mut report = FpsReport::new(0, Duration::from_secs(1));
        for frame in 1..50 {
            assert_eq!(report.update(frame * 20_000), None);
        }
        assert_eq!(report.update(1_000_000), Some(50.0));
        assert_eq!(report.update(1_020_000), None);
    }

    #[test]
    fn test_huge_interval_saturates() {
        let mut report = FpsReport::new(0, Duration::MAX);
        assert_eq!(report.interval, u64::MAX);
        assert_eq!(report.update(u64::MAX - 1), None);

        report.set_interval(Duration::from_micros(10));
        assert_eq!(report.interval, 10);
        assert_eq!(report.update(1_000_000), Some(2.0));
    }

    #[test]
    fn test_zero_interval_still_needs_elapsed_time() {
        let mut report = FpsReport::new(500, Duration::ZERO);
        assert_eq!(report.update(500), None);
        assert_eq!(report.update(1_000_500), Some(2.0));
    }
}
