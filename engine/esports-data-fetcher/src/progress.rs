//! Progress reporting for the game download pass

use crate::models::ProgressReport;
use std::time::Instant;

/// Emit a progress line every this many newly written games
pub const PROGRESS_INTERVAL: usize = 10;

/// Counts newly written game files and decides when to report progress
pub struct ProgressTracker {
    started: Instant,
    written: usize,
}

impl ProgressTracker {
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(started: Instant) -> Self {
        Self { started, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    /// Record one newly written file, returning a report on every tenth
    pub fn record_written(&mut self) -> Option<ProgressReport> {
        self.written += 1;
        if self.written % PROGRESS_INTERVAL != 0 {
            return None;
        }

        Some(ProgressReport {
            games_written: self.written,
            elapsed_minutes: round_minutes(self.started.elapsed().as_secs_f64()),
        })
    }
}

fn round_minutes(secs: f64) -> f64 {
    (secs / 60.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_reports_every_tenth_write() {
        let mut tracker = ProgressTracker::start();

        let reports: Vec<_> = (0..25).filter_map(|_| tracker.record_written()).collect();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].games_written, 10);
        assert_eq!(reports[1].games_written, 20);
        assert_eq!(tracker.written(), 25);
    }

    #[test]
    fn test_no_report_below_threshold() {
        let mut tracker = ProgressTracker::start();
        for _ in 0..9 {
            assert!(tracker.record_written().is_none());
        }
        assert!(tracker.record_written().is_some());
    }

    #[test]
    fn test_elapsed_minutes_rounding() {
        assert_eq!(round_minutes(90.0), 1.5);
        assert_eq!(round_minutes(61.0), 1.02);
        assert_eq!(round_minutes(0.0), 0.0);

        let started = Instant::now() - Duration::from_secs(120);
        let mut tracker = ProgressTracker::started_at(started);
        let report = (0..10).filter_map(|_| tracker.record_written()).last().unwrap();
        assert!(report.elapsed_minutes >= 2.0);
    }
}
