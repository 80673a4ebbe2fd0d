//! Per-file progress state and the throttling decision.

use std::sync::Arc;
use std::time::Duration;

use crate::clock::Clock;
use crate::observer::ProgressListener;
use crate::sink::ProgressSink;

/// Default minimum spacing between timed progress lines.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(6000);

/// Decides when a byte-count report becomes a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottlePolicy {
    /// Emit whenever the integer percentage has advanced by at least one
    /// point since the previous report.
    PercentDelta,
    /// Like [`PercentDelta`](Self::PercentDelta), but consecutive lines are
    /// additionally spaced strictly more than `min_interval` apart, and the
    /// 100% line is emitted the moment the transfer completes, exactly once.
    ///
    /// A fresh file starts with its last-report time at the epoch, so under
    /// a wall clock the first advancing report is emitted immediately.
    TimedPercentDelta {
        /// Minimum time between consecutive progress lines.
        min_interval: Duration,
    },
}

impl Default for ThrottlePolicy {
    /// Timed percent-delta with the six-second default interval.
    fn default() -> Self {
        Self::TimedPercentDelta {
            min_interval: DEFAULT_MIN_INTERVAL,
        }
    }
}

/// Progress state for a single file transfer.
///
/// Byte counts are cumulative and expected to be non-decreasing; the tracker
/// tolerates anything without panicking. A size of zero or less disables all
/// output for the file.
pub(crate) struct FileProgress {
    name: String,
    size: i64,
    policy: ThrottlePolicy,
    /// Last computed percentage, updated on every report whether or not a
    /// line was emitted.
    last_percent: i64,
    /// Epoch millis of the last emitted line; zero until the first one.
    last_report_at: u64,
    complete: bool,
    sink: Arc<dyn ProgressSink>,
    clock: Arc<dyn Clock>,
}

impl FileProgress {
    pub(crate) fn new(
        name: String,
        size: i64,
        policy: ThrottlePolicy,
        sink: Arc<dyn ProgressSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            name,
            size,
            policy,
            last_percent: 0,
            last_report_at: 0,
            complete: false,
            sink,
            clock,
        }
    }

    fn report_percent_delta(&mut self, transferred: i64) {
        let percent = transferred * 100 / self.size;
        if percent - self.last_percent >= 1 {
            self.sink
                .lifecycle(&format!("transferred {percent}% of `{}`", self.name));
        }
        self.last_percent = percent;
    }

    fn report_timed(&mut self, transferred: i64, min_interval: Duration) {
        if self.complete {
            return;
        }
        let percent = transferred * 100 / self.size;
        let just_completed = percent == 100;
        if just_completed {
            self.complete = true;
        }

        let now = self.clock.now_millis();
        let elapsed = now.saturating_sub(self.last_report_at);
        let interval_ms = min_interval.as_millis() as u64;
        if just_completed || (elapsed > interval_ms && percent - self.last_percent >= 1) {
            self.sink
                .lifecycle(&format!("`{}` transferred {percent}%", self.name));
            self.last_report_at = now;
        }
        self.last_percent = percent;
    }
}

impl ProgressListener for FileProgress {
    fn on_bytes_transferred(&mut self, transferred: i64) {
        if self.size <= 0 {
            return;
        }
        match self.policy {
            ThrottlePolicy::PercentDelta => self.report_percent_delta(transferred),
            ThrottlePolicy::TimedPercentDelta { min_interval } => {
                self.report_timed(transferred, min_interval)
            }
        }
    }
}
