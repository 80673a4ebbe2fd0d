//! Observer traits at the engine seam, and the reporter implementing them.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::sink::{ProgressSink, TracingSink};
use crate::tracker::{FileProgress, ThrottlePolicy};

/// Renders a byte count for the file-started line.
pub type SizeFormatter = fn(i64) -> String;

/// Receives transfer lifecycle events from an engine.
///
/// Engines call [`on_directory`](Self::on_directory) when entering a
/// directory and [`on_file`](Self::on_file) when a file transfer begins; the
/// returned listener then receives that file's byte counts. Every callback
/// is total and returns nothing an engine must check.
pub trait TransferObserver: Send + Sync {
    /// Called when the engine enters a directory.
    ///
    /// Returns the observer to use for entries inside that directory, which
    /// may be `self`.
    fn on_directory(&self, name: &str) -> &dyn TransferObserver;

    /// Called when the engine starts transferring a file of `size` bytes.
    ///
    /// The returned listener tracks that one file and is dropped when the
    /// file is done. A `size` of zero or less marks the length unknown.
    fn on_file(&self, name: &str, size: i64) -> Box<dyn ProgressListener + Send>;
}

/// Receives cumulative byte counts for a single file.
pub trait ProgressListener {
    /// Records that `transferred` bytes of the file have arrived so far.
    fn on_bytes_transferred(&mut self, transferred: i64);
}

/// Logs transfer lifecycle events as throttled, human-readable lines.
///
/// One reporter serves a whole transfer: directory traversal reuses it, and
/// every file gets an independent tracker carrying the reporter's policy,
/// sink, and clock. Names are treated as opaque display text.
pub struct ProgressReporter {
    policy: ThrottlePolicy,
    format_size: SizeFormatter,
    sink: Arc<dyn ProgressSink>,
    clock: Arc<dyn Clock>,
}

impl ProgressReporter {
    /// Creates a reporter with the given throttle policy and size formatter,
    /// logging through [`TracingSink`] on the system clock.
    pub fn new(policy: ThrottlePolicy, format_size: SizeFormatter) -> Self {
        Self {
            policy,
            format_size,
            sink: Arc::new(TracingSink),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the line sink.
    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl TransferObserver for ProgressReporter {
    fn on_directory(&self, name: &str) -> &dyn TransferObserver {
        self.sink
            .lifecycle(&format!("started transferring directory `{name}`"));
        self
    }

    fn on_file(&self, name: &str, size: i64) -> Box<dyn ProgressListener + Send> {
        self.sink.lifecycle(&format!(
            "started transferring file `{name}` ({})",
            (self.format_size)(size)
        ));
        Box::new(FileProgress::new(
            name.to_string(),
            size,
            self.policy,
            self.sink.clone(),
            self.clock.clone(),
        ))
    }
}
