//! Throttled progress reporting over file-transfer callbacks.
//!
//! A transfer engine drives a [`TransferObserver`] with directory and file
//! lifecycle events, then feeds cumulative byte counts to the per-file
//! [`ProgressListener`] it hands back. The concrete [`ProgressReporter`]
//! answers with short human-readable log lines, throttled by a
//! [`ThrottlePolicy`] so busy transfers do not flood the log. Every callback
//! is total: degenerate input is a silent no-op, never an error, and the
//! reporter can never abort a transfer.

mod clock;
mod observer;
mod sink;
mod tracker;

pub use clock::{Clock, SystemClock};
pub use observer::{ProgressListener, ProgressReporter, SizeFormatter, TransferObserver};
pub use sink::{ProgressSink, TracingSink};
pub use tracker::{DEFAULT_MIN_INTERVAL, ThrottlePolicy};
