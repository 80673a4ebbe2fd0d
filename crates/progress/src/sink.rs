//! Destination for finished progress lines.

use tracing::info;

/// Consumes finished progress lines, one per call.
///
/// Lines arrive fully worded; implementations only decide where they go.
pub trait ProgressSink: Send + Sync {
    fn lifecycle(&self, line: &str);
}

/// Forwards lines to [`tracing`] at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn lifecycle(&self, line: &str) {
        info!("{line}");
    }
}
