//! Local reference engine for progress reporting: copies a directory tree
//! in fixed-size chunks while driving a
//! [`TransferObserver`](shiplog_progress::TransferObserver) with directory,
//! file, and byte-count events.
//!
//! The engine is synchronous; callers that need to keep a runtime responsive
//! run it on a blocking thread and cancel it through the token it polls
//! between chunks.

mod copy;
mod scanner;

pub use copy::copy_tree;
pub use scanner::{FileEntry, scan_tree};

/// Default copy chunk size (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Errors produced during a tree copy.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("source not found: {0}")]
    SourceNotFound(String),

    #[error("source is not a directory: {0}")]
    NotADirectory(String),

    #[error("cancelled")]
    Cancelled,
}

/// Tuning knobs for [`copy_tree`].
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Bytes per read/write chunk. Zero selects [`DEFAULT_CHUNK_SIZE`].
    pub chunk_size: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Totals for a finished copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub files: u64,
    pub bytes: i64,
}
