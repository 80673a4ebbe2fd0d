//! Wires the reporter and the copy engine together.

use std::path::PathBuf;
use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::info;

use shiplog_copier::{CopyError, CopyOptions, copy_tree, scan_tree};
use shiplog_progress::ProgressReporter;

use crate::config::Config;

/// Copies `src` into `dst` until done or interrupted.
pub async fn run(config: Config, src: PathBuf, dst: PathBuf) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();

    let (files, total_bytes) = scan_tree(&src)?;
    info!(
        files = files.len(),
        total_bytes,
        src = %src.display(),
        "scanned source tree"
    );

    let reporter = ProgressReporter::new(config.throttle_policy(), config.size_formatter());
    let options = CopyOptions {
        chunk_size: config.chunk_size,
    };

    let started = Instant::now();
    let copy_cancel = cancel.clone();
    let mut copy = tokio::task::spawn_blocking(move || {
        copy_tree(&src, &dst, &options, &reporter, &copy_cancel)
    });

    let result = tokio::select! {
        result = &mut copy => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("SIGINT received, cancelling copy");
            cancel.cancel();
            (&mut copy).await?
        }
    };

    match result {
        Ok(summary) => {
            info!(
                files = summary.files,
                bytes = summary.bytes,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "copy finished"
            );
            Ok(())
        }
        Err(CopyError::Cancelled) => {
            info!("copy cancelled before completion");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
