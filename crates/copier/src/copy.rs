//! Recursive chunked copy.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use shiplog_progress::TransferObserver;

use crate::{CopyError, CopyOptions, CopySummary, DEFAULT_CHUNK_SIZE};

/// Copies the directory tree under `src` into `dst`, reporting every
/// lifecycle event to `observer`.
///
/// Entries are visited in name order. Each entered directory is announced
/// through [`TransferObserver::on_directory`] and its contents are walked
/// through the observer returned by that call; each file is announced
/// through [`TransferObserver::on_file`] and copied in
/// [`chunk_size`](CopyOptions::chunk_size) pieces, with the cumulative byte
/// count reported after every chunk. The cancellation token is polled
/// between chunks and between entries.
pub fn copy_tree(
    src: &Path,
    dst: &Path,
    options: &CopyOptions,
    observer: &dyn TransferObserver,
    cancel: &CancellationToken,
) -> Result<CopySummary, CopyError> {
    let metadata = match std::fs::metadata(src) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CopyError::SourceNotFound(src.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };
    if !metadata.is_dir() {
        return Err(CopyError::NotADirectory(src.display().to_string()));
    }

    debug!(src = %src.display(), dst = %dst.display(), "starting tree copy");
    std::fs::create_dir_all(dst)?;

    let mut summary = CopySummary::default();
    copy_dir(src, src, dst, options, observer, cancel, &mut summary)?;

    debug!(files = summary.files, bytes = summary.bytes, "tree copy complete");
    Ok(summary)
}

fn copy_dir(
    root: &Path,
    current: &Path,
    dst_dir: &Path,
    options: &CopyOptions,
    observer: &dyn TransferObserver,
    cancel: &CancellationToken,
    summary: &mut CopySummary,
) -> Result<(), CopyError> {
    let mut entries = std::fs::read_dir(current)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        check_cancelled(cancel)?;

        let path = entry.path();
        let metadata = entry.metadata()?;
        let target = dst_dir.join(entry.file_name());

        if metadata.is_dir() {
            std::fs::create_dir_all(&target)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let nested = observer.on_directory(&name);
            copy_dir(root, &path, &target, options, nested, cancel, summary)?;
        } else if metadata.is_file() {
            let size = metadata.len() as i64;
            copy_file(root, &path, &target, size, options, observer, cancel)?;
            summary.files += 1;
            summary.bytes += size;
        }
    }

    Ok(())
}

fn copy_file(
    root: &Path,
    src: &Path,
    dst: &Path,
    size: i64,
    options: &CopyOptions,
    observer: &dyn TransferObserver,
    cancel: &CancellationToken,
) -> Result<(), CopyError> {
    let rel_path = src.strip_prefix(root).map_err(std::io::Error::other)?;
    let rel_str = rel_path.to_string_lossy().replace('\\', "/");

    let mut listener = observer.on_file(&rel_str, size);

    let chunk_size = if options.chunk_size == 0 {
        DEFAULT_CHUNK_SIZE
    } else {
        options.chunk_size
    };

    let mut reader = File::open(src)?;
    let mut writer = File::create(dst)?;
    let mut buf = vec![0u8; chunk_size];
    let mut transferred: i64 = 0;

    loop {
        check_cancelled(cancel)?;
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n])?;
        transferred += n as i64;
        listener.on_bytes_transferred(transferred);
    }

    Ok(())
}

fn check_cancelled(cancel: &CancellationToken) -> Result<(), CopyError> {
    if cancel.is_cancelled() {
        Err(CopyError::Cancelled)
    } else {
        Ok(())
    }
}
