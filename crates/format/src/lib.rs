//! Byte-count display formatting.
//!
//! These helpers turn raw byte counts into the short human-readable strings
//! that progress lines embed. They are plain functions so callers can inject
//! whichever convention their logs standardize on.

/// Format a byte count as kilobytes with one decimal digit.
///
/// Always uses `kB`, regardless of magnitude: `2048` renders as `"2.0 kB"`,
/// `1048576` as `"1024.0 kB"`. Zero and negative counts pass through the
/// same division.
pub fn kibibytes(bytes: i64) -> String {
    format!("{:.1} kB", bytes as f64 / 1024.0)
}

/// Format a byte count with a unit scaled to its magnitude.
///
/// Divides by 1024 through `B`, `kB`, `MB`, `GB`, `TB` and keeps one decimal
/// digit: `1536` renders as `"1.5 kB"`, `512` as `"512.0 B"`.
pub fn scaled(bytes: i64) -> String {
    const UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{size:.1} {}", UNITS[unit_index])
}
