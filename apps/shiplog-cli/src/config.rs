//! CLI configuration.
//!
//! Configuration is optional TOML supplied with `--config`; every key has a
//! default so a missing file section still yields a working setup.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use shiplog_copier::DEFAULT_CHUNK_SIZE;
use shiplog_progress::{DEFAULT_MIN_INTERVAL, SizeFormatter, ThrottlePolicy};

/// Throttle policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Log on every whole-percent advance.
    PercentDelta,
    /// Percent advance gated by `min_interval_ms`, with a one-shot 100% line.
    TimedPercentDelta,
}

/// Size display selector for the file-started line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeFormat {
    /// Kilobytes with one decimal, whatever the magnitude.
    Kib,
    /// Unit scaled to magnitude (B through TB).
    Scaled,
}

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Which throttle policy progress lines follow.
    #[serde(default = "default_policy")]
    pub policy: PolicyKind,

    /// Minimum spacing between timed progress lines, in milliseconds.
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,

    /// How the file-started line renders sizes.
    #[serde(default = "default_size_format")]
    pub size_format: SizeFormat,

    /// Bytes per copy chunk (0 = engine default).
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_policy() -> PolicyKind {
    PolicyKind::TimedPercentDelta
}

fn default_min_interval_ms() -> u64 {
    DEFAULT_MIN_INTERVAL.as_millis() as u64
}

fn default_size_format() -> SizeFormat {
    SizeFormat::Scaled
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            min_interval_ms: default_min_interval_ms(),
            size_format: default_size_format(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                Ok(toml::from_str(&content)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// The configured throttle policy.
    pub fn throttle_policy(&self) -> ThrottlePolicy {
        match self.policy {
            PolicyKind::PercentDelta => ThrottlePolicy::PercentDelta,
            PolicyKind::TimedPercentDelta => ThrottlePolicy::TimedPercentDelta {
                min_interval: Duration::from_millis(self.min_interval_ms),
            },
        }
    }

    /// The configured size formatter.
    pub fn size_formatter(&self) -> SizeFormatter {
        match self.size_format {
            SizeFormat::Kib => shiplog_format::kibibytes,
            SizeFormat::Scaled => shiplog_format::scaled,
        }
    }
}
