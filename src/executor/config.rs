//! Executor sizing configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Sizing and shutdown settings for a single executor.
///
/// Every field defaults sensibly, both in [`Default`] and when omitted from
/// a serialised form.
///
/// # Examples
///
/// ```
/// use crossdock::executor::ExecutorSettings;
/// use std::time::Duration;
///
/// let settings = ExecutorSettings::default()
///     .with_worker_threads(2)
///     .with_shutdown_timeout(Duration::from_secs(1));
/// assert_eq!(settings.worker_threads, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorSettings {
    /// Number of worker threads in the pool, bounding how many submitted
    /// tasks run concurrently. Zero is treated as one.
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
    /// How long idle worker threads are kept alive.
    #[serde(default = "default_keep_alive")]
    pub keep_alive: Duration,
    /// How long a regular executor waits for in-flight work on shutdown.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: Duration,
}

const fn default_worker_threads() -> usize {
    4
}

const fn default_keep_alive() -> Duration {
    Duration::from_secs(60)
}

const fn default_shutdown_timeout() -> Duration {
    Duration::from_secs(5)
}

impl ExecutorSettings {
    /// Returns the settings with the worker thread count set.
    #[must_use]
    pub const fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    /// Returns the settings with the idle keep-alive set.
    #[must_use]
    pub const fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    /// Returns the settings with the shutdown timeout set.
    #[must_use]
    pub const fn with_shutdown_timeout(mut self, shutdown_timeout: Duration) -> Self {
        self.shutdown_timeout = shutdown_timeout;
        self
    }
}

impl Default for ExecutorSettings {
    fn default() -> Self {
        Self {
            worker_threads: default_worker_threads(),
            keep_alive: default_keep_alive(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

/// Per-executor settings keyed by identifier, with a factory-wide default.
///
/// # Examples
///
/// ```
/// use crossdock::executor::{ExecutorConfig, ExecutorSettings};
///
/// let config = ExecutorConfig::new()
///     .with_override("orders-endpoint", ExecutorSettings::default().with_worker_threads(8));
/// assert_eq!(config.settings_for("orders-endpoint").worker_threads, 8);
/// assert_eq!(config.settings_for("unknown").worker_threads, 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Settings applied to identifiers without a dedicated entry.
    #[serde(default)]
    pub defaults: ExecutorSettings,
    /// Dedicated settings per executor identifier.
    #[serde(default)]
    pub overrides: HashMap<String, ExecutorSettings>,
}

impl ExecutorConfig {
    /// Creates a configuration with default settings for every identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configuration with its factory-wide defaults replaced.
    #[must_use]
    pub const fn with_defaults(mut self, defaults: ExecutorSettings) -> Self {
        self.defaults = defaults;
        self
    }

    /// Returns the configuration with a dedicated entry for `id`.
    #[must_use]
    pub fn with_override(mut self, id: impl Into<String>, settings: ExecutorSettings) -> Self {
        self.overrides.insert(id.into(), settings);
        self
    }

    /// Returns the settings for `id`: its dedicated entry if one exists,
    /// otherwise the factory-wide defaults.
    #[must_use]
    pub fn settings_for(&self, id: &str) -> ExecutorSettings {
        self.overrides.get(id).copied().unwrap_or(self.defaults)
    }
}
