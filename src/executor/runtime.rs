//! Tokio-backed executor adapter.
//!
//! Each executor owns a dedicated multi-thread runtime whose worker threads
//! carry the executor identifier in their names. Tasks run on the runtime's
//! blocking pool, capped at the configured worker count, so the settings
//! bound how many tasks an executor runs at once and one endpoint's
//! long-running work never starves another endpoint's pool. Dropping an
//! executor without calling [`shutdown`](Executor::shutdown) waits for
//! in-flight work, as dropping a runtime does.

use super::config::ExecutorConfig;
use super::factory::{Executor, ExecutorError, ExecutorFactory, Task};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, warn};

/// Factory producing executors backed by dedicated Tokio runtimes.
///
/// # Examples
///
/// ```
/// use crossdock::executor::{ExecutorFactory, TokioExecutorFactory};
///
/// let factory = TokioExecutorFactory::new();
/// let executor = factory.create_executor("orders-endpoint").expect("pool builds");
/// executor.execute(Box::new(|| ()));
/// executor.shutdown();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokioExecutorFactory {
    config: ExecutorConfig,
}

impl TokioExecutorFactory {
    /// Creates a factory with default settings for every identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory with the given per-identifier configuration.
    #[must_use]
    pub const fn with_config(config: ExecutorConfig) -> Self {
        Self { config }
    }

    /// Returns the per-identifier configuration.
    #[must_use]
    pub const fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    fn build(&self, id: &str, daemon: bool) -> Result<Box<dyn Executor>, ExecutorError> {
        let settings = self.config.settings_for(id);
        let worker_threads = settings.worker_threads.max(1);
        // execute() submits via spawn_blocking, so the blocking pool is the
        // pool being sized.
        let runtime = Builder::new_multi_thread()
            .worker_threads(worker_threads)
            .max_blocking_threads(worker_threads)
            .thread_name(format!("{id}-worker"))
            .thread_keep_alive(settings.keep_alive)
            .build()
            .map_err(|err| ExecutorError::build(id, err))?;
        debug!(id, daemon, workers = worker_threads, "created executor");
        Ok(Box::new(TokioExecutor {
            id: id.to_owned(),
            daemon,
            worker_threads,
            shutdown_timeout: settings.shutdown_timeout,
            runtime,
        }))
    }
}

impl ExecutorFactory for TokioExecutorFactory {
    fn create_executor(&self, id: &str) -> Result<Box<dyn Executor>, ExecutorError> {
        self.build(id, false)
    }

    fn create_daemon_executor(&self, id: &str) -> Result<Box<dyn Executor>, ExecutorError> {
        self.build(id, true)
    }
}

/// An executor backed by its own Tokio runtime.
struct TokioExecutor {
    id: String,
    daemon: bool,
    worker_threads: usize,
    shutdown_timeout: std::time::Duration,
    runtime: Runtime,
}

impl Executor for TokioExecutor {
    fn id(&self) -> &str {
        &self.id
    }

    fn worker_count(&self) -> usize {
        self.worker_threads
    }

    fn execute(&self, task: Task) {
        let id = self.id.clone();
        // Fire-and-forget: the join handle is dropped, so panics are caught
        // and logged here.
        drop(self.runtime.spawn_blocking(move || {
            if let Err(payload) = catch_unwind(AssertUnwindSafe(task)) {
                warn!(id = %id, reason = panic_reason(&payload), "task panicked");
            }
        }));
    }

    fn shutdown(self: Box<Self>) {
        let this = *self;
        debug!(id = %this.id, daemon = this.daemon, "shutting executor down");
        if this.daemon {
            this.runtime.shutdown_background();
        } else {
            this.runtime.shutdown_timeout(this.shutdown_timeout);
        }
    }
}

/// Renders a panic payload for the task-failure log record.
fn panic_reason(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("opaque panic payload")
}
