//! Executor and factory contracts.

use std::io;
use thiserror::Error;

/// A unit of fire-and-forget work handed to an executor.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A pool of worker threads processing fire-and-forget tasks.
pub trait Executor: Send + Sync {
    /// Returns the identifier the executor was created under.
    fn id(&self) -> &str;

    /// Returns the number of worker threads serving the pool.
    fn worker_count(&self) -> usize;

    /// Hands a task to the pool.
    ///
    /// Tasks are executed in submission order per worker but with no ordering
    /// guarantee across workers. At most [`worker_count`](Executor::worker_count)
    /// tasks run at once; the rest queue. A panicking task must not take down
    /// the pool or affect other submissions.
    fn execute(&self, task: Task);

    /// Shuts the pool down, consuming the handle.
    ///
    /// Whether in-flight work is drained or abandoned depends on how the
    /// executor was created; see [`ExecutorFactory`].
    fn shutdown(self: Box<Self>);
}

/// Creates executors sized per endpoint identifier.
///
/// The identifier selects the executor's settings and names its worker
/// threads, so runtime diagnostics can tell the pools apart.
pub trait ExecutorFactory: Send + Sync {
    /// Creates an executor whose shutdown waits for in-flight work.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecutorError`] if the worker pool cannot be built.
    fn create_executor(&self, id: &str) -> Result<Box<dyn Executor>, ExecutorError>;

    /// Creates a daemon-style executor whose shutdown abandons in-flight
    /// work, mirroring daemon threads that die with the process.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecutorError`] if the worker pool cannot be built.
    fn create_daemon_executor(&self, id: &str) -> Result<Box<dyn Executor>, ExecutorError>;
}

/// Errors from building executor pools.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The underlying worker pool could not be constructed.
    #[error("failed to build worker pool for executor '{id}'")]
    Build {
        /// The identifier the pool was requested for.
        id: String,
        /// The underlying runtime failure.
        #[source]
        source: io::Error,
    },
}

impl ExecutorError {
    /// Creates a pool-construction error.
    #[must_use]
    pub fn build(id: impl Into<String>, source: io::Error) -> Self {
        Self::Build {
            id: id.into(),
            source,
        }
    }
}
