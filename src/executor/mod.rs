//! Worker-pool executors sized per endpoint.
//!
//! The surrounding runtime hands each endpoint an executor for its
//! asynchronous processing work. Executors are created by identifier through
//! an [`ExecutorFactory`], which looks the identifier up in its
//! [`ExecutorConfig`] to size the pool. Regular executors drain in-flight
//! work on shutdown; daemon executors abandon it.
//!
//! The message normalization core neither depends on nor creates executors;
//! this module is an independent collaborator of the same runtime.

mod config;
mod factory;
mod runtime;

pub use config::{ExecutorConfig, ExecutorSettings};
pub use factory::{Executor, ExecutorError, ExecutorFactory, Task};
pub use runtime::TokioExecutorFactory;
