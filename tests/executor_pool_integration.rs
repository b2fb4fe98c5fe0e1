//! Behavioural integration tests for per-endpoint executor pools.
//!
//! These tests exercise the factory and executor contracts end to end:
//! pools sized per endpoint identifier, fire-and-forget task execution,
//! and the two shutdown disciplines.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod test_helpers;

use crossdock::executor::{ExecutorConfig, ExecutorFactory, ExecutorSettings, TokioExecutorFactory};
use std::sync::mpsc;
use std::time::Duration;
use test_helpers::init_tracing;

// ============================================================================
// Scenario: Endpoints get independently sized pools
// ============================================================================

/// When two endpoints request executors from the same factory,
/// each pool should be sized by its own identifier and run its own work.
#[test]
fn endpoints_get_independently_sized_pools() {
    // Arrange
    init_tracing();
    let factory = TokioExecutorFactory::with_config(
        ExecutorConfig::new()
            .with_defaults(ExecutorSettings::default().with_worker_threads(1))
            .with_override(
                "orders-endpoint",
                ExecutorSettings::default().with_worker_threads(2),
            ),
    );

    let orders = factory
        .create_executor("orders-endpoint")
        .expect("orders pool builds");
    let billing = factory
        .create_executor("billing-endpoint")
        .expect("billing pool builds");

    // Act
    let (sender, receiver) = mpsc::channel();
    let orders_sender = sender.clone();
    orders.execute(Box::new(move || {
        orders_sender.send("orders").expect("receiver alive");
    }));
    billing.execute(Box::new(move || {
        sender.send("billing").expect("receiver alive");
    }));

    // Assert
    assert_eq!(orders.worker_count(), 2);
    assert_eq!(billing.worker_count(), 1);
    let mut completed: Vec<&str> = (0..2)
        .map(|_| {
            receiver
                .recv_timeout(Duration::from_secs(5))
                .expect("task ran")
        })
        .collect();
    completed.sort_unstable();
    assert_eq!(completed, vec!["billing", "orders"]);

    orders.shutdown();
    billing.shutdown();
}

// ============================================================================
// Scenario: The factory port drives pool creation
// ============================================================================

/// A runtime holding the factory behind its port should be able to create
/// both shutdown disciplines and run work on them.
#[test]
fn factory_port_creates_working_pools() {
    // Arrange
    init_tracing();
    let factory: Box<dyn ExecutorFactory> = Box::new(TokioExecutorFactory::new());

    let regular = factory
        .create_executor("regular-endpoint")
        .expect("regular pool builds");
    let daemon = factory
        .create_daemon_executor("daemon-endpoint")
        .expect("daemon pool builds");

    // Act
    let (sender, receiver) = mpsc::channel();
    let regular_sender = sender.clone();
    regular.execute(Box::new(move || {
        regular_sender.send("regular").expect("receiver alive");
    }));
    daemon.execute(Box::new(move || {
        sender.send("daemon").expect("receiver alive");
    }));

    // Assert
    let mut completed: Vec<&str> = (0..2)
        .map(|_| {
            receiver
                .recv_timeout(Duration::from_secs(5))
                .expect("task ran")
        })
        .collect();
    completed.sort_unstable();
    assert_eq!(completed, vec!["daemon", "regular"]);

    regular.shutdown();
    daemon.shutdown();
}

// ============================================================================
// Scenario: A burst of tasks all complete
// ============================================================================

/// A burst of fire-and-forget submissions should all run to completion,
/// regardless of which worker picks each one up.
#[test]
fn burst_of_tasks_all_complete() {
    // Arrange
    init_tracing();
    let factory = TokioExecutorFactory::with_config(
        ExecutorConfig::new().with_defaults(ExecutorSettings::default().with_worker_threads(2)),
    );
    let executor = factory.create_executor("burst").expect("pool builds");

    // Act
    let (sender, receiver) = mpsc::channel();
    for index in 0..32 {
        let task_sender = sender.clone();
        executor.execute(Box::new(move || {
            task_sender.send(index).expect("receiver alive");
        }));
    }

    // Assert
    let mut seen: Vec<i32> = (0..32)
        .map(|_| {
            receiver
                .recv_timeout(Duration::from_secs(10))
                .expect("task ran")
        })
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..32).collect::<Vec<i32>>());

    executor.shutdown();
}
