//! In-memory adapter implementations.
//!
//! Provides the value-backed [`InMemoryMessage`] used as the default copy
//! destination and as the message implementation of choice in tests.

mod message;

pub use message::InMemoryMessage;
