//! Message implementations backing the [`NormalizedMessage`] port.
//!
//! Adapters connect the normalization core to concrete message storage. The
//! crate ships a single adapter:
//!
//! - [`memory::InMemoryMessage`]: value-backed facets held in memory, the
//!   default destination for convenience copies and the message used by tests
//!
//! Runtimes with their own message representations implement the port
//! directly and need nothing from this module.
//!
//! [`NormalizedMessage`]: crate::message::ports::message::NormalizedMessage

pub mod memory;
