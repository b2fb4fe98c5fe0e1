//! Crossdock: message normalization for integration exchanges.
//!
//! This crate provides the copy step applied when a message travels between
//! the legs of an exchange: selected facets of the inbound message
//! (properties, payload content, attachments, security subject) are
//! transferred onto the outbound message, and single-consumption payload
//! representations are materialized into re-readable form so the copy never
//! exhausts data a later consumer still needs.
//!
//! # Architecture
//!
//! Crossdock follows hexagonal architecture principles:
//!
//! - **Domain**: Pure payload and exchange types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the messages and transformers
//!   the runtime provides
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`message`]: Facet copying and content materialization
//! - [`executor`]: Worker-pool executors sized per endpoint

pub mod executor;
pub mod message;
