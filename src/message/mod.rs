//! Message normalization for Crossdock exchanges.
//!
//! This module implements the facet-copy and content-materialization core
//! applied when a message travels between the legs of an exchange.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Content`], [`domain::Document`],
//!   [`domain::Exchange`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::message::NormalizedMessage`],
//!   [`ports::transformer::MessageTransformer`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryMessage`])
//! - **Services**: The copy and materialization workflows
//!   ([`services::CopyTransformer`], [`services::ContentMaterializer`])
//!
//! # Example
//!
//! ```
//! use crossdock::message::adapters::memory::InMemoryMessage;
//! use crossdock::message::domain::{
//!     Attachment, ByteStream, Content, Exchange, ExchangePattern, SecuritySubject,
//! };
//! use crossdock::message::ports::NormalizedMessage;
//! use crossdock::message::services::CopyTransformer;
//! use mockable::DefaultClock;
//! use std::sync::Arc;
//!
//! let clock = DefaultClock;
//! let exchange = Exchange::new(ExchangePattern::InOut, &clock);
//! let from = InMemoryMessage::new()
//!     .with_content(Content::Stream(ByteStream::from_vec(br#"{"order": 42}"#.to_vec())))
//!     .with_property("channel", "orders")
//!     .with_attachment("manifest", Arc::new(Attachment::new("text/csv", b"id\n42".to_vec())))
//!     .with_security_subject(SecuritySubject::new("cn=order-service"));
//!
//! let to: InMemoryMessage = CopyTransformer::shared()
//!     .transform_new(&exchange, &from)
//!     .expect("copy succeeds");
//!
//! // The stream-backed payload was materialized into a re-readable document.
//! assert!(to.content().is_some_and(Content::is_repeatable));
//! assert!(to.attachment("manifest").is_some());
//! assert!(to.security_subject().is_some());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
