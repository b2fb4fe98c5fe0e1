//! Domain types for the message subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! Payload representations, properties, attachments, and security subjects are
//! all cheap to clone and share underlying storage rather than duplicating it.

mod attachment;
mod content;
mod document;
mod exchange;
mod property;
mod security;

pub use attachment::Attachment;
pub use content::{ByteStream, Content, ContentKind, EventIter, EventStream, ResourceRef};
pub use document::{Document, DocumentError, DocumentEvent};
pub use exchange::{Exchange, ExchangeId, ExchangePattern, ParseExchangePatternError};
pub use property::{BODY_PROPERTY, PropertyValue};
pub use security::SecuritySubject;
