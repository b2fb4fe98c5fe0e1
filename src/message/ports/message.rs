//! Port definition for the normalized message abstraction.
//!
//! The normalization core never owns a concrete message type; it works
//! against this trait so any runtime-provided message implementation can be
//! copied from or into.

use crate::message::domain::{Attachment, Content, PropertyValue, SecuritySubject};
use std::sync::Arc;
use thiserror::Error;

/// Errors a message implementation may raise when asked to add an attachment.
///
/// The duplicate and validity policy belongs to the implementation; the core
/// only propagates whatever the destination decides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    /// The attachment name is empty or otherwise unusable.
    #[error("attachment name '{0}' is not valid")]
    InvalidName(String),

    /// The message refuses to replace an attachment it already holds.
    #[error("attachment '{0}' already exists")]
    Duplicate(String),
}

/// The four-facet message abstraction the normalization core works against.
///
/// A normalized message carries payload content, named properties, named
/// binary attachments, and an optional security subject. Properties,
/// attachments, and subjects move between messages as shared handles; the
/// trait therefore returns owned handles rather than borrows.
///
/// The trait is object-safe so exchanges can carry heterogeneous message
/// implementations behind `dyn NormalizedMessage`.
pub trait NormalizedMessage {
    /// Returns the payload content, if any.
    fn content(&self) -> Option<&Content>;

    /// Replaces the payload content. `None` clears it.
    fn set_content(&mut self, content: Option<Content>);

    /// Returns the property stored under `name`, if any.
    fn property(&self, name: &str) -> Option<PropertyValue>;

    /// Stores a property under `name`, replacing any previous value.
    fn set_property(&mut self, name: &str, value: PropertyValue);

    /// Returns the names of all properties on the message.
    fn property_names(&self) -> Vec<String>;

    /// Returns the attachment stored under `name`, if any.
    fn attachment(&self, name: &str) -> Option<Arc<Attachment>>;

    /// Adds an attachment under `name`.
    ///
    /// # Errors
    ///
    /// Returns an [`AttachmentError`] if the implementation rejects the name
    /// or refuses to replace an existing attachment.
    fn add_attachment(
        &mut self,
        name: &str,
        attachment: Arc<Attachment>,
    ) -> Result<(), AttachmentError>;

    /// Returns the names of all attachments on the message.
    fn attachment_names(&self) -> Vec<String>;

    /// Returns the security subject, if one is attached.
    fn security_subject(&self) -> Option<Arc<SecuritySubject>>;

    /// Replaces the security subject. `None` clears it.
    fn set_security_subject(&mut self, subject: Option<Arc<SecuritySubject>>);
}
