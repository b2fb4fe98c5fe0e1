//! Value-backed message implementation.

use crate::message::domain::{Attachment, Content, PropertyValue, SecuritySubject};
use crate::message::ports::{AttachmentError, NormalizedMessage};
use std::collections::HashMap;
use std::sync::Arc;

/// A message holding its four facets in memory.
///
/// This is the destination allocated by convenience copies and the workhorse
/// message of tests. Its write policy: property and attachment writes merge
/// into the existing maps (the same name replaces), content and
/// security-subject writes overwrite. [`add_attachment`] rejects empty or
/// whitespace-only names.
///
/// [`add_attachment`]: NormalizedMessage::add_attachment
///
/// # Examples
///
/// ```
/// use crossdock::message::adapters::memory::InMemoryMessage;
/// use crossdock::message::domain::Content;
/// use crossdock::message::ports::NormalizedMessage;
///
/// let message = InMemoryMessage::new()
///     .with_content(Content::text("hello"))
///     .with_property("channel", "orders");
/// assert!(message.content().is_some());
/// assert_eq!(message.property_names(), vec!["channel".to_owned()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessage {
    content: Option<Content>,
    properties: HashMap<String, PropertyValue>,
    attachments: HashMap<String, Arc<Attachment>>,
    security_subject: Option<Arc<SecuritySubject>>,
}

impl InMemoryMessage {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the payload content.
    #[must_use]
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Stores a property under `name`.
    #[must_use]
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Stores an attachment under `name`.
    ///
    /// Inserts directly, without the name validation applied by
    /// [`add_attachment`](NormalizedMessage::add_attachment); intended for
    /// assembling source messages and fixtures.
    #[must_use]
    pub fn with_attachment(mut self, name: impl Into<String>, attachment: Arc<Attachment>) -> Self {
        self.attachments.insert(name.into(), attachment);
        self
    }

    /// Attaches a security subject.
    #[must_use]
    pub fn with_security_subject(mut self, subject: SecuritySubject) -> Self {
        self.security_subject = Some(Arc::new(subject));
        self
    }
}

impl NormalizedMessage for InMemoryMessage {
    fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    fn set_content(&mut self, content: Option<Content>) {
        self.content = content;
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.get(name).cloned()
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) {
        self.properties.insert(name.to_owned(), value);
    }

    fn property_names(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }

    fn attachment(&self, name: &str) -> Option<Arc<Attachment>> {
        self.attachments.get(name).cloned()
    }

    fn add_attachment(
        &mut self,
        name: &str,
        attachment: Arc<Attachment>,
    ) -> Result<(), AttachmentError> {
        if name.trim().is_empty() {
            return Err(AttachmentError::InvalidName(name.to_owned()));
        }
        self.attachments.insert(name.to_owned(), attachment);
        Ok(())
    }

    fn attachment_names(&self) -> Vec<String> {
        self.attachments.keys().cloned().collect()
    }

    fn security_subject(&self) -> Option<Arc<SecuritySubject>> {
        self.security_subject.clone()
    }

    fn set_security_subject(&mut self, subject: Option<Arc<SecuritySubject>>) {
        self.security_subject = subject;
    }
}
