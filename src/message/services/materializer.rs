//! Content materialization service.
//!
//! Single-consumption payload representations must be buffered before a
//! message can be shared: once a downstream component drains the stream or
//! traversal behind them, every later read sees nothing. The materializer
//! converts those representations into re-readable [`Document`] form and
//! passes every repeatable representation through untouched.

use crate::message::domain::{ByteStream, Content, Document, EventStream};
use crate::message::error::TransformationError;
use serde_json::Value;
use std::io::Read;
use tracing::debug;

/// Converts single-consumption payloads into re-readable document form.
///
/// # Examples
///
/// ```
/// use crossdock::message::domain::{ByteStream, Content, ContentKind};
/// use crossdock::message::services::ContentMaterializer;
///
/// let stream = ByteStream::from_vec(br#"{"order": 42}"#.to_vec());
/// let materializer = ContentMaterializer::new();
///
/// let content = materializer
///     .materialize(&Content::Stream(stream))
///     .expect("well-formed payload");
/// assert_eq!(content.kind(), ContentKind::Document);
/// assert!(content.is_repeatable());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentMaterializer;

impl ContentMaterializer {
    /// Creates a materializer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns a re-readable rendition of `content`.
    ///
    /// Repeatable representations come back as cheap shared clones.
    /// Stream-backed content is drained and parsed into a document;
    /// event-traversal-backed content is folded into one. Consuming the
    /// one-shot source exhausts it for every handle, so materialization
    /// happens at most once per payload.
    ///
    /// # Errors
    ///
    /// Fails if the one-shot source was already consumed, if draining the
    /// stream fails, or if the payload does not form a well-formed document.
    pub fn materialize(&self, content: &Content) -> Result<Content, TransformationError> {
        match content {
            Content::Text(_) | Content::Bytes(_) | Content::Resource(_) | Content::Document(_) => {
                Ok(content.clone())
            }
            Content::Stream(stream) => materialize_stream(stream),
            Content::Events(events) => materialize_events(events),
        }
    }
}

fn materialize_stream(stream: &ByteStream) -> Result<Content, TransformationError> {
    let mut reader = stream
        .take()
        .ok_or_else(|| TransformationError::new("stream-backed content was already consumed"))?;
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).map_err(|err| {
        TransformationError::with_cause("failed to drain stream-backed content", err)
    })?;
    let root: Value = serde_json::from_slice(&buffer).map_err(|err| {
        TransformationError::with_cause("stream-backed content is not a well-formed document", err)
    })?;
    debug!(bytes = buffer.len(), "materialized stream-backed content");
    Ok(Content::Document(Document::new(root)))
}

fn materialize_events(events: &EventStream) -> Result<Content, TransformationError> {
    let traversal = events
        .take()
        .ok_or_else(|| TransformationError::new("event-traversal content was already consumed"))?;
    let document = Document::from_events(traversal).map_err(|err| {
        TransformationError::with_cause("event traversal did not form a well-formed document", err)
    })?;
    debug!("materialized event-traversal content");
    Ok(Content::Document(document))
}
