//! Payload content representations carried by normalized messages.
//!
//! Content is an explicit tagged variant decided at the point the payload is
//! produced. Repeatable representations (text, bytes, resources, materialized
//! documents) can be read any number of times; stream-backed and
//! event-traversal-backed representations wrap a one-shot source that is
//! exhausted by its first consumer and must be materialized before the payload
//! can be shared.

use super::document::{Document, DocumentError, DocumentEvent};
use std::fmt;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// The payload of a normalized message.
///
/// All variants are cheap to clone: repeatable kinds share immutable buffers,
/// single-consumption kinds share the same one-shot source. Cloning never
/// duplicates payload bytes.
///
/// # Examples
///
/// ```
/// use crossdock::message::domain::Content;
///
/// let content = Content::text(r#"{"order": 42}"#);
/// assert!(content.is_repeatable());
///
/// let copy = content.clone();
/// assert_eq!(copy.kind(), content.kind());
/// ```
#[derive(Debug, Clone)]
pub enum Content {
    /// String-backed payload; repeatable.
    Text(Arc<str>),
    /// Byte-backed payload; repeatable.
    Bytes(Arc<[u8]>),
    /// Resource-backed payload resolved to a filesystem path; repeatable by
    /// re-opening the resource.
    Resource(ResourceRef),
    /// Stream-backed payload over a one-shot reader; single-consumption.
    Stream(ByteStream),
    /// Event-traversal-backed payload; single-consumption.
    Events(EventStream),
    /// Materialized document tree; repeatable and randomly accessible.
    Document(Document),
}

impl Content {
    /// Creates string-backed content.
    #[must_use]
    pub fn text(text: impl Into<Arc<str>>) -> Self {
        Self::Text(text.into())
    }

    /// Creates byte-backed content.
    #[must_use]
    pub fn bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Returns the representation tag of this payload.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Text(_) => ContentKind::Text,
            Self::Bytes(_) => ContentKind::Bytes,
            Self::Resource(_) => ContentKind::Resource,
            Self::Stream(_) => ContentKind::Stream,
            Self::Events(_) => ContentKind::Events,
            Self::Document(_) => ContentKind::Document,
        }
    }

    /// Returns `true` if this payload can be read more than once.
    #[must_use]
    pub const fn is_repeatable(&self) -> bool {
        self.kind().is_repeatable()
    }
}

/// The representation tag of a [`Content`] payload.
///
/// Used for dispatch, logging, and error context; carries no payload data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// String-backed.
    Text,
    /// Byte-backed.
    Bytes,
    /// Resource-backed.
    Resource,
    /// Stream-backed, single-consumption.
    Stream,
    /// Event-traversal-backed, single-consumption.
    Events,
    /// Materialized document tree.
    Document,
}

impl ContentKind {
    /// Returns `true` if payloads of this kind can be read more than once.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        !matches!(self, Self::Stream | Self::Events)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Resource => "resource",
            Self::Stream => "stream",
            Self::Events => "events",
            Self::Document => "document",
        };
        write!(f, "{name}")
    }
}

/// A shared handle over a one-shot byte source.
///
/// Every clone refers to the same underlying reader. The first caller to
/// [`take`](Self::take) consumes the reader for all handles; later calls
/// observe the stream as consumed. This mirrors the behaviour of the
/// single-read sources the handle wraps.
///
/// # Examples
///
/// ```
/// use crossdock::message::domain::ByteStream;
///
/// let stream = ByteStream::from_vec(b"{}".to_vec());
/// assert!(!stream.is_consumed());
///
/// let reader = stream.take();
/// assert!(reader.is_some());
/// assert!(stream.is_consumed());
/// assert!(stream.take().is_none());
/// ```
#[derive(Clone)]
pub struct ByteStream {
    inner: Arc<Mutex<Option<Box<dyn Read + Send>>>>,
}

impl ByteStream {
    /// Wraps a one-shot reader in a shared handle.
    #[must_use]
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(Box::new(reader)))),
        }
    }

    /// Wraps an in-memory buffer in a shared one-shot handle.
    #[must_use]
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::new(Cursor::new(bytes))
    }

    /// Takes the underlying reader, consuming the stream for every handle.
    ///
    /// Returns `None` if the stream was already consumed.
    #[must_use]
    pub fn take(&self) -> Option<Box<dyn Read + Send>> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Returns `true` if the underlying reader has already been taken.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStream")
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

/// A shared handle over a one-shot traversal of [`DocumentEvent`] items.
///
/// The traversal analog of [`ByteStream`]: every clone shares the same pull
/// sequence, and the first consumer exhausts it for all handles. Items are
/// `Result`s so producer-side failures surface mid-traversal.
///
/// # Examples
///
/// ```
/// use crossdock::message::domain::{DocumentEvent, EventStream};
///
/// let events = EventStream::from_events([DocumentEvent::Null]);
/// assert!(!events.is_consumed());
/// assert!(events.take().is_some());
/// assert!(events.is_consumed());
/// ```
#[derive(Clone)]
pub struct EventStream {
    inner: Arc<Mutex<Option<EventIter>>>,
}

/// Boxed one-shot traversal underlying an [`EventStream`].
pub type EventIter = Box<dyn Iterator<Item = Result<DocumentEvent, DocumentError>> + Send>;

impl EventStream {
    /// Wraps a one-shot traversal in a shared handle.
    #[must_use]
    pub fn new<I>(events: I) -> Self
    where
        I: Iterator<Item = Result<DocumentEvent, DocumentError>> + Send + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(Some(Box::new(events)))),
        }
    }

    /// Wraps an infallible sequence of events in a shared one-shot handle.
    #[must_use]
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = DocumentEvent>,
        I::IntoIter: Send + 'static,
    {
        Self::new(events.into_iter().map(Ok))
    }

    /// Takes the underlying traversal, consuming it for every handle.
    ///
    /// Returns `None` if the traversal was already consumed.
    #[must_use]
    pub fn take(&self) -> Option<EventIter> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Returns `true` if the underlying traversal has already been taken.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl fmt::Debug for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream")
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

/// A resolved reference to resource-backed content.
///
/// The reference itself is repeatable: each call to [`open`](Self::open)
/// yields a fresh one-shot stream over the resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    path: Arc<PathBuf>,
}

impl ResourceRef {
    /// Creates a reference to a resource at the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Returns the resolved path of the resource.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Opens a fresh one-shot stream over the resource.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the resource cannot be opened.
    pub fn open(&self) -> io::Result<ByteStream> {
        let file = std::fs::File::open(self.path.as_path())?;
        Ok(ByteStream::new(file))
    }
}
