//! Materialized payload documents and the event traversals that produce them.
//!
//! A [`Document`] is the canonical re-readable form of a payload: an immutable
//! tree behind a shared pointer, cheap to clone and safe to hand to any number
//! of consumers. Event-traversal-backed payloads are folded into documents via
//! [`Document::from_events`], which enforces structural well-formedness as it
//! folds.

use serde_json::{Map, Number, Value};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// An immutable, randomly accessible payload document.
///
/// Clones share the same underlying tree; [`shares`](Self::shares) reports
/// that sharing. The [`Display`](fmt::Display) form is the canonical compact
/// text rendering and is deterministic for a given tree.
///
/// # Examples
///
/// ```
/// use crossdock::message::domain::Document;
/// use serde_json::json;
///
/// let document = Document::new(json!({"order": 42}));
/// let copy = document.clone();
/// assert!(document.shares(&copy));
/// assert_eq!(copy.to_string(), r#"{"order":42}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Arc<Value>,
}

impl Document {
    /// Creates a document from a value tree.
    #[must_use]
    pub fn new(root: impl Into<Value>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Returns the root of the document tree.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Returns `true` if both documents share the same underlying tree.
    #[must_use]
    pub fn shares(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// Folds an event traversal into a document.
    ///
    /// The traversal must describe exactly one complete value: keys may only
    /// appear inside objects, every key must be followed by a value, container
    /// ends must match their opens, and no events may remain once the root
    /// value is complete.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] if the traversal itself fails or if the
    /// event sequence is structurally malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossdock::message::domain::{Document, DocumentEvent};
    ///
    /// let events = [
    ///     DocumentEvent::StartObject,
    ///     DocumentEvent::Key("id".into()),
    ///     DocumentEvent::Number(7.into()),
    ///     DocumentEvent::EndObject,
    /// ];
    /// let document = Document::from_events(events.into_iter().map(Ok))
    ///     .expect("well-formed traversal");
    /// assert_eq!(document.to_string(), r#"{"id":7}"#);
    /// ```
    pub fn from_events<I>(events: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = Result<DocumentEvent, DocumentError>>,
    {
        let mut stack: Vec<Frame> = Vec::new();
        let mut root: Option<Value> = None;
        for item in events {
            fold_event(&mut stack, &mut root, item?)?;
        }
        if !stack.is_empty() {
            return Err(DocumentError::UnclosedContainer);
        }
        root.map(Self::new).ok_or(DocumentError::EmptyTraversal)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// One step of a pull traversal over a payload document.
///
/// The alphabet mirrors the shape of a document tree: container boundaries,
/// object keys, and scalar values.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    /// An object opens.
    StartObject,
    /// The key of the next value inside the enclosing object.
    Key(String),
    /// The innermost open object closes.
    EndObject,
    /// An array opens.
    StartArray,
    /// The innermost open array closes.
    EndArray,
    /// A null scalar.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(Number),
    /// A textual scalar.
    Text(String),
}

/// Failures while folding an event traversal into a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The traversal source itself failed mid-stream.
    #[error("traversal failed: {0}")]
    Traversal(String),

    /// A key event occurred outside of an object.
    #[error("key '{0}' outside of an object")]
    KeyOutsideObject(String),

    /// A key was never followed by a value.
    #[error("key '{0}' has no value")]
    KeyWithoutValue(String),

    /// A value occurred inside an object without a preceding key.
    #[error("value inside an object without a preceding key")]
    ValueWithoutKey,

    /// An end event did not match the innermost open container.
    #[error("end event does not match the open container")]
    MismatchedEnd,

    /// The traversal produced a second root value.
    #[error("traversal produced more than one root value")]
    MultipleRoots,

    /// The traversal ended with a container still open.
    #[error("traversal ended inside an unclosed container")]
    UnclosedContainer,

    /// The traversal produced no document at all.
    #[error("traversal produced no document")]
    EmptyTraversal,
}

impl DocumentError {
    /// Creates a traversal failure from a producer-side error.
    #[must_use]
    pub fn traversal(reason: impl Into<String>) -> Self {
        Self::Traversal(reason.into())
    }
}

/// An open container on the fold stack.
enum Frame {
    Object {
        entries: Map<String, Value>,
        pending_key: Option<String>,
    },
    Array(Vec<Value>),
}

fn fold_event(
    stack: &mut Vec<Frame>,
    root: &mut Option<Value>,
    event: DocumentEvent,
) -> Result<(), DocumentError> {
    match event {
        DocumentEvent::StartObject => stack.push(Frame::Object {
            entries: Map::new(),
            pending_key: None,
        }),
        DocumentEvent::StartArray => stack.push(Frame::Array(Vec::new())),
        DocumentEvent::Key(key) => match stack.last_mut() {
            Some(Frame::Object { pending_key, .. }) => {
                if let Some(previous) = pending_key.replace(key) {
                    return Err(DocumentError::KeyWithoutValue(previous));
                }
            }
            _ => return Err(DocumentError::KeyOutsideObject(key)),
        },
        DocumentEvent::EndObject => match stack.pop() {
            Some(Frame::Object {
                entries,
                pending_key,
            }) => {
                if let Some(key) = pending_key {
                    return Err(DocumentError::KeyWithoutValue(key));
                }
                attach(stack, root, Value::Object(entries))?;
            }
            _ => return Err(DocumentError::MismatchedEnd),
        },
        DocumentEvent::EndArray => match stack.pop() {
            Some(Frame::Array(items)) => attach(stack, root, Value::Array(items))?,
            _ => return Err(DocumentError::MismatchedEnd),
        },
        DocumentEvent::Null => attach(stack, root, Value::Null)?,
        DocumentEvent::Bool(value) => attach(stack, root, Value::Bool(value))?,
        DocumentEvent::Number(value) => attach(stack, root, Value::Number(value))?,
        DocumentEvent::Text(value) => attach(stack, root, Value::String(value))?,
    }
    Ok(())
}

/// Attaches a completed value to the innermost open container, or installs it
/// as the root when no container is open.
fn attach(
    stack: &mut [Frame],
    root: &mut Option<Value>,
    value: Value,
) -> Result<(), DocumentError> {
    let Some(frame) = stack.last_mut() else {
        if root.is_some() {
            return Err(DocumentError::MultipleRoots);
        }
        *root = Some(value);
        return Ok(());
    };
    match frame {
        Frame::Object {
            entries,
            pending_key,
        } => {
            let Some(key) = pending_key.take() else {
                return Err(DocumentError::ValueWithoutKey);
            };
            entries.insert(key, value);
        }
        Frame::Array(items) => items.push(value),
    }
    Ok(())
}
