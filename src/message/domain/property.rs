//! Named metadata properties attached to normalized messages.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Reserved property key under which endpoints stash the native object payload
/// during object-payload marshaling.
///
/// The value stored here is internal plumbing between an endpoint and its
/// marshaler; it is never copied between messages.
pub const BODY_PROPERTY: &str = "crossdock.marshal.body";

/// A property value attached to a message.
///
/// Wraps a shared value tree: copying a property between messages transfers
/// the reference, never the tree. Equality compares the trees;
/// [`shares`](Self::shares) compares the references.
///
/// # Examples
///
/// ```
/// use crossdock::message::domain::PropertyValue;
///
/// let value = PropertyValue::from("eu-west-1");
/// let copy = value.clone();
/// assert!(value.shares(&copy));
/// assert_eq!(value, copy);
/// ```
#[derive(Debug, Clone)]
pub struct PropertyValue {
    value: Arc<Value>,
}

impl PropertyValue {
    /// Creates a property value from any value tree.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: Arc::new(value.into()),
        }
    }

    /// Returns the underlying value tree.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns `true` if both properties share the same underlying tree.
    #[must_use]
    pub fn shares(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
