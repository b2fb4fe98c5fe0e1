//! Exchanges correlate the inbound and outbound legs of a message interaction.
//!
//! The normalization core reads an exchange only to attribute failures to the
//! interaction that produced them; it never mutates exchange state.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for an exchange.
///
/// # Examples
///
/// ```
/// use crossdock::message::domain::ExchangeId;
///
/// let id = ExchangeId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeId(Uuid);

impl ExchangeId {
    /// Creates a new random exchange identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an exchange identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

/// Note: This implementation generates a new random UUID on each call,
/// which is non-standard behaviour for `Default`. Use `ExchangeId::new()`
/// if the intent to generate a random ID should be explicit.
impl Default for ExchangeId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for ExchangeId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The message-exchange pattern governing an exchange.
///
/// The pattern fixes which legs an exchange carries and whether the consumer
/// owes the provider a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExchangePattern {
    /// One-way: an inbound message and nothing back.
    InOnly,
    /// One-way with fault reporting back to the sender.
    RobustInOnly,
    /// Request/response: every inbound message owes an outbound one.
    InOut,
    /// Request with an optional response.
    InOptionalOut,
}

impl ExchangePattern {
    /// Returns the canonical name of the pattern.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InOnly => "in-only",
            Self::RobustInOnly => "robust-in-only",
            Self::InOut => "in-out",
            Self::InOptionalOut => "in-optional-out",
        }
    }

    /// Returns `true` if the pattern carries an outbound response leg.
    #[must_use]
    pub const fn expects_response(self) -> bool {
        matches!(self, Self::InOut | Self::InOptionalOut)
    }
}

impl fmt::Display for ExchangePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExchangePattern {
    type Err = ParseExchangePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-only" => Ok(Self::InOnly),
            "robust-in-only" => Ok(Self::RobustInOnly),
            "in-out" => Ok(Self::InOut),
            "in-optional-out" => Ok(Self::InOptionalOut),
            other => Err(ParseExchangePatternError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an unknown exchange pattern name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown exchange pattern: {0}")]
pub struct ParseExchangePatternError(String);

/// An exchange correlating an inbound and an outbound message.
///
/// # Examples
///
/// ```
/// use crossdock::message::domain::{Exchange, ExchangePattern};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let exchange = Exchange::new(ExchangePattern::InOut, &clock);
/// assert!(exchange.pattern().expects_response());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    id: ExchangeId,
    pattern: ExchangePattern,
    created_at: DateTime<Utc>,
}

impl Exchange {
    /// Creates an exchange with a fresh random identifier.
    ///
    /// The creation timestamp is taken from the injected clock.
    #[must_use]
    pub fn new(pattern: ExchangePattern, clock: &impl Clock) -> Self {
        Self::new_with_id(ExchangeId::new(), pattern, clock)
    }

    /// Creates an exchange with a caller-supplied identifier.
    #[must_use]
    pub fn new_with_id(id: ExchangeId, pattern: ExchangePattern, clock: &impl Clock) -> Self {
        Self {
            id,
            pattern,
            created_at: clock.utc(),
        }
    }

    /// Returns the exchange identifier.
    #[must_use]
    pub const fn id(&self) -> ExchangeId {
        self.id
    }

    /// Returns the message-exchange pattern.
    #[must_use]
    pub const fn pattern(&self) -> ExchangePattern {
        self.pattern
    }

    /// Returns the instant the exchange was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
