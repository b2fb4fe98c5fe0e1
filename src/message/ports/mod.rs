//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces the normalization core requires from
//! the surrounding runtime: the message shape it copies between, and the
//! transformer contract pipelines compose it through.

pub mod message;
pub mod transformer;

pub use message::{AttachmentError, NormalizedMessage};
pub use transformer::MessageTransformer;
