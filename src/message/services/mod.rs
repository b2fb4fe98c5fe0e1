//! Application services for the message subsystem.
//!
//! Services implement the normalization workflows: materializing
//! single-consumption payloads and copying message facets between the legs
//! of an exchange.

mod copier;
mod materializer;

pub use copier::{CopyConfig, CopyTransformer};
pub use materializer::ContentMaterializer;
