//! BDD steps for message copying between exchange legs.
//!
//! Exercises the copy workflow end to end using rstest-bdd.

use std::sync::Arc;

use crossdock::message::{
    adapters::memory::InMemoryMessage,
    domain::{Attachment, ByteStream, Content, Exchange, ExchangePattern, SecuritySubject},
    error::TransformationError,
    ports::NormalizedMessage,
    services::{CopyConfig, CopyTransformer},
};
use eyre::{WrapErr, eyre};
use mockable::DefaultClock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;

/// World state for message copy BDD tests.
struct MessageCopyWorld {
    exchange: Exchange,
    transformer: CopyTransformer,
    source: InMemoryMessage,
    outbound: InMemoryMessage,
    error: Option<TransformationError>,
}

impl Default for MessageCopyWorld {
    fn default() -> Self {
        let clock = DefaultClock;
        Self {
            exchange: Exchange::new(ExchangePattern::InOut, &clock),
            transformer: CopyTransformer::new(),
            source: InMemoryMessage::new(),
            outbound: InMemoryMessage::new(),
            error: None,
        }
    }
}

#[fixture]
fn world() -> MessageCopyWorld {
    MessageCopyWorld::default()
}

// ============================================================================
// Background Steps
// ============================================================================

#[given("an exchange awaiting its outbound leg")]
fn exchange_awaiting_outbound(world: &mut MessageCopyWorld) -> Result<(), eyre::Report> {
    world.outbound = InMemoryMessage::new();
    world.error = None;
    Ok(())
}

// ============================================================================
// Given Steps
// ============================================================================

#[given("a source message carrying every facet")]
fn source_with_every_facet(world: &mut MessageCopyWorld) -> Result<(), eyre::Report> {
    world.source = InMemoryMessage::new()
        .with_content(Content::text(r#"{"order": 42}"#))
        .with_property("channel", "orders")
        .with_property("priority", 7i64)
        .with_attachment(
            "manifest",
            Arc::new(Attachment::new("application/json", b"{}".to_vec())),
        )
        .with_security_subject(SecuritySubject::new("cn=order-service"));
    Ok(())
}

#[given("a source message with a stream-backed payload")]
fn source_with_stream_payload(world: &mut MessageCopyWorld) -> Result<(), eyre::Report> {
    world.source = InMemoryMessage::new()
        .with_content(Content::Stream(ByteStream::from_vec(
            br#"{"order": 42}"#.to_vec(),
        )))
        .with_property("channel", "orders");
    Ok(())
}

#[given("a source message with a malformed stream-backed payload")]
fn source_with_malformed_payload(world: &mut MessageCopyWorld) -> Result<(), eyre::Report> {
    world.source = InMemoryMessage::new()
        .with_content(Content::Stream(ByteStream::from_vec(
            b"not a document".to_vec(),
        )))
        .with_property("channel", "orders");
    Ok(())
}

#[given("a transformer that does not copy content")]
fn transformer_without_content(world: &mut MessageCopyWorld) -> Result<(), eyre::Report> {
    world.transformer = CopyTransformer::with_config(CopyConfig::all().with_content(false));
    Ok(())
}

#[given("the outbound message already holds a payload")]
fn outbound_holds_payload(world: &mut MessageCopyWorld) -> Result<(), eyre::Report> {
    world.outbound.set_content(Some(Content::text("kept")));
    Ok(())
}

// ============================================================================
// When Steps
// ============================================================================

#[when("the message is copied onto the outbound leg")]
fn copy_message(world: &mut MessageCopyWorld) -> Result<(), eyre::Report> {
    world
        .transformer
        .transform(&world.exchange, &world.source, &mut world.outbound)
        .wrap_err("copy message")?;
    Ok(())
}

#[when("the message copy is attempted")]
fn attempt_copy(world: &mut MessageCopyWorld) -> Result<(), eyre::Report> {
    let result = world
        .transformer
        .transform(&world.exchange, &world.source, &mut world.outbound);
    world.error = result.err();
    Ok(())
}

// ============================================================================
// Then Steps
// ============================================================================

#[then("the outbound message carries the source properties")]
fn outbound_carries_properties(world: &MessageCopyWorld) -> Result<(), eyre::Report> {
    let original = world
        .source
        .property("channel")
        .ok_or_else(|| eyre!("source has no channel property"))?;
    let copied = world
        .outbound
        .property("channel")
        .ok_or_else(|| eyre!("outbound has no channel property"))?;

    if !original.shares(&copied) {
        return Err(eyre!("channel property was rebuilt instead of shared"));
    }
    Ok(())
}

#[then("the outbound message carries the source payload")]
fn outbound_carries_payload(world: &MessageCopyWorld) -> Result<(), eyre::Report> {
    match world.outbound.content() {
        Some(Content::Text(text)) if text.as_ref() == r#"{"order": 42}"# => Ok(()),
        other => Err(eyre!("unexpected outbound payload: {other:?}")),
    }
}

#[then("the outbound message shares the source attachments")]
fn outbound_shares_attachments(world: &MessageCopyWorld) -> Result<(), eyre::Report> {
    let original = world
        .source
        .attachment("manifest")
        .ok_or_else(|| eyre!("source has no manifest attachment"))?;
    let copied = world
        .outbound
        .attachment("manifest")
        .ok_or_else(|| eyre!("outbound has no manifest attachment"))?;

    if !Arc::ptr_eq(&original, &copied) {
        return Err(eyre!("attachment was duplicated instead of shared"));
    }
    Ok(())
}

#[then("the outbound message shares the source security subject")]
fn outbound_shares_subject(world: &MessageCopyWorld) -> Result<(), eyre::Report> {
    let original = world
        .source
        .security_subject()
        .ok_or_else(|| eyre!("source has no security subject"))?;
    let copied = world
        .outbound
        .security_subject()
        .ok_or_else(|| eyre!("outbound has no security subject"))?;

    if !Arc::ptr_eq(&original, &copied) {
        return Err(eyre!("security subject was duplicated instead of shared"));
    }
    Ok(())
}

#[then("the outbound payload is re-readable")]
fn outbound_payload_re_readable(world: &MessageCopyWorld) -> Result<(), eyre::Report> {
    let content = world
        .outbound
        .content()
        .ok_or_else(|| eyre!("outbound has no payload"))?;

    if !content.is_repeatable() {
        return Err(eyre!("outbound payload is still single-consumption"));
    }
    Ok(())
}

#[then("the outbound payload holds the streamed document")]
fn outbound_holds_streamed_document(world: &MessageCopyWorld) -> Result<(), eyre::Report> {
    match world.outbound.content() {
        Some(Content::Document(document)) if document.root() == &json!({"order": 42}) => Ok(()),
        other => Err(eyre!("unexpected outbound payload: {other:?}")),
    }
}

#[then("the outbound message keeps its own payload")]
fn outbound_keeps_own_payload(world: &MessageCopyWorld) -> Result<(), eyre::Report> {
    match world.outbound.content() {
        Some(Content::Text(text)) if text.as_ref() == "kept" => Ok(()),
        other => Err(eyre!("outbound payload was replaced: {other:?}")),
    }
}

#[then("the copy fails with an error naming the exchange")]
fn copy_fails_naming_exchange(world: &MessageCopyWorld) -> Result<(), eyre::Report> {
    let error = world
        .error
        .as_ref()
        .ok_or_else(|| eyre!("copy did not fail"))?;

    let expected = format!("message copy failed for exchange {}", world.exchange.id());
    if error.to_string() != expected {
        return Err(eyre!("unexpected error message: {error}"));
    }
    Ok(())
}

#[then("the outbound message has no payload")]
fn outbound_has_no_payload(world: &MessageCopyWorld) -> Result<(), eyre::Report> {
    if world.outbound.content().is_some() {
        return Err(eyre!("outbound payload should be empty"));
    }
    Ok(())
}

// ============================================================================
// Scenario Definitions
// ============================================================================

#[scenario(
    path = "tests/features/message_copy.feature",
    name = "Copy every facet onto the outbound message"
)]
fn copy_every_facet(world: MessageCopyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_copy.feature",
    name = "Stream-backed payload survives repeated reads"
)]
fn stream_payload_survives(world: MessageCopyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_copy.feature",
    name = "Content copying can be disabled independently"
)]
fn content_copy_disabled(world: MessageCopyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_copy.feature",
    name = "A malformed payload fails the copy after properties are applied"
)]
fn malformed_payload_fails(world: MessageCopyWorld) {
    let _ = world;
}
