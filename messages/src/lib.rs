//! Shared wire schema for the card gallery client.
//!
//! This crate owns the JSON message envelope used on the websocket in both
//! directions, the typed payloads carried inside it, and the REST schema of
//! the card list endpoint. Payloads stay flexible (`serde_json::Value`) at
//! the envelope layer; handlers decode the typed forms they care about.


use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode_envelope`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text could not be decoded as a JSON envelope.
    #[error("failed to decode message envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single message on the websocket, in either direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Message type selecting the handler, e.g. `"new_card"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Handler-specific payload, untyped at this layer.
    #[serde(default)]
    pub payload: Value,
}

impl Envelope {
    /// Build an envelope from a message type and its payload.
    #[must_use]
    pub fn new(kind: &str, payload: Value) -> Self {
        Self {
            kind: kind.to_owned(),
            payload,
        }
    }
}

/// Encode an envelope into JSON text.
#[must_use]
pub fn encode_envelope(envelope: &Envelope) -> String {
    // Serializing a string field plus a `Value` cannot fail.
    serde_json::to_string(envelope).unwrap_or_default()
}

/// Decode JSON text into an envelope.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON or a missing `type`
/// field.
pub fn decode_envelope(text: &str) -> Result<Envelope, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Payload of `status` messages reporting extraction progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    /// Progress level: `"started"`, `"completed"`, or `"error"`.
    pub status: String,
    /// Human-readable progress text.
    pub message: String,
}

/// Payload of `new_card` broadcasts announcing a freshly saved card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCardPayload {
    /// Source bucket the card was saved under, e.g. `"SakuraFM"`.
    pub source: String,
    /// The extracted card.
    pub card: CharacterCard,
}

/// Payload of `error` messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable error text, surfaced verbatim to the user.
    pub message: String,
}

/// Payload of outbound `extract_sakura` / `extract_janitor` requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractUrlPayload {
    /// Character page URL to extract from.
    pub url: String,
}

/// A V2 character card as stored by the server.
///
/// Only the fields the client displays are modeled here; the server-side
/// record carries more (personality, greetings, lorebook, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterCard {
    /// Spec marker, e.g. `"chara_card_v2"`.
    #[serde(default)]
    pub spec: String,
    /// Spec version string.
    #[serde(default)]
    pub spec_version: String,
    /// Core character fields.
    pub data: CardData,
}

/// Displayed character fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    /// Character name; may be empty.
    #[serde(default)]
    pub name: String,
    /// Character description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Card author, if the source records one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Creation timestamp as the source formatted it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
}

/// One source bucket in the `GET /api/cards` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSource {
    /// Source name, e.g. `"SakuraFM"`.
    pub name: String,
    /// Cards loaded from this source.
    #[serde(default)]
    pub cards: Vec<CharacterCard>,
}

/// Body of the `GET /api/cards` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardsResponse {
    /// All known sources with their cards.
    #[serde(default)]
    pub sources: Vec<CardSource>,
}
