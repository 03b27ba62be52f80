//! Decoding assembled messages through a field registry.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::wire::bits::{BitStream, RangeError};

use super::assemble::{AssemblyError, Message};
use super::frame::{self, ParseError};

/// An error decoding an assembled message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No decoder is registered for a message type.
    #[error("No decoder is registered for message type {0}.")]
    UnsupportedType(u8),
    /// Message is too short to carry a requested field.
    #[error("Message is too short to carry a requested field: {0}")]
    Truncated(#[from] RangeError),
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An unsigned integer field.
    Uint(u64),
    /// A signed integer field.
    Int(i64),
    /// A scaled floating-point field.
    Float(f64),
    /// A textual field.
    Text(String),
    /// A flag field.
    Bool(bool),
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Decoded fields by name, in stable order.
pub type Fields = BTreeMap<String, FieldValue>;

/// A decoder registry supplying field semantics per message type.
///
/// The registry owns the field layouts of the standardized message types
/// (27 at last count); this crate hands it the type discriminator and the
/// recovered bit stream, and takes back a field mapping. Implementations
/// fail with [`DecodeError::UnsupportedType`] for ids they do not carry.
pub trait FieldRegistry {
    /// Decode the fields of one message.
    fn decode(&self, type_id: u8, bits: &BitStream) -> Result<Fields, DecodeError>;
}

/// A message with its fields decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    message: Message,
    type_id: u8,
    fields: Fields,
}

impl Decoded {
    /// Decode an assembled message through a field registry.
    pub fn decode(message: Message, registry: &impl FieldRegistry) -> Result<Self, DecodeError> {
        let type_id = message.bits().uint(0, 6)? as u8;
        let fields = registry.decode(type_id, message.bits())?;

        Ok(Self {
            message,
            type_id,
            fields,
        })
    }

    /// The assembled message.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// The message type discriminator (0–63).
    pub fn type_id(&self) -> u8 {
        self.type_id
    }

    /// Look up a decoded field by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// The decoded fields by name.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Export the message as a structured value.
    ///
    /// Framing metadata and decoded fields are merged under the `"nmea"`
    /// and `"decoded"` keys; the raw sentence and payload are rendered as
    /// text, and the bit stream as a string of `'0'` and `'1'` characters.
    pub fn export(&self) -> Value {
        json!({
            "nmea": {
                "raw": String::from_utf8_lossy(self.message.raw()),
                "talker": self.message.talker(),
                "formatter": self.message.formatter(),
                "fragment_count": self.message.fragment_count(),
                "sequence_id": self.message.sequence_id(),
                "channel": self.message.channel(),
                "payload": String::from_utf8_lossy(self.message.payload()),
                "bits": self.message.bits().to_bit_string(),
                "type_id": self.type_id,
            },
            "decoded": &self.fields,
        })
    }

    /// Serialize the export as indented JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.export())
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&fields)
    }
}

/// An error decoding raw sentences end to end.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An error parsing a sentence.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A non-encapsulated line where a frame was required.
    #[error("Line is not an encapsulated sentence.")]
    Unframed,
    /// A fragment of a multi-part message where a complete sentence was
    /// required.
    #[error("Sentence is one fragment of a multi-part message.")]
    Fragmented,
    /// An error assembling the fragment group.
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    /// An error decoding the assembled message.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Decode a single-fragment sentence end to end.
///
/// This function is also re-exported as `capstan::message::decode_sentence`.
pub fn decode_sentence(raw: &[u8], registry: &impl FieldRegistry) -> Result<Decoded, Error> {
    let frame = frame::parse(raw)?.left().ok_or(Error::Unframed)?;

    if frame.is_multi() {
        Err(Error::Fragmented)?;
    }

    Ok(Decoded::decode(Message::from(frame), registry)?)
}

/// Parse and decode an ordered fragment group end to end.
///
/// This function is also re-exported as `capstan::message::decode_group`.
pub fn decode_group(raws: &[&[u8]], registry: &impl FieldRegistry) -> Result<Decoded, Error> {
    let mut fragments = Vec::with_capacity(raws.len());
    for raw in raws {
        fragments.push(frame::parse(raw)?.left().ok_or(Error::Unframed)?);
    }

    Ok(Decoded::decode(Message::assemble(&fragments)?, registry)?)
}
