//! Parsing raw sentences into validated frames.

use either::Either::{self, Left, Right};
use thiserror::Error;
use tracing::debug;

use crate::wire::{
    armor,
    bits::{BitStream, RangeError},
    check,
};

/// An error parsing a raw sentence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Sentence holds no bytes.
    #[error("Sentence holds no bytes.")]
    Empty,
    /// Wrong number of comma-separated fields.
    #[error("Expected 7 comma-separated fields, found {0}.")]
    FieldCount(usize),
    /// Sentence header too short to carry a talker and formatter.
    #[error("Sentence header is too short to carry a talker and formatter.")]
    Header,
    /// A numeric field did not parse as base-10 (or, for the checksum, as
    /// two hex digits).
    #[error("The {0} field is not numeric.")]
    Numeric(&'static str),
    /// Trailing token carries no `*`-delimited checksum.
    #[error("Trailing token carries no `*`-delimited checksum.")]
    NoChecksum,
    /// Calculated and declared checksum values do not match.
    #[error("Calculated ({calculated:#04x}) and declared ({found:#04x}) checksum values do not match.")]
    Checksum { found: u8, calculated: u8 },
    /// Payload too short to carry a message type.
    #[error("Payload is too short to carry a message type: {0}")]
    Truncated(#[from] RangeError),
}

/// A non-encapsulated NMEA line, passed through without parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unframed {
    raw: Vec<u8>,
}

impl Unframed {
    /// The raw line as received.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

/// A single validated AIVDM/AIVDO sentence, possibly one fragment of a
/// longer message.
///
/// A frame only exists once the checksum declared in its trailing token
/// matches the one computed over the raw line; construction fails
/// otherwise. The payload is unarmored on construction, and the six-bit
/// message type discriminator read from the front of the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub(super) raw: Vec<u8>,
    pub(super) talker: String,
    pub(super) formatter: String,
    pub(super) fragment_count: u32,
    pub(super) fragment_index: u32,
    pub(super) sequence_id: String,
    pub(super) channel: String,
    pub(super) payload: Vec<u8>,
    pub(super) checksum: u8,
    pub(super) bits: BitStream,
    pub(super) type_id: u8,
}

/// Parse one raw sentence.
///
/// Returns the validated frame, or the line untouched when it does not
/// open with the `!` encapsulation sentinel (plain NMEA traffic shares
/// feeds with AIS and must pass through without failing).
pub fn parse(raw: &[u8]) -> Result<Either<Frame, Unframed>, ParseError> {
    let Some(&first) = raw.first() else {
        return Err(ParseError::Empty);
    };

    if first != b'!' {
        debug!(len = raw.len(), "passing through non-encapsulated line");
        return Ok(Right(Unframed { raw: raw.to_vec() }));
    }

    let fields: Vec<&[u8]> = raw.split(|&b| b == b',').collect();

    let &[head, count, index, sequence_id, channel, payload, trailing] = &fields[..] else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    // The talker is the two characters after the sentinel, the formatter
    // everything after those (e.g. "VDM" or "VDO").
    if head.len() < 3 {
        Err(ParseError::Header)?;
    }
    let talker = text(&head[1..3]);
    let formatter = text(&head[3..]);

    let fragment_count = integer(count, "fragment count")?;
    let fragment_index = integer(index, "fragment index")?;

    // The trailing token combines the pad count and the checksum; the
    // declared checksum is exactly the two hex digits after `*`.
    let star = trailing
        .iter()
        .position(|&b| b == b'*')
        .ok_or(ParseError::NoChecksum)?;
    let found = trailing
        .get(star + 1..star + 3)
        .and_then(|digits| std::str::from_utf8(digits).ok())
        .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        .ok_or(ParseError::Numeric("checksum"))?;

    let calculated = check::compute_checksum(raw);
    if !check::matches(found, calculated) {
        Err(ParseError::Checksum { found, calculated })?;
    }

    let bits = armor::unarm(payload);
    let type_id = bits.uint(0, 6)? as u8;

    Ok(Left(Frame {
        raw: raw.to_vec(),
        talker,
        formatter,
        fragment_count,
        fragment_index,
        sequence_id: text(sequence_id),
        channel: text(channel),
        payload: payload.to_vec(),
        checksum: found,
        bits,
        type_id,
    }))
}

/// Parse one sentence from text.
///
/// This method is also re-exported as `capstan::message::parse_str`.
pub fn parse_str(raw: &str) -> Result<Either<Frame, Unframed>, ParseError> {
    parse(raw.as_bytes())
}

impl Frame {
    /// The raw sentence as received.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The two-character talker identifier (e.g. "AI").
    pub fn talker(&self) -> &str {
        &self.talker
    }

    /// The sentence formatter (e.g. "VDM" or "VDO").
    pub fn formatter(&self) -> &str {
        &self.formatter
    }

    /// The number of fragments in this frame's message.
    pub fn fragment_count(&self) -> u32 {
        self.fragment_count
    }

    /// This frame's one-based position within its message.
    pub fn fragment_index(&self) -> u32 {
        self.fragment_index
    }

    /// The token shared across fragments of one message (may be empty).
    pub fn sequence_id(&self) -> &str {
        &self.sequence_id
    }

    /// The radio channel designator.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// The six-bit-armored payload bytes, as received.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The declared (and verified) checksum.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// The bit stream unarmored from the payload.
    pub fn bits(&self) -> &BitStream {
        &self.bits
    }

    /// The six-bit message type discriminator at the front of the stream.
    pub fn type_id(&self) -> u8 {
        self.type_id
    }

    /// Whether this frame carries a complete message by itself.
    pub fn is_single(&self) -> bool {
        self.sequence_id.is_empty() && self.fragment_count == 1 && self.fragment_index == 1
    }

    /// Whether this frame is one fragment of a multi-part message.
    pub fn is_multi(&self) -> bool {
        !self.is_single()
    }
}

fn integer(field: &[u8], name: &'static str) -> Result<u32, ParseError> {
    std::str::from_utf8(field)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(ParseError::Numeric(name))
}

fn text(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}
