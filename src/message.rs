//! Sentence framing, fragment assembly, and message decoding.
//!
//! Raw bytes move through this module in three steps: [`frame::parse`]
//! turns one physical sentence into a checksum-validated [`Frame`] (or
//! passes non-encapsulated NMEA traffic through untouched),
//! [`Message::assemble`] stitches an ordered fragment group into a single
//! logical message, and [`Decoded::decode`] reads the message type
//! discriminator and hands the recovered bit stream to a caller-supplied
//! [`FieldRegistry`] for field semantics.
//!
//! For the common cases, [`decode_sentence`] and [`decode_group`] run all
//! three steps in one call.

pub mod assemble;
pub mod decode;
pub mod frame;

pub use assemble::Message;
pub use decode::{Decoded, FieldRegistry, decode_group, decode_sentence};
pub use frame::{Frame, parse, parse_str};
