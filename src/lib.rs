//! A decoder for AIS vessel-tracking messages carried in NMEA 0183
//! AIVDM/AIVDO sentences.
//!
//! Capstan covers the transport layer of AIS decoding: sentence framing and
//! checksum validation, six-bit ASCII payload unarmoring, reassembly of
//! messages split across multiple sentences, and bit-range access into the
//! recovered payload. Field semantics for the standardized message types
//! are supplied by the caller through the
//! [`FieldRegistry`](message::decode::FieldRegistry) trait.
//!
//! Most users should begin with the functions in the [`message`] module,
//! which parse raw sentence bytes into validated frames, assemble ordered
//! fragment groups, and produce decoded, exportable messages. The [`wire`]
//! module exposes the underlying encodings for applications needing direct
//! access to the recovered bit stream.
//!
//! Decoding is fully synchronous. Capstan expects complete, already-ordered
//! fragment groups; collecting fragments as they arrive (and discarding
//! groups that never complete) is left to the caller, as is everything on
//! the far side of a sentence: sockets, files, and serial lines.

pub mod message;
pub mod wire;
