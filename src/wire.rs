//! Low-level wire encodings.
//!
//! This module implements the byte- and bit-level encodings AIS layers over
//! NMEA 0183: the sentence checksum, the six-bit ASCII armoring of
//! payloads, and the bit stream recovered from them. Nothing here knows
//! about sentence structure; see [`crate::message`] for framing, assembly,
//! and decoding.

pub mod armor;
pub mod bits;
pub mod check;
