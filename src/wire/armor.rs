//! Helper for unarmoring six-bit ASCII payloads.

use super::bits::BitStream;

/// Unarmor a six-bit ASCII payload into its bit stream.
///
/// Each payload byte carries six data bits: the byte less `0x30`, further
/// less `8` for values above `40`, emitted most-significant bit first in
/// payload order. The armoring only produces bytes in `0x30..=0x77`,
/// skipping `0x60..=0x67`; bytes outside that range pass through the same
/// arithmetic. The output is six times the payload length.
pub fn unarm(payload: &[u8]) -> BitStream {
    let mut bits = BitStream::with_capacity(payload.len() * 6);

    for &b in payload {
        let mut v = b.wrapping_sub(0x30);
        if v > 40 {
            v -= 8;
        }

        bits.push_sextet(v & 0x3F);
    }

    bits
}
