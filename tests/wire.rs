use capstan::wire::armor;
use capstan::wire::bits::{BitStream, RangeError};
use capstan::wire::check;

const POSITION_REPORT: &[u8] = b"!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";

#[test]
fn checksum_folds_between_sentinel_and_star() {
    assert_eq!(check::compute_checksum(POSITION_REPORT), 0x5C);
}

#[test]
fn checksum_detects_payload_corruption() {
    let mut raw = POSITION_REPORT.to_vec();
    raw[15] ^= 0x01;
    assert_ne!(check::compute_checksum(&raw), 0x5C);
}

#[test]
fn six_bit_table_vectors() {
    assert_eq!(armor::unarm(b"0").to_bit_string(), "000000");
    assert_eq!(armor::unarm(b"9").to_bit_string(), "001001");
    assert_eq!(armor::unarm(b"W").uint(0, 6).unwrap(), 39);
    assert_eq!(armor::unarm(b"h").to_bit_string(), "110000");
    assert_eq!(armor::unarm(b"5").uint(0, 6).unwrap(), 5);
    assert_eq!(armor::unarm(b"w").uint(0, 6).unwrap(), 63);
}

#[test]
fn unarm_emits_six_bits_per_byte() {
    let bits = armor::unarm(b"177KQJ5000G?tO`K>RA1wUbN0TKH");
    assert_eq!(bits.len(), 168);

    assert_eq!(armor::unarm(b"").len(), 0);
}

#[test]
fn uint_reads_big_endian_across_sextets() {
    let bits = armor::unarm(b"177K");

    assert_eq!(bits.uint(0, 6).unwrap(), 1);
    assert_eq!(bits.uint(6, 6).unwrap(), 7);
    assert_eq!(bits.uint(0, 12).unwrap(), 0b000001_000111);
    assert_eq!(bits.uint(0, 24).unwrap(), 0b000001_000111_000111_011011);
}

#[test]
fn int_sign_extends() {
    let bits = armor::unarm(b"w5");

    assert_eq!(bits.int(0, 6).unwrap(), -1);
    assert_eq!(bits.int(6, 6).unwrap(), 5);
    assert_eq!(bits.int(0, 12).unwrap(), -59);
}

#[test]
fn reads_at_the_stream_boundary_succeed() {
    let bits = armor::unarm(b"177KQJ5000G?tO`K>RA1wUbN0TKH");

    // The final sextet ('H', value 24) is readable in full.
    assert_eq!(bits.uint(162, 6).unwrap(), 24);
    assert_eq!(bits.uint(0, 64).unwrap() >> 58, 1);
}

#[test]
fn out_of_range_reads_fail() {
    let bits = armor::unarm(b"177KQJ5000G?tO`K>RA1wUbN0TKH");

    assert_eq!(
        bits.uint(167, 10),
        Err(RangeError::OutOfBounds {
            start: 167,
            length: 10,
            len: 168,
        })
    );
    assert_eq!(bits.uint(168, 1).unwrap_err(), RangeError::OutOfBounds {
        start: 168,
        length: 1,
        len: 168,
    });
    assert_eq!(bits.uint(0, 65).unwrap_err(), RangeError::Width(65));
    assert!(bits.int(160, 10).is_err());
}

#[test]
fn concat_preserves_order() {
    let a = armor::unarm(b"1");
    let b = armor::unarm(b"w");

    let joined = BitStream::concat([&a, &b]);
    assert_eq!(joined.len(), 12);
    assert_eq!(joined.to_bit_string(), "000001111111");
    assert_eq!(joined.uint(0, 12).unwrap(), 0b000001_111111);
}
