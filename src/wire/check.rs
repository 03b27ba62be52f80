//! Helper for computing sentence checksums.

/// Fold a raw sentence into its checksum value.
///
/// The checksum covers every byte strictly between the leading sentinel
/// (`!` or `$`) and the `*` delimiter, exclusive of both.
pub fn compute_checksum(raw: &[u8]) -> u8 {
    raw.iter()
        .skip(1)
        .take_while(|&&b| b != b'*')
        .fold(0, |acc, b| acc ^ b)
}

/// Whether a declared checksum matches a computed one.
pub fn matches(declared: u8, computed: u8) -> bool {
    declared == computed
}
