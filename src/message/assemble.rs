//! Assembling fragment groups into logical messages.

use thiserror::Error;
use tracing::trace;

use crate::wire::bits::BitStream;

use super::frame::Frame;

/// An error assembling a fragment group.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// Group holds no fragments.
    #[error("Fragment group holds no fragments.")]
    Empty,
    /// Fragments disagree on the talker.
    #[error("Fragments disagree on the talker ({expected} and {found}).")]
    Talker { expected: String, found: String },
    /// Fragments disagree on the sequence id.
    #[error("Fragments disagree on the sequence id ({expected:?} and {found:?}).")]
    Sequence { expected: String, found: String },
    /// Fragments disagree on the fragment count.
    #[error("Fragments disagree on the fragment count ({expected} and {found}).")]
    Count { expected: u32, found: u32 },
    /// A fragment index is out of order, duplicated, or missing.
    #[error("Expected fragment {expected} of {count}, found {found}.")]
    Index { expected: u32, found: u32, count: u32 },
    /// Group holds a different number of fragments than declared.
    #[error("Fragment group holds {supplied} fragments where {count} were declared.")]
    Length { supplied: u32, count: u32 },
}

/// A logical message recovered from one or more validated frames.
///
/// Raw bytes, payload bytes, and bits are the ordered concatenation of the
/// constituent fragments'; the framing metadata is the first fragment's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    raw: Vec<u8>,
    payload: Vec<u8>,
    bits: BitStream,
    talker: String,
    formatter: String,
    fragment_count: u32,
    sequence_id: String,
    channel: String,
}

impl Message {
    /// Assemble an ordered fragment group into a single message.
    ///
    /// The group must hold exactly one frame per fragment index, in order
    /// `1..=count`, all agreeing on the talker, sequence id, and fragment
    /// count. Groups with a gap, duplicate, or misordered fragment are
    /// rejected. The inputs are left unmodified; the message is built
    /// fresh.
    pub fn assemble(fragments: &[Frame]) -> Result<Self, AssemblyError> {
        let [first, ..] = fragments else {
            return Err(AssemblyError::Empty);
        };

        let count = first.fragment_count();

        for (i, fragment) in fragments.iter().enumerate() {
            if fragment.talker() != first.talker() {
                Err(AssemblyError::Talker {
                    expected: first.talker().to_owned(),
                    found: fragment.talker().to_owned(),
                })?;
            }

            if fragment.sequence_id() != first.sequence_id() {
                Err(AssemblyError::Sequence {
                    expected: first.sequence_id().to_owned(),
                    found: fragment.sequence_id().to_owned(),
                })?;
            }

            if fragment.fragment_count() != count {
                Err(AssemblyError::Count {
                    expected: count,
                    found: fragment.fragment_count(),
                })?;
            }

            let expected = i as u32 + 1;
            if fragment.fragment_index() != expected {
                Err(AssemblyError::Index {
                    expected,
                    found: fragment.fragment_index(),
                    count,
                })?;
            }
        }

        if fragments.len() as u32 != count {
            Err(AssemblyError::Length {
                supplied: fragments.len() as u32,
                count,
            })?;
        }

        let mut raw = Vec::new();
        let mut payload = Vec::new();
        for fragment in fragments {
            raw.extend_from_slice(fragment.raw());
            payload.extend_from_slice(fragment.payload());
        }
        let bits = BitStream::concat(fragments.iter().map(|f| f.bits()));

        trace!(count, bits = bits.len(), "assembled fragment group");

        Ok(Self {
            raw,
            payload,
            bits,
            talker: first.talker().to_owned(),
            formatter: first.formatter().to_owned(),
            fragment_count: count,
            sequence_id: first.sequence_id().to_owned(),
            channel: first.channel().to_owned(),
        })
    }

    /// The concatenated raw bytes of the constituent sentences.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The concatenated six-bit-armored payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The concatenated bit stream.
    pub fn bits(&self) -> &BitStream {
        &self.bits
    }

    /// The talker identifier of the first fragment.
    pub fn talker(&self) -> &str {
        &self.talker
    }

    /// The formatter of the first fragment.
    pub fn formatter(&self) -> &str {
        &self.formatter
    }

    /// The number of fragments the message was carried in.
    pub fn fragment_count(&self) -> u32 {
        self.fragment_count
    }

    /// The token that grouped the fragments (empty for single-fragment
    /// messages).
    pub fn sequence_id(&self) -> &str {
        &self.sequence_id
    }

    /// The radio channel designator of the first fragment.
    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl From<Frame> for Message {
    /// Wrap a frame as a message of its own.
    ///
    /// Intended for single-fragment frames; a fragment of a multi-part
    /// message belongs in [`Message::assemble`] with its siblings.
    fn from(frame: Frame) -> Self {
        Self {
            raw: frame.raw,
            payload: frame.payload,
            bits: frame.bits,
            talker: frame.talker,
            formatter: frame.formatter,
            fragment_count: frame.fragment_count,
            sequence_id: frame.sequence_id,
            channel: frame.channel,
        }
    }
}
