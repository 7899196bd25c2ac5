//! Tag size arithmetic
//!
//! Two distinct quantities exist for every tag and must never be confused:
//!
//! - **Reported length** — the value carried in the tag's wire length field.
//!   The peer computes it assuming fixed header widths (2-byte name, 1-byte
//!   type, 4-byte length, 2-byte subtag count) even when the UTF-8 numbers
//!   mode shrinks the physical headers. Legacy accounting, kept exactly.
//! - **Physical size** — the number of bytes the tag actually occupies in
//!   the buffer under the active numeric mode.
//!
//! The encoder and the parser both consume this module so the two
//! recursions stay numerically identical.

use crate::error::Result;

use super::tag::Tag;
use super::varnum;

/// Fixed width of the name field
pub const TAG_NAME_SIZE: usize = 2;
/// Width of the type field (never varies)
pub const TAG_TYPE_SIZE: usize = 1;
/// Fixed width of the length field
pub const TAG_LENGTH_SIZE: usize = 4;
/// Fixed width of the subtag count field
pub const SUBTAG_COUNT_SIZE: usize = 2;
/// Name + type + length under the fixed-width convention
pub const TAG_HEADER_SIZE: usize = TAG_NAME_SIZE + TAG_TYPE_SIZE + TAG_LENGTH_SIZE;

/// The wire name field: name shifted left by one, subtag-presence in bit 0
pub fn wire_name(tag: &Tag) -> u32 {
    (u32::from(tag.name.0) << 1) | u32::from(tag.has_subtags())
}

/// The value of the tag's length field
///
/// Value bytes of this tag, plus every direct child accounted at its own
/// reported length plus a full fixed-width header (and a fixed-width count
/// field when the child itself nests). Independent of the numeric mode.
pub fn reported_length(tag: &Tag) -> usize {
    let mut length = 0;
    for sub in &tag.subtags {
        length += reported_length(sub) + TAG_HEADER_SIZE;
        if sub.has_subtags() {
            length += SUBTAG_COUNT_SIZE;
        }
    }
    length + tag.value.encoded_len()
}

/// The number of buffer bytes the tag serializes to under `utf8` mode
///
/// Header fields shrink to their code-point encoding in UTF-8 mode; the
/// length field still carries [`reported_length`], so its physical width is
/// derived from that value.
pub fn physical_size(tag: &Tag, utf8: bool) -> Result<usize> {
    let mut size = 0;

    size += if utf8 {
        varnum::encoded_len(wire_name(tag))?
    } else {
        TAG_NAME_SIZE
    };

    size += TAG_TYPE_SIZE;

    size += if utf8 {
        varnum::encoded_len(reported_length(tag) as u32)?
    } else {
        TAG_LENGTH_SIZE
    };

    if tag.has_subtags() {
        size += if utf8 {
            varnum::encoded_len(tag.subtags.len() as u32)?
        } else {
            SUBTAG_COUNT_SIZE
        };
        for sub in &tag.subtags {
            size += physical_size(sub, utf8)?;
        }
    }

    Ok(size + tag.value.encoded_len())
}
