//! Packet and tag deserialization
//!
//! The inverse of the encoder. The only size information on the wire is the
//! length field, whose value uses the fixed-width header convention; the
//! parser therefore tracks a "theoretical length" for every tag it reads,
//! computed with the same fixed sizes, and subtracts the children's share
//! from the parent's length field to locate the parent's value bytes.

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::error::{EcError, Result};

use super::codes::{OpCode, TagName};
use super::flags::Flags;
use super::length::{SUBTAG_COUNT_SIZE, TAG_HEADER_SIZE, TAG_LENGTH_SIZE, TAG_NAME_SIZE};
use super::packet::{Packet, HEADER_SIZE};
use super::tag::{Tag, TagType, TagValue};
use super::varnum;

/// Bounds-checked cursor over a packet body
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn read_u8(&mut self) -> Result<u8> {
        let byte = *self.buf.get(self.pos).ok_or_else(|| {
            EcError::Protocol(format!(
                "Truncated buffer: need 1 byte at offset {}, have {}",
                self.pos,
                self.buf.len()
            ))
        })?;
        self.pos += 1;
        Ok(byte)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(len).filter(|&end| end <= self.buf.len());
        let end = end.ok_or_else(|| {
            EcError::Protocol(format!(
                "Truncated buffer: need {} bytes at offset {}, have {}",
                len,
                self.pos,
                self.buf.len()
            ))
        })?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Read a header number: big-endian at `fixed_size` bytes, or a
    /// code-point number in UTF-8 mode
    fn read_number(&mut self, fixed_size: usize, utf8: bool) -> Result<u32> {
        if utf8 {
            let (value, consumed) = varnum::decode(&self.buf[self.pos.min(self.buf.len())..])?;
            self.pos += consumed;
            return Ok(value);
        }
        match fixed_size {
            1 => Ok(u32::from(self.read_u8()?)),
            2 => {
                let bytes = self.take(2)?;
                Ok(u32::from(u16::from_be_bytes([bytes[0], bytes[1]])))
            }
            4 => {
                let bytes = self.take(4)?;
                Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            }
            n => Err(EcError::Protocol(format!("Unsupported number size: {}", n))),
        }
    }
}

/// Parse one tag; returns the tag and its theoretical (fixed-convention)
/// length for the caller's own value-size arithmetic
fn parse_tag(r: &mut Reader<'_>, utf8: bool) -> Result<(Tag, usize)> {
    // Name field carries the subtag-presence flag in bit 0
    let name_field = r.read_number(TAG_NAME_SIZE, utf8)?;
    let has_subtags = name_field & 1 != 0;
    let name = TagName(((name_field >> 1) & 0xFFFF) as u16);

    let type_byte = r.read_u8()?;
    let tag_type = TagType::from_wire(type_byte).ok_or_else(|| {
        EcError::Protocol(format!(
            "Unknown tag type 0x{:02x} for tag {}",
            type_byte, name
        ))
    })?;

    let tag_length = r.read_number(TAG_LENGTH_SIZE, utf8)? as usize;

    let mut subtags = Vec::new();
    let mut theoretical = 0usize;

    let value_len = if has_subtags {
        let count = r.read_number(SUBTAG_COUNT_SIZE, utf8)? as usize;
        for _ in 0..count {
            let (sub, sub_len) = parse_tag(r, utf8)?;
            subtags.push(sub);
            theoretical += sub_len;
        }
        // What remains of the length field after the children is this
        // tag's own value
        let value_len = tag_length.checked_sub(theoretical).ok_or_else(|| {
            EcError::Protocol(format!(
                "Subtag sizes exceed tag length for tag {}: {} > {}",
                name, theoretical, tag_length
            ))
        })?;
        theoretical += SUBTAG_COUNT_SIZE;
        value_len
    } else {
        tag_length
    };

    let raw = r.take(value_len)?;
    let value = TagValue::parse(tag_type, name, raw)?;

    theoretical += value_len + TAG_HEADER_SIZE;

    Ok((
        Tag {
            name,
            value,
            subtags,
        },
        theoretical,
    ))
}

/// Parse `count` consecutive tags
fn parse_tags(r: &mut Reader<'_>, count: usize, utf8: bool) -> Result<Vec<Tag>> {
    let mut tags = Vec::with_capacity(count.min(64));
    for _ in 0..count {
        let (tag, _) = parse_tag(r, utf8)?;
        tags.push(tag);
    }
    Ok(tags)
}

/// Parse a complete packet from a buffer
pub fn parse_packet(buf: &[u8]) -> Result<Packet> {
    if buf.len() < HEADER_SIZE {
        return Err(EcError::Protocol(format!(
            "Buffer too small: {} bytes",
            buf.len()
        )));
    }

    let flags = Flags::from_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let data_length = u32::from_be_bytes([buf[4], buf[5], buf[6], buf[7]]) as usize;

    let total = HEADER_SIZE + data_length;
    if buf.len() < total {
        return Err(EcError::Protocol(format!(
            "Incomplete packet: expected {} bytes, got {}",
            total,
            buf.len()
        )));
    }

    let data = &buf[HEADER_SIZE..total];

    let decompressed;
    let data: &[u8] = if flags.is_zlib() {
        decompressed = decompress(data)?;
        &decompressed
    } else {
        data
    };

    parse_packet_data(data, flags)
}

/// Parse the (already decompressed) packet body
fn parse_packet_data(data: &[u8], flags: Flags) -> Result<Packet> {
    let utf8 = flags.is_utf8_numbers();
    let mut r = Reader::new(data);

    let op_code = OpCode(r.read_u8()?);

    // Tag count is sized like a name field
    let count = r.read_number(TAG_NAME_SIZE, utf8)? as usize;
    let tags = parse_tags(&mut r, count, utf8)?;

    Ok(Packet {
        op_code,
        flags,
        tags,
    })
}

/// Inflate a zlib-compressed packet body
fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).map_err(|e| {
        EcError::Protocol(format!("Failed to decompress packet: {}", e))
    })?;
    Ok(out)
}

/// Total byte count of the packet starting at the front of `buf`
pub fn expected_packet_size(buf: &[u8]) -> Result<usize> {
    if buf.len() < HEADER_SIZE {
        return Err(EcError::Protocol("Header buffer too small".to_string()));
    }
    let data_length = u32::from_be_bytes([buf[4], buf[5], buf[6], buf[7]]) as usize;
    Ok(HEADER_SIZE + data_length)
}

/// Check if `buf` starts with a complete packet
pub fn has_complete_packet(buf: &[u8]) -> bool {
    if buf.len() < HEADER_SIZE {
        return false;
    }
    match expected_packet_size(buf) {
        Ok(expected) => buf.len() >= expected,
        Err(_) => false,
    }
}
