//! Packet and tag serialization
//!
//! Encoding is two-pass: the exact buffer size is computed first (header
//! widths depend on the numeric mode, and the length field is
//! self-referential), then the tree is written front to back into a single
//! pre-allocated buffer.

use std::io::Write;

use bytes::{BufMut, Bytes, BytesMut};
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::Result;

use super::length::{self, TAG_NAME_SIZE};
use super::packet::{Packet, HEADER_SIZE};
use super::tag::Tag;
use super::varnum;

/// Write a name-class field: 2 bytes big-endian, or a code-point number
fn put_short_field(buf: &mut BytesMut, value: u32, utf8: bool) -> Result<()> {
    if utf8 {
        buf.put_slice(&varnum::encode(value)?);
    } else {
        buf.put_u16(value as u16);
    }
    Ok(())
}

/// Write a length-class field: 4 bytes big-endian, or a code-point number
fn put_long_field(buf: &mut BytesMut, value: u32, utf8: bool) -> Result<()> {
    if utf8 {
        buf.put_slice(&varnum::encode(value)?);
    } else {
        buf.put_u32(value);
    }
    Ok(())
}

/// Serialize one tag (headers, subtags, then value bytes) into `buf`
pub fn encode_tag(buf: &mut BytesMut, tag: &Tag, utf8: bool) -> Result<()> {
    put_short_field(buf, length::wire_name(tag), utf8)?;

    // Type is a single byte in every mode
    buf.put_u8(tag.tag_type().wire());

    // The length field carries the fixed-width-convention value even when
    // its own physical encoding is variable
    put_long_field(buf, length::reported_length(tag) as u32, utf8)?;

    if tag.has_subtags() {
        put_short_field(buf, tag.subtags.len() as u32, utf8)?;
        for sub in &tag.subtags {
            encode_tag(buf, sub, utf8)?;
        }
    }

    // Value bytes come after the subtags
    buf.put_slice(&tag.value.encode());
    Ok(())
}

/// Serialize the packet body: opcode, tag count, tags
fn encode_packet_data(packet: &Packet) -> Result<BytesMut> {
    let utf8 = packet.flags.is_utf8_numbers();
    let count = packet.tags.len() as u32;

    let mut size = 1; // opcode
    size += if utf8 {
        varnum::encoded_len(count)?
    } else {
        TAG_NAME_SIZE
    };
    for tag in &packet.tags {
        size += length::physical_size(tag, utf8)?;
    }

    let mut data = BytesMut::with_capacity(size);
    data.put_u8(packet.op_code.0);
    put_short_field(&mut data, count, utf8)?;
    for tag in &packet.tags {
        encode_tag(&mut data, tag, utf8)?;
    }

    Ok(data)
}

/// Serialize a full packet: header, then (optionally compressed) body
pub fn write_packet(packet: &Packet) -> Result<Bytes> {
    let data = encode_packet_data(packet)?;

    let data = if packet.flags.is_zlib() {
        compress(&data)?
    } else {
        data.to_vec()
    };

    let mut out = BytesMut::with_capacity(HEADER_SIZE + data.len());
    out.put_slice(&packet.flags.to_bytes());
    out.put_u32(data.len() as u32);
    out.put_slice(&data);

    Ok(out.freeze())
}

/// Compress packet data with zlib at maximum compression
fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
