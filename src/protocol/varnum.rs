//! Variable-length number encoding
//!
//! When the UTF-8 numbers flag is negotiated, header fields (tag names,
//! lengths, counts) are carried as the UTF-8 byte sequence of the Unicode
//! code point equal to the value. The representable range is therefore
//! 0..=0x10FFFF, in 1 to 4 bytes.

use crate::error::{EcError, Result};

/// Highest value representable as a UTF-8 code-point number
pub const MAX_VARNUM: u32 = 0x10FFFF;

/// Number of bytes `value` occupies when encoded
pub fn encoded_len(value: u32) -> Result<usize> {
    match value {
        0..=0x7F => Ok(1),
        0x80..=0x7FF => Ok(2),
        0x800..=0xFFFF => Ok(3),
        0x1_0000..=MAX_VARNUM => Ok(4),
        _ => Err(EcError::Encoding(format!(
            "Value out of code point range: 0x{:x} (max 0x{:x})",
            value, MAX_VARNUM
        ))),
    }
}

/// Encode `value` as a UTF-8 code-point byte sequence
pub fn encode(value: u32) -> Result<Vec<u8>> {
    match encoded_len(value)? {
        1 => Ok(vec![value as u8]),
        2 => Ok(vec![
            0xC0 | (value >> 6) as u8,
            0x80 | (value & 0x3F) as u8,
        ]),
        3 => Ok(vec![
            0xE0 | (value >> 12) as u8,
            0x80 | ((value >> 6) & 0x3F) as u8,
            0x80 | (value & 0x3F) as u8,
        ]),
        _ => Ok(vec![
            0xF0 | (value >> 18) as u8,
            0x80 | ((value >> 12) & 0x3F) as u8,
            0x80 | ((value >> 6) & 0x3F) as u8,
            0x80 | (value & 0x3F) as u8,
        ]),
    }
}

/// Decode a UTF-8 code-point number from the front of `buf`
///
/// Returns the value and the number of bytes consumed.
pub fn decode(buf: &[u8]) -> Result<(u32, usize)> {
    let first = *buf.first().ok_or_else(|| {
        EcError::Protocol("Truncated buffer: empty UTF-8 number".to_string())
    })?;

    // Sequence length from the leading byte's high bits
    let (len, mut value) = if first & 0x80 == 0 {
        (1, u32::from(first))
    } else if first & 0xE0 == 0xC0 {
        (2, u32::from(first & 0x1F))
    } else if first & 0xF0 == 0xE0 {
        (3, u32::from(first & 0x0F))
    } else if first & 0xF8 == 0xF0 {
        (4, u32::from(first & 0x07))
    } else {
        return Err(EcError::Protocol(format!(
            "Invalid UTF-8 number leading byte: 0x{:02x}",
            first
        )));
    };

    if buf.len() < len {
        return Err(EcError::Protocol(format!(
            "Truncated UTF-8 number: need {} bytes, got {}",
            len,
            buf.len()
        )));
    }

    for &byte in &buf[1..len] {
        if byte & 0xC0 != 0x80 {
            return Err(EcError::Protocol(format!(
                "Invalid UTF-8 number continuation byte: 0x{:02x}",
                byte
            )));
        }
        value = (value << 6) | u32::from(byte & 0x3F);
    }

    Ok((value, len))
}
