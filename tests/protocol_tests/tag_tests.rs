//! Tag Value Tests
//!
//! Per-type parse/encode contracts and the numeric accessors.

use std::net::Ipv4Addr;

use amule_ec::protocol::{Tag, TagName, TagType, TagValue};
use amule_ec::EcError;

const NAME: TagName = TagName(0x0042);

#[test]
fn test_lenient_zero_length_integers() {
    // The daemon omits value bytes for zeroed numeric fields
    assert_eq!(
        TagValue::parse(TagType::UInt8, NAME, &[]).unwrap(),
        TagValue::UInt8(0)
    );
    assert_eq!(
        TagValue::parse(TagType::UInt16, NAME, &[]).unwrap(),
        TagValue::UInt16(0)
    );
    assert_eq!(
        TagValue::parse(TagType::UInt32, NAME, &[]).unwrap(),
        TagValue::UInt32(0)
    );
    assert_eq!(
        TagValue::parse(TagType::UInt64, NAME, &[]).unwrap(),
        TagValue::UInt64(0)
    );
    assert_eq!(
        TagValue::parse(TagType::UInt128, NAME, &[]).unwrap(),
        TagValue::UInt128(0)
    );
}

#[test]
fn test_integer_wrong_length_fails() {
    assert!(matches!(
        TagValue::parse(TagType::UInt8, NAME, &[1, 2]),
        Err(EcError::Format(_))
    ));
    assert!(matches!(
        TagValue::parse(TagType::UInt16, NAME, &[1]),
        Err(EcError::Format(_))
    ));
    assert!(matches!(
        TagValue::parse(TagType::UInt32, NAME, &[1, 2, 3]),
        Err(EcError::Format(_))
    ));
    assert!(matches!(
        TagValue::parse(TagType::UInt64, NAME, &[1, 2, 3, 4]),
        Err(EcError::Format(_))
    ));
}

#[test]
fn test_integer_values() {
    assert_eq!(
        TagValue::parse(TagType::UInt16, NAME, &[0x02, 0x04]).unwrap(),
        TagValue::UInt16(0x0204)
    );
    assert_eq!(
        TagValue::parse(TagType::UInt32, NAME, &[0xDE, 0xAD, 0xBE, 0xEF]).unwrap(),
        TagValue::UInt32(0xDEAD_BEEF)
    );
}

#[test]
fn test_string_requires_null_terminator() {
    let result = TagValue::parse(TagType::String, NAME, b"missing");
    assert!(matches!(result, Err(EcError::Format(_))));

    let parsed = TagValue::parse(TagType::String, NAME, b"hello\0").unwrap();
    assert_eq!(parsed, TagValue::String("hello".to_string()));

    // Empty content is a single NUL on the wire
    let parsed = TagValue::parse(TagType::String, NAME, &[0x00]).unwrap();
    assert_eq!(parsed, TagValue::String(String::new()));
}

#[test]
fn test_double_is_ascii_decimal() {
    let tag = Tag::double(NAME, 2.5);
    assert_eq!(tag.value.encode(), b"2.5\0");

    let parsed = TagValue::parse(TagType::Double, NAME, b"2.5\0").unwrap();
    assert_eq!(parsed, TagValue::Double(2.5));

    // Missing terminator fails like strings do
    let result = TagValue::parse(TagType::Double, NAME, b"2.5");
    assert!(matches!(result, Err(EcError::Format(_))));

    let result = TagValue::parse(TagType::Double, NAME, b"not a number\0");
    assert!(matches!(result, Err(EcError::Format(_))));
}

#[test]
fn test_ipv4_requires_six_bytes() {
    let parsed = TagValue::parse(TagType::Ipv4, NAME, &[192, 168, 0, 1, 0x12, 0x5E]).unwrap();
    match parsed {
        TagValue::Ipv4(v) => {
            assert_eq!(v.addr, Ipv4Addr::new(192, 168, 0, 1));
            assert_eq!(v.port, 0x125E);
        }
        other => panic!("Expected Ipv4 value, got {:?}", other),
    }

    assert!(matches!(
        TagValue::parse(TagType::Ipv4, NAME, &[192, 168, 0, 1]),
        Err(EcError::Format(_))
    ));
}

#[test]
fn test_hash16_requires_sixteen_bytes() {
    let bytes = [0xAB; 16];
    let parsed = TagValue::parse(TagType::Hash16, NAME, &bytes).unwrap();
    assert_eq!(parsed, TagValue::Hash16(bytes));

    assert!(matches!(
        TagValue::parse(TagType::Hash16, NAME, &[0xAB; 15]),
        Err(EcError::Format(_))
    ));
    assert!(matches!(
        TagValue::parse(TagType::Hash16, NAME, &[]),
        Err(EcError::Format(_))
    ));
}

#[test]
fn test_custom_accepts_any_bytes() {
    let parsed = TagValue::parse(TagType::Custom, NAME, &[]).unwrap();
    assert_eq!(parsed, TagValue::Custom(Vec::new()));

    let parsed = TagValue::parse(TagType::Custom, NAME, &[1, 2, 3]).unwrap();
    assert_eq!(parsed, TagValue::Custom(vec![1, 2, 3]));
}

#[test]
fn test_uint128_leniency() {
    // Shorter big-endian buffers are accepted
    let parsed = TagValue::parse(TagType::UInt128, NAME, &[0x01, 0x00]).unwrap();
    assert_eq!(parsed, TagValue::UInt128(0x100));

    // But never more than 16 bytes
    assert!(matches!(
        TagValue::parse(TagType::UInt128, NAME, &[0u8; 17]),
        Err(EcError::Format(_))
    ));
}

// =============================================================================
// Numeric Accessor Tests
// =============================================================================

#[test]
fn test_widening_is_allowed() {
    let tag = Tag::uint8(NAME, 200);
    assert_eq!(tag.as_u8().unwrap(), 200);
    assert_eq!(tag.as_u16().unwrap(), 200);
    assert_eq!(tag.as_u32().unwrap(), 200);
    assert_eq!(tag.as_u64().unwrap(), 200);
}

#[test]
fn test_narrowing_fails() {
    // A 64-bit tag asked for a narrower view must fail, never truncate
    let tag = Tag::uint64(NAME, 42);
    assert!(matches!(tag.as_u16(), Err(EcError::Format(_))));
    assert!(matches!(tag.as_u32(), Err(EcError::Format(_))));
    assert_eq!(tag.as_u64().unwrap(), 42);

    let tag = Tag::uint32(NAME, 7);
    assert!(matches!(tag.as_u16(), Err(EcError::Format(_))));
    assert_eq!(tag.as_u32().unwrap(), 7);
}

#[test]
fn test_non_numeric_accessor_fails() {
    let tag = Tag::string(NAME, "text");
    assert!(matches!(tag.as_u64(), Err(EcError::Format(_))));
    assert_eq!(tag.as_str(), Some("text"));
}
