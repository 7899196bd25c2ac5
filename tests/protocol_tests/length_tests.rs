//! Length Accounting Tests
//!
//! The length field value must follow the fixed-header convention in every
//! numeric mode, while the physical size tracks the active mode.

use amule_ec::protocol::{physical_size, reported_length, Tag, TagName};

#[test]
fn test_leaf_reported_length_is_value_length() {
    assert_eq!(reported_length(&Tag::uint8(TagName(0x04), 1)), 1);
    assert_eq!(reported_length(&Tag::uint32(TagName(0x04), 1)), 4);
    assert_eq!(reported_length(&Tag::string(TagName(0x04), "abc")), 4);
    assert_eq!(reported_length(&Tag::capability(TagName(0x0C))), 0);
    assert_eq!(reported_length(&Tag::hash16(TagName(0x01), [0; 16])), 16);
}

/// Each direct child contributes its reported length plus a 7-byte fixed
/// header, plus 2 more when the child itself nests
#[test]
fn test_nested_reported_length() {
    let parent = Tag::uint32(TagName(0x04), 9).with_subtags(vec![
        Tag::string(TagName(0x02), "ab"), // reported 3
        Tag::string(TagName(0x03), "c"),  // reported 2
    ]);

    assert_eq!(reported_length(&parent), 4 + (3 + 7) + (2 + 7));
}

#[test]
fn test_grandchild_adds_count_field() {
    let middle = Tag::uint8(TagName(0x02), 1)
        .with_subtags(vec![Tag::uint8(TagName(0x03), 2)]); // reported 1 + (1+7) = 9
    let parent = Tag::uint8(TagName(0x01), 0).with_subtags(vec![middle]);

    // middle has subtags, so the parent accounts 2 extra bytes for its
    // count field
    assert_eq!(reported_length(&parent), 1 + (9 + 7 + 2));
}

#[test]
fn test_physical_size_fixed_mode() {
    // name(2) + type(1) + length(4) + value(4)
    let tag = Tag::uint32(TagName(0x04), 1);
    assert_eq!(physical_size(&tag, false).unwrap(), 11);

    let parent = Tag::uint32(TagName(0x04), 9).with_subtags(vec![
        Tag::string(TagName(0x02), "ab"),
        Tag::string(TagName(0x03), "c"),
    ]);
    // header(7) + count(2) + children(10 + 9) + value(4)
    assert_eq!(physical_size(&parent, false).unwrap(), 32);
}

/// Under UTF-8 mode the physical tag shrinks but the reported length does
/// not follow; the two quantities must diverge for nested trees
#[test]
fn test_reported_length_differs_from_physical_in_utf8_mode() {
    let parent = Tag::uint32(TagName(0x04), 9).with_subtags(vec![
        Tag::string(TagName(0x02), "ab"),
        Tag::string(TagName(0x03), "c"),
    ]);

    let reported = reported_length(&parent);
    let physical = physical_size(&parent, true).unwrap();

    assert_eq!(reported, 23);
    // name(1) + type(1) + length(1) + count(1) + children(6 + 5) + value(4)
    assert_eq!(physical, 19);
    assert_ne!(reported, physical);
}

#[test]
fn test_physical_size_matches_encoded_bytes() {
    let tag = Tag::uint32(TagName(0x04), 0x0102_0304).with_subtags(vec![
        Tag::string(TagName(0x102), "nested"),
        Tag::uint64(TagName(0x103), u64::MAX),
    ]);

    for utf8 in [false, true] {
        let mut buf = bytes::BytesMut::new();
        amule_ec::protocol::encode_tag(&mut buf, &tag, utf8).unwrap();
        assert_eq!(buf.len(), physical_size(&tag, utf8).unwrap());
    }
}
