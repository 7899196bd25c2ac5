//! Packet Assembler Tests
//!
//! Chunked delivery, multi-packet chunks, and the discard-on-corruption
//! policy.

use amule_ec::network::PacketAssembler;
use amule_ec::protocol::{write_packet, Flags, OpCode, Packet, Tag, TagName};
use amule_ec::EcError;

fn packet_bytes(op_code: OpCode) -> Vec<u8> {
    let packet = Packet::with_tags(
        op_code,
        Flags::use_utf8_numbers(),
        vec![
            Tag::uint8(TagName::DETAIL_LEVEL, 2),
            Tag::string(TagName::CLIENT_NAME, "assembler test"),
        ],
    );
    write_packet(&packet).unwrap().to_vec()
}

#[test]
fn test_single_complete_chunk() {
    let mut assembler = PacketAssembler::new();
    let bytes = packet_bytes(OpCode::STATS);

    let packets = assembler.push(&bytes).unwrap();
    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].op_code, OpCode::STATS);
    assert!(assembler.is_empty());
}

#[test]
fn test_two_packets_in_one_chunk_keep_order() {
    let mut assembler = PacketAssembler::new();

    let mut combined = packet_bytes(OpCode::STATS);
    combined.extend_from_slice(&packet_bytes(OpCode::DLOAD_QUEUE));

    let packets = assembler.push(&combined).unwrap();
    assert_eq!(packets.len(), 2);
    assert_eq!(packets[0].op_code, OpCode::STATS);
    assert_eq!(packets[1].op_code, OpCode::DLOAD_QUEUE);
    assert!(assembler.is_empty());
}

#[test]
fn test_split_at_every_boundary() {
    let bytes = packet_bytes(OpCode::STATS);
    let whole = amule_ec::protocol::parse_packet(&bytes).unwrap();

    // Splits inside the header and inside tag data must all behave the same
    for split in 1..bytes.len() {
        let mut assembler = PacketAssembler::new();

        let first = assembler.push(&bytes[..split]).unwrap();
        assert!(first.is_empty(), "early packet at split {}", split);

        let second = assembler.push(&bytes[split..]).unwrap();
        assert_eq!(second.len(), 1, "missing packet at split {}", split);
        assert_eq!(second[0], whole);
        assert!(assembler.is_empty());
    }
}

#[test]
fn test_byte_at_a_time() {
    let bytes = packet_bytes(OpCode::STATS);
    let mut assembler = PacketAssembler::new();

    let mut received = Vec::new();
    for byte in &bytes {
        received.extend(assembler.push(std::slice::from_ref(byte)).unwrap());
    }

    assert_eq!(received.len(), 1);
    assert_eq!(received[0].op_code, OpCode::STATS);
}

#[test]
fn test_declared_length_exceeding_bytes_keeps_waiting() {
    let mut assembler = PacketAssembler::new();

    // Header promising 100 data bytes, followed by only 3
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&Flags::no_utf8().to_bytes());
    bytes.extend_from_slice(&100u32.to_be_bytes());
    bytes.extend_from_slice(&[1, 2, 3]);

    let packets = assembler.push(&bytes).unwrap();
    assert!(packets.is_empty());
    assert_eq!(assembler.len(), bytes.len());
}

#[test]
fn test_corruption_discards_accumulator() {
    let mut assembler = PacketAssembler::new();

    // Complete by length, but the body truncates mid-tag
    let mut corrupt = Vec::new();
    corrupt.extend_from_slice(&Flags::no_utf8().to_bytes());
    corrupt.extend_from_slice(&3u32.to_be_bytes());
    corrupt.extend_from_slice(&[0x0C, 0x00, 0x01]); // declares one tag, none follow

    let result = assembler.push(&corrupt);
    assert!(matches!(result, Err(EcError::Protocol(_))));
    assert!(assembler.is_empty());

    // The assembler recovers: a fresh packet on the next chunk parses
    let bytes = packet_bytes(OpCode::STATS);
    let packets = assembler.push(&bytes).unwrap();
    assert_eq!(packets.len(), 1);
}

#[test]
fn test_corruption_discards_trailing_bytes_too() {
    let mut assembler = PacketAssembler::new();

    let mut corrupt = Vec::new();
    corrupt.extend_from_slice(&Flags::no_utf8().to_bytes());
    corrupt.extend_from_slice(&3u32.to_be_bytes());
    corrupt.extend_from_slice(&[0x0C, 0x00, 0x01]);
    // A valid packet queued behind the corrupt one is lost with the
    // accumulator; there is no resync marker to find it again
    corrupt.extend_from_slice(&packet_bytes(OpCode::STATS));

    let result = assembler.push(&corrupt);
    assert!(matches!(result, Err(EcError::Protocol(_))));
    assert!(assembler.is_empty());
}

#[test]
fn test_clear_resets_partial_state() {
    let mut assembler = PacketAssembler::new();
    let bytes = packet_bytes(OpCode::STATS);

    assembler.push(&bytes[..5]).unwrap();
    assert!(!assembler.is_empty());

    assembler.clear();
    assert!(assembler.is_empty());

    // A whole packet parses cleanly after the reset
    let packets = assembler.push(&bytes).unwrap();
    assert_eq!(packets.len(), 1);
}
