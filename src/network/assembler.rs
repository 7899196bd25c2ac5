//! Packet assembler for accumulating partial reads
//!
//! Socket reads deliver arbitrary chunks; this accumulates them in a single
//! `BytesMut` and extracts complete packets in arrival order. The protocol
//! has no resynchronization marker, so a parse failure discards the whole
//! accumulator and the next chunk starts a fresh packet.

use bytes::BytesMut;

use crate::error::Result;
use crate::protocol::{expected_packet_size, has_complete_packet, parse_packet, Packet};

/// Accumulates inbound bytes and yields complete packets
pub struct PacketAssembler {
    /// Pending bytes from socket reads
    buffer: BytesMut,
}

impl PacketAssembler {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(4 * 1024),
        }
    }

    /// Push a chunk of bytes and extract every packet it completes
    ///
    /// Returns the packets completed by this chunk, in arrival order; the
    /// list is empty while a packet is still partial. On a parse failure the
    /// accumulator is discarded (packets completed earlier in the same chunk
    /// are lost with it) and the assembler is immediately ready for a fresh
    /// packet.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<Packet>> {
        self.buffer.extend_from_slice(chunk);

        let mut packets = Vec::new();
        while has_complete_packet(&self.buffer) {
            let packet = match parse_packet(&self.buffer) {
                Ok(packet) => packet,
                Err(e) => {
                    self.buffer.clear();
                    return Err(e);
                }
            };

            match expected_packet_size(&self.buffer) {
                Ok(consumed) => {
                    let _ = self.buffer.split_to(consumed);
                }
                Err(e) => {
                    self.buffer.clear();
                    return Err(e);
                }
            }

            packets.push(packet);
        }

        Ok(packets)
    }

    /// Number of buffered bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no bytes are pending
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drop all pending bytes
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for PacketAssembler {
    fn default() -> Self {
        Self::new()
    }
}
