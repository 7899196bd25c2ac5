//! EC packet structure

use super::codes::{OpCode, TagName};
use super::flags::Flags;
use super::tag::{find_tag, Tag};

/// Packet header size: flags (4) + data length (4)
pub const HEADER_SIZE: usize = 8;

/// A single EC packet: operation code, flag word, and top-level tags
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    pub op_code: OpCode,
    pub flags: Flags,
    pub tags: Vec<Tag>,
}

impl Packet {
    /// Create an empty packet
    pub fn new(op_code: OpCode, flags: Flags) -> Self {
        Self {
            op_code,
            flags,
            tags: Vec::new(),
        }
    }

    /// Create a packet with tags
    pub fn with_tags(op_code: OpCode, flags: Flags, tags: Vec<Tag>) -> Self {
        Self {
            op_code,
            flags,
            tags,
        }
    }

    /// Add a tag to the packet
    pub fn add_tag(&mut self, tag: Tag) -> &mut Self {
        self.tags.push(tag);
        self
    }

    /// Find the first top-level tag with the given name
    pub fn find_tag(&self, name: TagName) -> Option<&Tag> {
        find_tag(&self.tags, name)
    }

    /// Check if the packet has a top-level tag with the given name
    pub fn has_tag(&self, name: TagName) -> bool {
        self.find_tag(name).is_some()
    }
}
