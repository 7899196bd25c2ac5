//! Protocol Module
//!
//! Wire codec for EC packets and their self-describing nested tags.
//!
//! ## Packet Format
//! ```text
//! ┌───────────┬───────────────┬───────────────────────────────┐
//! │ Flags (4) │ DataLen (4)   │  Data (optionally zlib'd)     │
//! └───────────┴───────────────┴───────────────────────────────┘
//! Data:
//! ┌──────────┬───────────────┬───────────────────────────────┐
//! │ OpCode(1)│ TagCount (*)  │  Tags                          │
//! └──────────┴───────────────┴───────────────────────────────┘
//! ```
//!
//! ## Tag Format
//! ```text
//! ┌──────────┬─────────┬─────────┬─────────────┬─────────┬───────┐
//! │ Name (*) │ Type(1) │ Len (*) │ [Count (*)] │ Subtags │ Value │
//! └──────────┴─────────┴─────────┴─────────────┴─────────┴───────┘
//! ```
//!
//! Fields marked `(*)` are fixed-width big-endian (name/count: 2 bytes,
//! length: 4 bytes) unless the packet's UTF-8 numbers flag is set, in which
//! case they are UTF-8 code-point numbers of 1-4 bytes. The *value* of the
//! length field always uses the fixed-width accounting regardless of mode;
//! see [`length`].

mod codes;
mod encoder;
mod flags;
mod length;
mod packet;
mod parser;
mod tag;
pub mod varnum;

pub use codes::{prefs, DetailLevel, OpCode, TagName, PROTOCOL_VERSION};
pub use encoder::{encode_tag, write_packet};
pub use flags::Flags;
pub use length::{physical_size, reported_length, SUBTAG_COUNT_SIZE, TAG_HEADER_SIZE};
pub use packet::{Packet, HEADER_SIZE};
pub use parser::{expected_packet_size, has_complete_packet, parse_packet};
pub use tag::{find_all, find_tag, Ipv4Value, Tag, TagType, TagValue};
