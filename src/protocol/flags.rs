//! Packet flag word
//!
//! A 32-bit bitfield carried at the start of every packet. Bit 5 is always
//! set so newer clients can be told apart from pre-0x0200 ones.

/// Packet flags (immutable once constructed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags(u32);

impl Flags {
    /// Packet data is zlib-compressed
    pub const ZLIB: u32 = 0x01;
    /// Header numbers use the UTF-8 code-point encoding
    pub const UTF8_NUMBERS: u32 = 0x02;
    /// The zlib/utf8 bits describe a capability offer, not the packet itself
    pub const ACCEPTS: u32 = 0x10;
    /// Always set, distinguishes from older clients
    pub const ALWAYS_SET: u32 = 0x20;

    /// Flags from a raw 32-bit word
    pub fn from_raw(raw: u32) -> Self {
        Flags(raw)
    }

    /// Flags offering UTF-8 numbers and zlib compression
    pub fn accept() -> Self {
        Flags(Self::ACCEPTS | Self::UTF8_NUMBERS | Self::ZLIB | Self::ALWAYS_SET)
    }

    /// Flags using UTF-8 number encoding
    pub fn use_utf8_numbers() -> Self {
        Flags(Self::UTF8_NUMBERS | Self::ALWAYS_SET)
    }

    /// Flags with fixed-width numbers (required for search requests)
    pub fn no_utf8() -> Self {
        Flags(Self::ALWAYS_SET)
    }

    /// Flags using zlib compression
    pub fn use_zlib() -> Self {
        Flags(Self::ZLIB | Self::ALWAYS_SET)
    }

    /// Check if zlib compression is used
    pub fn is_zlib(&self) -> bool {
        self.0 & Self::ZLIB != 0
    }

    /// Check if UTF-8 number encoding is used
    pub fn is_utf8_numbers(&self) -> bool {
        self.0 & Self::UTF8_NUMBERS != 0
    }

    /// Check if zlib compression is offered
    pub fn is_zlib_accepted(&self) -> bool {
        self.0 & Self::ACCEPTS != 0 && self.0 & Self::ZLIB != 0
    }

    /// Check if UTF-8 number encoding is offered
    pub fn is_utf8_numbers_accepted(&self) -> bool {
        self.0 & Self::ACCEPTS != 0 && self.0 & Self::UTF8_NUMBERS != 0
    }

    /// Raw 32-bit value
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Wire representation (4 bytes big-endian)
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Flags from the wire representation
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Flags(u32::from_be_bytes(bytes))
    }
}
