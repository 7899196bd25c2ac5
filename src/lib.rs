//! # amule-ec
//!
//! A client library for the aMule External Connection (EC) protocol:
//! - Self-describing nested tag codec with dual numeric encodings
//! - Length-prefixed, optionally zlib-compressed packet framing
//! - Streaming packet reassembly for chunked socket reads
//! - Salted-MD5 authentication handshake and typed request/response API
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        EcClient                              │
//! │        (stats / search / queue / servers / categories)       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Packet (opcode + flags + tag tree)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      EcConnection                            │
//! │          (TCP, handshake, pending-response FIFO)             │
//! └─────────┬─────────────────────────────────▲─────────────────┘
//!           │ bytes out                       │ packets in
//!           ▼                                 │
//!   ┌─────────────┐                   ┌───────┴───────┐
//!   │   encoder   │                   │   assembler   │
//!   │ (tag+frame) │                   │ (chunk→packet)│
//!   └─────────────┘                   └───────▲───────┘
//!                                             │
//!                                     ┌───────┴───────┐
//!                                     │    parser     │
//!                                     │ (frame+tags)  │
//!                                     └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod auth;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EcError, Result};
pub use config::Config;
pub use client::EcClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of amule-ec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
