//! Network Module
//!
//! Stream reassembly and the blocking TCP connection to the daemon.

mod assembler;
mod connection;

pub use assembler::PacketAssembler;
pub use connection::EcConnection;
