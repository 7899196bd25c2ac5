//! Connection Handler
//!
//! Manages the TCP connection to the daemon: framing, the authentication
//! handshake, and the pending-response bookkeeping. Responses carry no
//! request identifier, so they are matched to requests strictly by order;
//! all mutation happens through `&mut self` on one thread.

use std::collections::VecDeque;
use std::io::{BufReader, BufWriter, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::auth;
use crate::client::requests;
use crate::config::Config;
use crate::error::{EcError, Result};
use crate::protocol::{write_packet, OpCode, Packet, TagName};

use super::assembler::PacketAssembler;

/// A single authenticated connection to the daemon
pub struct EcConnection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Reassembles packets from socket read chunks
    assembler: PacketAssembler,

    /// Complete packets not yet handed to a caller
    ready: VecDeque<Packet>,

    /// Requests sent whose responses have not been received
    pending: usize,

    /// Peer address for logging
    peer_addr: String,
}

impl EcConnection {
    /// Connect to the daemon and run the authentication handshake
    pub fn connect(config: &Config) -> Result<Self> {
        let stream = open_stream(config)?;

        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;

        let mut connection = Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
            assembler: PacketAssembler::new(),
            ready: VecDeque::new(),
            pending: 0,
            peer_addr,
        };

        connection.authenticate(config)?;
        Ok(connection)
    }

    /// Perform the salt handshake
    fn authenticate(&mut self, config: &Config) -> Result<()> {
        tracing::debug!("Authenticating with {}", self.peer_addr);

        // Step 1: client info, answered with a salt
        let salt_packet = self.request(&requests::auth_request(
            &config.client_name,
            &config.client_version,
        ))?;

        if salt_packet.op_code == OpCode::AUTH_FAIL {
            return Err(EcError::Auth("server rejected client".to_string()));
        }
        if salt_packet.op_code != OpCode::AUTH_SALT {
            return Err(EcError::Auth(format!(
                "unexpected response to client info: {}",
                salt_packet.op_code
            )));
        }

        let salt = salt_packet
            .find_tag(TagName::PASSWD_SALT)
            .ok_or_else(|| EcError::Auth("missing salt tag in auth salt response".to_string()))?
            .as_u64()?;

        // Step 2: salted password hash
        let hash = auth::hash_password(&config.password, salt);
        let reply = self.request(&requests::auth_password_request(hash))?;

        if reply.op_code == OpCode::AUTH_FAIL {
            return Err(EcError::Auth("invalid password".to_string()));
        }
        if reply.op_code != OpCode::AUTH_OK {
            return Err(EcError::Auth(format!(
                "unexpected auth response: {}",
                reply.op_code
            )));
        }

        tracing::debug!("Authenticated with {}", self.peer_addr);
        Ok(())
    }

    /// Frame and send a request, registering a pending response
    pub fn send(&mut self, packet: &Packet) -> Result<()> {
        let bytes = write_packet(packet)?;
        tracing::trace!(
            "Sending packet {} ({} bytes) to {}",
            packet.op_code,
            bytes.len(),
            self.peer_addr
        );

        if let Err(e) = self
            .writer
            .write_all(&bytes)
            .and_then(|_| self.writer.flush())
        {
            tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
            self.fail_pending();
            return Err(EcError::Io(e));
        }

        self.pending += 1;
        Ok(())
    }

    /// Receive the response for the oldest pending request
    ///
    /// Reads socket chunks into the assembler until a packet completes.
    /// A transport failure fails every pending response; a parse failure
    /// fails only the current one and leaves the assembler reset for the
    /// next packet.
    pub fn recv(&mut self) -> Result<Packet> {
        if self.pending == 0 {
            return Err(EcError::Transport(
                "no pending request to receive a response for".to_string(),
            ));
        }

        loop {
            if let Some(packet) = self.ready.pop_front() {
                self.pending -= 1;
                tracing::trace!("Received packet {} from {}", packet.op_code, self.peer_addr);
                return Ok(packet);
            }

            let mut chunk = [0u8; 4096];
            let n = match self.reader.read(&mut chunk) {
                Ok(0) => {
                    let failed = self.fail_pending();
                    return Err(EcError::Transport(format!(
                        "connection closed by {} with {} pending response(s)",
                        self.peer_addr, failed
                    )));
                }
                Ok(n) => n,
                Err(e) => {
                    tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                    self.fail_pending();
                    return Err(EcError::Io(e));
                }
            };

            match self.assembler.push(&chunk[..n]) {
                Ok(packets) => self.ready.extend(packets),
                Err(e) => {
                    tracing::warn!("Corrupt packet stream from {}: {}", self.peer_addr, e);
                    self.pending -= 1;
                    return Err(e);
                }
            }
        }
    }

    /// Send a request and wait for its response
    pub fn request(&mut self, packet: &Packet) -> Result<Packet> {
        self.send(packet)?;
        self.recv()
    }

    /// Fail every pending response and reset framing state
    ///
    /// Returns how many responses were outstanding. After this the
    /// connection object should be discarded; a reconnect starts clean.
    pub fn fail_pending(&mut self) -> usize {
        let failed = self.pending;
        self.pending = 0;
        self.ready.clear();
        self.assembler.clear();
        failed
    }

    /// Number of requests awaiting a response
    pub fn pending_count(&self) -> usize {
        self.pending
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Open the TCP stream, honoring the configured connect timeout
fn open_stream(config: &Config) -> Result<TcpStream> {
    let addr = (config.host.as_str(), config.port);

    if config.connect_timeout_ms == 0 {
        return Ok(TcpStream::connect(addr)?);
    }

    let timeout = Duration::from_millis(config.connect_timeout_ms);
    let mut last_err = None;
    for resolved in addr.to_socket_addrs()? {
        match TcpStream::connect_timeout(&resolved, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }

    Err(match last_err {
        Some(e) => EcError::Io(e),
        None => EcError::Transport(format!(
            "no addresses resolved for {}:{}",
            config.host, config.port
        )),
    })
}
