//! Data model for client operations
//!
//! Plain structs and enums filled in by the response mappers. None of these
//! know anything about the wire format.

use crate::protocol::Ipv4Value;

/// Download state of a partfile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FileStatus {
    Ready = 0,
    Empty = 1,
    WaitingForHash = 2,
    Hashing = 3,
    Error = 4,
    Insufficient = 5,
    Unknown = 6,
    Paused = 7,
    Completing = 8,
    Complete = 9,
    Allocating = 10,
}

impl FileStatus {
    /// Map a wire status byte; out-of-range values become `Unknown`
    pub fn from_wire(byte: u8) -> FileStatus {
        match byte {
            0 => FileStatus::Ready,
            1 => FileStatus::Empty,
            2 => FileStatus::WaitingForHash,
            3 => FileStatus::Hashing,
            4 => FileStatus::Error,
            5 => FileStatus::Insufficient,
            7 => FileStatus::Paused,
            8 => FileStatus::Completing,
            9 => FileStatus::Complete,
            10 => FileStatus::Allocating,
            _ => FileStatus::Unknown,
        }
    }
}

/// Commands applicable to a file in the download queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadCommand {
    Pause,
    Resume,
    Stop,
    Delete,
    SwapA4afThis,
    SwapA4afThisAuto,
    SwapA4afOthers,
}

/// Where a search runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SearchType {
    Local = 0x00,
    Global = 0x01,
    Kad = 0x02,
    Web = 0x03,
}

/// Optional constraints for a search request
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub min_size: Option<u64>,
    pub max_size: Option<u64>,
    pub file_type: Option<String>,
    pub extension: Option<String>,
    pub availability: Option<u32>,
}

/// Server the daemon is connected to, from the stats connection state
#[derive(Debug, Clone)]
pub struct ConnectedServer {
    pub name: Option<String>,
    pub description: Option<String>,
    pub addr: Ipv4Value,
}

/// Daemon statistics
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub upload_speed: u64,
    pub download_speed: u64,
    pub upload_speed_limit: u64,
    pub download_speed_limit: u64,
    pub upload_overhead: u64,
    pub download_overhead: u64,
    pub upload_queue_length: u64,
    pub total_source_count: u64,
    pub banned_count: u64,
    pub total_sent_bytes: u64,
    pub total_received_bytes: u64,
    pub shared_file_count: u64,
    pub ed2k_users: u64,
    pub kad_users: u64,
    pub ed2k_files: u64,
    pub kad_files: u64,
    pub kad_nodes: u64,
    pub client_id: u32,
    pub ed2k_id: u32,
    /// Kad node id as lowercase hex, when the daemon reports one
    pub kad_id: Option<String>,
    pub connected_server: Option<ConnectedServer>,
}

/// Share counters the daemon keeps per known file
#[derive(Debug, Clone, Default)]
pub struct ShareCounters {
    pub requests: u64,
    pub all_requests: u64,
    pub accepts: u64,
    pub all_accepts: u64,
    pub xferred: u64,
    pub all_xferred: u64,
    pub complete_sources: u64,
    pub complete_sources_low: u64,
    pub complete_sources_high: u64,
    pub on_queue: u64,
}

/// A file in the download queue
#[derive(Debug, Clone)]
pub struct TransferringFile {
    pub hash: Option<[u8; 16]>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub ed2k_link: Option<String>,
    pub size_full: u64,
    pub size_xfer: u64,
    pub size_done: u64,
    pub speed: u64,
    pub status: FileStatus,
    pub stopped: bool,
    pub priority: u8,
    pub category: u32,
    pub source_count: u64,
    pub source_count_a4af: u64,
    pub source_count_not_current: u64,
    pub source_count_xfer: u64,
    pub available_part_count: u64,
    pub last_seen_complete: u64,
    pub last_recv: u64,
    pub a4af_auto: bool,
    /// ECIDs of A4AF sources attached to this file
    pub a4af_sources: Vec<u32>,
    pub lost_to_corruption: u64,
    pub gained_by_compression: u64,
    pub saved_by_ich: u64,
    pub share: ShareCounters,
    pub comment: Option<String>,
    pub rating: Option<u8>,
}

/// A file in the shared list
#[derive(Debug, Clone)]
pub struct SharedFile {
    pub hash: Option<[u8; 16]>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub ed2k_link: Option<String>,
    pub size: u64,
    pub priority: u8,
    pub share: ShareCounters,
    pub comment: Option<String>,
    pub rating: Option<u8>,
}

/// One search hit
#[derive(Debug, Clone)]
pub struct SearchFile {
    pub name: String,
    pub hash: [u8; 16],
    pub size: u64,
    pub source_count: u64,
    pub complete_source_count: u64,
    /// Download status byte reported by the daemon (0 = new)
    pub status: u8,
}

/// An ed2k server known to the daemon
#[derive(Debug, Clone)]
pub struct Server {
    pub name: Option<String>,
    pub description: Option<String>,
    pub addr: Option<Ipv4Value>,
    pub ping: u64,
    pub users: u64,
    pub max_users: u64,
    pub files: u64,
    pub priority: u64,
    pub is_static: bool,
    pub failed_count: u64,
    pub version: Option<String>,
}

/// A download category
#[derive(Debug, Clone)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub path: String,
    pub comment: String,
    pub color: u32,
    pub priority: u8,
}

/// A remote client in the upload queue
#[derive(Debug, Clone)]
pub struct QueuedClient {
    pub name: Option<String>,
    pub hash: Option<[u8; 16]>,
    pub software: Option<String>,
    pub software_version: Option<String>,
    pub score: u64,
    pub upload_speed: u64,
    pub download_speed: u64,
    pub upload_session: u64,
    pub uploaded_total: u64,
    pub downloaded_total: u64,
    pub upload_state: u64,
    pub waiting_position: u64,
    pub remote_queue_rank: u64,
    pub upload_filename: Option<String>,
}

/// Combined incremental-update payload
#[derive(Debug, Clone, Default)]
pub struct UpdateSnapshot {
    pub download_queue: Vec<TransferringFile>,
    pub shared_files: Vec<SharedFile>,
    pub servers: Vec<Server>,
    pub clients: Vec<QueuedClient>,
}

impl Default for TransferringFile {
    fn default() -> Self {
        Self {
            hash: None,
            name: None,
            path: None,
            ed2k_link: None,
            size_full: 0,
            size_xfer: 0,
            size_done: 0,
            speed: 0,
            status: FileStatus::Unknown,
            stopped: false,
            priority: 0,
            category: 0,
            source_count: 0,
            source_count_a4af: 0,
            source_count_not_current: 0,
            source_count_xfer: 0,
            available_part_count: 0,
            last_seen_complete: 0,
            last_recv: 0,
            a4af_auto: false,
            a4af_sources: Vec::new(),
            lost_to_corruption: 0,
            gained_by_compression: 0,
            saved_by_ich: 0,
            share: ShareCounters::default(),
            comment: None,
            rating: None,
        }
    }
}
