//! Response mappers
//!
//! Walk decoded tag trees and extract typed model values. Missing numeric
//! tags read as zero; the daemon omits fields freely depending on the
//! requested detail level.

use crate::error::{EcError, Result};
use crate::protocol::{find_all, find_tag, Packet, Tag, TagName};

use super::model::{
    Category, ConnectedServer, FileStatus, QueuedClient, SearchFile, Server, ShareCounters,
    SharedFile, Stats, TransferringFile, UpdateSnapshot,
};

// =============================================================================
// Lookup helpers
// =============================================================================

/// Numeric tag value, zero when absent or non-numeric
fn num(tags: &[Tag], name: TagName) -> u64 {
    find_tag(tags, name)
        .and_then(|tag| tag.as_u64().ok())
        .unwrap_or(0)
}

/// Numeric tag value, None when absent
fn num_opt(tags: &[Tag], name: TagName) -> Option<u64> {
    find_tag(tags, name).and_then(|tag| tag.as_u64().ok())
}

/// String tag value, None when absent
fn text(tags: &[Tag], name: TagName) -> Option<String> {
    find_tag(tags, name)
        .and_then(|tag| tag.as_str())
        .map(str::to_owned)
}

/// Hash tag value, None when absent
fn hash(tags: &[Tag], name: TagName) -> Option<[u8; 16]> {
    find_tag(tags, name).and_then(|tag| tag.as_hash16()).copied()
}

// =============================================================================
// Authentication
// =============================================================================

/// Extract the salt from an AUTH_SALT response
pub fn parse_salt(packet: &Packet) -> Result<u64> {
    packet
        .find_tag(TagName::PASSWD_SALT)
        .ok_or_else(|| EcError::Protocol("Missing salt tag in auth salt response".to_string()))?
        .as_u64()
}

// =============================================================================
// Statistics
// =============================================================================

/// Map a STATS response
pub fn parse_stats(packet: &Packet) -> Stats {
    let tags = &packet.tags;

    let mut stats = Stats {
        upload_speed: num(tags, TagName::STATS_UL_SPEED),
        download_speed: num(tags, TagName::STATS_DL_SPEED),
        upload_speed_limit: num(tags, TagName::STATS_UL_SPEED_LIMIT),
        download_speed_limit: num(tags, TagName::STATS_DL_SPEED_LIMIT),
        upload_overhead: num(tags, TagName::STATS_UP_OVERHEAD),
        download_overhead: num(tags, TagName::STATS_DOWN_OVERHEAD),
        upload_queue_length: num(tags, TagName::STATS_UL_QUEUE_LEN),
        total_source_count: num(tags, TagName::STATS_TOTAL_SRC_COUNT),
        banned_count: num(tags, TagName::STATS_BANNED_COUNT),
        total_sent_bytes: num(tags, TagName::STATS_TOTAL_SENT_BYTES),
        total_received_bytes: num(tags, TagName::STATS_TOTAL_RECEIVED_BYTES),
        shared_file_count: num(tags, TagName::STATS_SHARED_FILE_COUNT),
        ed2k_users: num(tags, TagName::STATS_ED2K_USERS),
        kad_users: num(tags, TagName::STATS_KAD_USERS),
        ed2k_files: num(tags, TagName::STATS_ED2K_FILES),
        kad_files: num(tags, TagName::STATS_KAD_FILES),
        kad_nodes: num(tags, TagName::STATS_KAD_NODES),
        ..Stats::default()
    };

    // Connection state and connected server live in a nested subtree
    if let Some(connstate) = packet.find_tag(TagName::CONNSTATE) {
        let nested = &connstate.subtags;
        stats.ed2k_id = num(nested, TagName::ED2K_ID) as u32;
        stats.client_id = num(nested, TagName::CLIENT_ID) as u32;

        if let Some(kad_id) = find_tag(nested, TagName::KAD_ID) {
            stats.kad_id = match &kad_id.value {
                crate::protocol::TagValue::UInt128(v) => Some(format!("{:032x}", v)),
                crate::protocol::TagValue::Hash16(h) => Some(hex::encode(h)),
                _ => None,
            };
        }

        if let Some(server) = find_tag(nested, TagName::SERVER) {
            if let Some(addr) = server.as_ipv4() {
                stats.connected_server = Some(ConnectedServer {
                    name: text(&server.subtags, TagName::SERVER_NAME),
                    description: text(&server.subtags, TagName::SERVER_DESC),
                    addr,
                });
            }
        }
    }

    // Older daemons report the client id at the top level
    if stats.client_id == 0 {
        stats.client_id = num(tags, TagName::CLIENT_ID) as u32;
    }

    stats
}

// =============================================================================
// File lists
// =============================================================================

/// The known-file counters shared by queue entries and shared files
fn share_counters(tags: &[Tag]) -> ShareCounters {
    ShareCounters {
        requests: num(tags, TagName::KNOWNFILE_REQ_COUNT),
        all_requests: num(tags, TagName::KNOWNFILE_REQ_COUNT_ALL),
        accepts: num(tags, TagName::KNOWNFILE_ACCEPT_COUNT),
        all_accepts: num(tags, TagName::KNOWNFILE_ACCEPT_COUNT_ALL),
        xferred: num(tags, TagName::KNOWNFILE_XFERRED),
        all_xferred: num(tags, TagName::KNOWNFILE_XFERRED_ALL),
        complete_sources: num(tags, TagName::KNOWNFILE_COMPLETE_SOURCES),
        complete_sources_low: num(tags, TagName::KNOWNFILE_COMPLETE_SOURCES_LOW),
        complete_sources_high: num(tags, TagName::KNOWNFILE_COMPLETE_SOURCES_HIGH),
        on_queue: num(tags, TagName::KNOWNFILE_ON_QUEUE),
    }
}

/// Map PARTFILE container tags into queue entries
pub fn transferring_files_from(tags: &[Tag]) -> Vec<TransferringFile> {
    find_all(tags, TagName::PARTFILE)
        .map(|file_tag| {
            let tags = &file_tag.subtags;

            // A4AF source ids nest one level deeper
            let a4af_sources = find_tag(tags, TagName::PARTFILE_A4AF_SOURCES)
                .map(|container| {
                    find_all(&container.subtags, TagName::ECID)
                        .filter_map(|tag| tag.as_u64().ok())
                        .map(|id| id as u32)
                        .collect()
                })
                .unwrap_or_default();

            TransferringFile {
                hash: hash(tags, TagName::PARTFILE_HASH),
                name: text(tags, TagName::PARTFILE_NAME),
                path: text(tags, TagName::KNOWNFILE_FILENAME),
                ed2k_link: text(tags, TagName::PARTFILE_ED2K_LINK),
                size_full: num(tags, TagName::PARTFILE_SIZE_FULL),
                size_xfer: num(tags, TagName::PARTFILE_SIZE_XFER),
                size_done: num(tags, TagName::PARTFILE_SIZE_DONE),
                speed: num(tags, TagName::PARTFILE_SPEED),
                status: FileStatus::from_wire(num(tags, TagName::PARTFILE_STATUS) as u8),
                stopped: num(tags, TagName::PARTFILE_STOPPED) != 0,
                priority: num(tags, TagName::PARTFILE_PRIO) as u8,
                category: num(tags, TagName::PARTFILE_CAT) as u32,
                source_count: num(tags, TagName::PARTFILE_SOURCE_COUNT),
                source_count_a4af: num(tags, TagName::PARTFILE_SOURCE_COUNT_A4AF),
                source_count_not_current: num(tags, TagName::PARTFILE_SOURCE_COUNT_NOT_CURRENT),
                source_count_xfer: num(tags, TagName::PARTFILE_SOURCE_COUNT_XFER),
                available_part_count: num(tags, TagName::PARTFILE_AVAILABLE_PARTS),
                last_seen_complete: num(tags, TagName::PARTFILE_LAST_SEEN_COMP),
                last_recv: num(tags, TagName::PARTFILE_LAST_RECV),
                a4af_auto: num(tags, TagName::PARTFILE_A4AFAUTO) != 0,
                a4af_sources,
                lost_to_corruption: num(tags, TagName::PARTFILE_LOST_CORRUPTION),
                gained_by_compression: num(tags, TagName::PARTFILE_GAINED_COMPRESSION),
                saved_by_ich: num(tags, TagName::PARTFILE_SAVED_ICH),
                share: share_counters(tags),
                comment: text(tags, TagName::KNOWNFILE_COMMENT),
                rating: num_opt(tags, TagName::KNOWNFILE_RATING).map(|r| r as u8),
            }
        })
        .collect()
}

/// Map a DLOAD_QUEUE response
pub fn parse_download_queue(packet: &Packet) -> Vec<TransferringFile> {
    transferring_files_from(&packet.tags)
}

/// Map KNOWNFILE container tags into shared files
pub fn shared_files_from(tags: &[Tag]) -> Vec<SharedFile> {
    find_all(tags, TagName::KNOWNFILE)
        .map(|file_tag| {
            let tags = &file_tag.subtags;
            SharedFile {
                hash: hash(tags, TagName::PARTFILE_HASH),
                name: text(tags, TagName::PARTFILE_NAME),
                path: text(tags, TagName::KNOWNFILE_FILENAME),
                ed2k_link: text(tags, TagName::PARTFILE_ED2K_LINK),
                size: num(tags, TagName::PARTFILE_SIZE_FULL),
                priority: num(tags, TagName::KNOWNFILE_PRIO) as u8,
                share: share_counters(tags),
                comment: text(tags, TagName::KNOWNFILE_COMMENT),
                rating: num_opt(tags, TagName::KNOWNFILE_RATING).map(|r| r as u8),
            }
        })
        .collect()
}

/// Map a SHARED_FILES response
pub fn parse_shared_files(packet: &Packet) -> Vec<SharedFile> {
    shared_files_from(&packet.tags)
}

// =============================================================================
// Search
// =============================================================================

/// Map a SEARCH_RESULTS response; hits without a name and hash are skipped
pub fn parse_search_results(packet: &Packet) -> Vec<SearchFile> {
    find_all(&packet.tags, TagName::SEARCHFILE)
        .filter_map(|file_tag| {
            let tags = &file_tag.subtags;
            let name = text(tags, TagName::PARTFILE_NAME)?;
            let hash = hash(tags, TagName::PARTFILE_HASH)?;
            Some(SearchFile {
                name,
                hash,
                size: num(tags, TagName::PARTFILE_SIZE_FULL),
                source_count: num(tags, TagName::PARTFILE_SOURCE_COUNT),
                complete_source_count: num(tags, TagName::PARTFILE_SOURCE_COUNT_XFER),
                status: num(tags, TagName::PARTFILE_STATUS) as u8,
            })
        })
        .collect()
}

/// Map a SEARCH_PROGRESS response to a 0.0..=1.0 fraction
pub fn parse_search_progress(packet: &Packet) -> f64 {
    packet
        .find_tag(TagName::SEARCH_STATUS)
        .and_then(|tag| tag.as_u64().ok())
        .map(|percent| percent as f64 / 100.0)
        .unwrap_or(0.0)
}

// =============================================================================
// Servers
// =============================================================================

/// Map SERVER container tags into server entries
///
/// The SERVER tag itself usually carries the address as its ipv4 value;
/// some daemons send separate SERVER_IP/SERVER_PORT subtags instead.
pub fn servers_from(tags: &[Tag]) -> Vec<Server> {
    find_all(tags, TagName::SERVER)
        .map(|server_tag| {
            let nested = &server_tag.subtags;

            let addr = server_tag
                .as_ipv4()
                .or_else(|| find_tag(nested, TagName::SERVER_IP).and_then(Tag::as_ipv4))
                .or_else(|| {
                    let ip = num_opt(nested, TagName::SERVER_IP)? as u32;
                    let port = num(nested, TagName::SERVER_PORT) as u16;
                    Some(crate::protocol::Ipv4Value {
                        addr: std::net::Ipv4Addr::from(ip),
                        port,
                    })
                });

            Server {
                name: text(nested, TagName::SERVER_NAME),
                description: text(nested, TagName::SERVER_DESC),
                addr,
                ping: num(nested, TagName::SERVER_PING),
                users: num(nested, TagName::SERVER_USERS),
                max_users: num(nested, TagName::SERVER_USERS_MAX),
                files: num(nested, TagName::SERVER_FILES),
                priority: num(nested, TagName::SERVER_PRIO),
                is_static: num(nested, TagName::SERVER_STATIC) != 0,
                failed_count: num(nested, TagName::SERVER_FAILED),
                version: text(nested, TagName::SERVER_VERSION),
            }
        })
        .collect()
}

/// Map a SERVER_LIST response
pub fn parse_server_list(packet: &Packet) -> Vec<Server> {
    servers_from(&packet.tags)
}

// =============================================================================
// Upload queue
// =============================================================================

/// Map CLIENT container tags into queue entries
pub fn clients_from(tags: &[Tag]) -> Vec<QueuedClient> {
    find_all(tags, TagName::CLIENT)
        .map(|client_tag| {
            let tags = &client_tag.subtags;
            QueuedClient {
                name: text(tags, TagName::CLIENT_NAME),
                hash: hash(tags, TagName::CLIENT_HASH),
                software: text(tags, TagName::CLIENT_SOFTWARE),
                software_version: text(tags, TagName::CLIENT_SOFT_VER_STR),
                score: num(tags, TagName::CLIENT_SCORE),
                upload_speed: num(tags, TagName::CLIENT_UP_SPEED),
                download_speed: num(tags, TagName::CLIENT_DOWN_SPEED),
                upload_session: num(tags, TagName::CLIENT_UPLOAD_SESSION),
                uploaded_total: num(tags, TagName::CLIENT_UPLOAD_TOTAL),
                downloaded_total: num(tags, TagName::CLIENT_DOWNLOAD_TOTAL),
                upload_state: num(tags, TagName::CLIENT_UPLOAD_STATE),
                waiting_position: num(tags, TagName::CLIENT_WAITING_POSITION),
                remote_queue_rank: num(tags, TagName::CLIENT_REMOTE_QUEUE_RANK),
                upload_filename: text(tags, TagName::PARTFILE_NAME),
            }
        })
        .collect()
}

/// Map a ULOAD_QUEUE response
pub fn parse_upload_queue(packet: &Packet) -> Vec<QueuedClient> {
    clients_from(&packet.tags)
}

// =============================================================================
// Categories
// =============================================================================

/// Map a preferences response carrying the category table
pub fn parse_categories(packet: &Packet) -> Vec<Category> {
    let container = match packet.find_tag(TagName::PREFS_CATEGORIES) {
        Some(container) => container,
        None => return Vec::new(),
    };

    find_all(&container.subtags, TagName::CATEGORY)
        .filter_map(|category_tag| {
            let nested = &category_tag.subtags;
            let name = text(nested, TagName::CATEGORY_TITLE)?;
            Some(Category {
                id: category_tag.as_u64().unwrap_or(0) as u32,
                name,
                path: text(nested, TagName::CATEGORY_PATH).unwrap_or_default(),
                comment: text(nested, TagName::CATEGORY_COMMENT).unwrap_or_default(),
                color: num(nested, TagName::CATEGORY_COLOR) as u32,
                priority: num(nested, TagName::CATEGORY_PRIO) as u8,
            })
        })
        .collect()
}

// =============================================================================
// Incremental update
// =============================================================================

/// Map a GET_UPDATE response
///
/// Files sit at the packet root; clients and servers arrive wrapped in a
/// container tag of their kind.
pub fn parse_update(packet: &Packet) -> UpdateSnapshot {
    let clients = packet
        .find_tag(TagName::CLIENT)
        .map(|container| clients_from(&container.subtags))
        .unwrap_or_default();

    let servers = packet
        .find_tag(TagName::SERVER)
        .map(|container| servers_from(&container.subtags))
        .unwrap_or_default();

    UpdateSnapshot {
        download_queue: transferring_files_from(&packet.tags),
        shared_files: shared_files_from(&packet.tags),
        servers,
        clients,
    }
}
