//! Request builders
//!
//! One function per daemon operation, each returning a ready-to-send
//! [`Packet`]. Requests default to UTF-8 numbers; search is the one
//! operation the daemon only accepts with fixed-width numbers.

use crate::protocol::{
    DetailLevel, Flags, Ipv4Value, OpCode, Packet, Tag, TagName, PROTOCOL_VERSION,
};

use super::model::{Category, DownloadCommand, SearchFilters, SearchType};

/// Client info opening the authentication handshake
pub fn auth_request(client_name: &str, client_version: &str) -> Packet {
    Packet::with_tags(
        OpCode::AUTH_REQ,
        Flags::use_utf8_numbers(),
        vec![
            Tag::string(TagName::CLIENT_NAME, client_name),
            Tag::string(TagName::CLIENT_VERSION, client_version),
            Tag::uint16(TagName::PROTOCOL_VERSION, PROTOCOL_VERSION),
            // Capability flags; presence is the whole message
            Tag::capability(TagName::CAN_ZLIB),
            Tag::capability(TagName::CAN_UTF8_NUMBERS),
        ],
    )
}

/// Salted password hash answering the AUTH_SALT challenge
pub fn auth_password_request(hash: [u8; 16]) -> Packet {
    Packet::with_tags(
        OpCode::AUTH_PASSWD,
        Flags::use_utf8_numbers(),
        vec![Tag::hash16(TagName::PASSWD_HASH, hash)],
    )
}

/// Daemon statistics at the given detail level
pub fn stats_request(detail: DetailLevel) -> Packet {
    Packet::with_tags(
        OpCode::STAT_REQ,
        Flags::use_utf8_numbers(),
        vec![Tag::uint8(TagName::DETAIL_LEVEL, detail as u8)],
    )
}

/// Start a search
///
/// The query travels as a subtag of the search type tag. The daemon rejects
/// UTF-8 numbers on this opcode, so fixed-width flags are used.
pub fn search_start_request(
    query: &str,
    search_type: SearchType,
    filters: &SearchFilters,
) -> Packet {
    let mut tags = vec![Tag::uint8(TagName::SEARCH_TYPE, search_type as u8)
        .with_subtags(vec![Tag::string(TagName::SEARCH_NAME, query)])];

    if let Some(min_size) = filters.min_size {
        tags.push(Tag::uint64(TagName::SEARCH_MIN_SIZE, min_size));
    }
    if let Some(max_size) = filters.max_size {
        tags.push(Tag::uint64(TagName::SEARCH_MAX_SIZE, max_size));
    }
    if let Some(file_type) = &filters.file_type {
        tags.push(Tag::string(TagName::SEARCH_FILE_TYPE, file_type.clone()));
    }
    if let Some(extension) = &filters.extension {
        tags.push(Tag::string(TagName::SEARCH_EXTENSION, extension.clone()));
    }
    if let Some(availability) = filters.availability {
        tags.push(Tag::uint32(TagName::SEARCH_AVAILABILITY, availability));
    }

    Packet::with_tags(OpCode::SEARCH_START, Flags::no_utf8(), tags)
}

/// Progress of the running search
pub fn search_progress_request() -> Packet {
    Packet::new(OpCode::SEARCH_PROGRESS, Flags::use_utf8_numbers())
}

/// Results collected so far
pub fn search_results_request() -> Packet {
    Packet::new(OpCode::SEARCH_RESULTS, Flags::use_utf8_numbers())
}

/// Stop the running search
pub fn search_stop_request() -> Packet {
    Packet::new(OpCode::SEARCH_STOP, Flags::use_utf8_numbers())
}

/// Queue a search hit for download by its hash
pub fn download_search_result_request(hash: [u8; 16]) -> Packet {
    Packet::with_tags(
        OpCode::DOWNLOAD_SEARCH_RESULT,
        Flags::use_utf8_numbers(),
        vec![Tag::hash16(TagName::PARTFILE, hash)],
    )
}

/// Queue a download from an ed2k link
pub fn add_link_request(link: &str) -> Packet {
    Packet::with_tags(
        OpCode::ADD_LINK,
        Flags::use_utf8_numbers(),
        vec![Tag::string(TagName::PARTFILE_ED2K_LINK, link)],
    )
}

/// Download queue listing
pub fn download_queue_request(detail: DetailLevel) -> Packet {
    Packet::with_tags(
        OpCode::GET_DLOAD_QUEUE,
        Flags::use_utf8_numbers(),
        vec![Tag::uint8(TagName::DETAIL_LEVEL, detail as u8)],
    )
}

/// Shared files listing
pub fn shared_files_request(detail: DetailLevel) -> Packet {
    Packet::with_tags(
        OpCode::GET_SHARED_FILES,
        Flags::use_utf8_numbers(),
        vec![Tag::uint8(TagName::DETAIL_LEVEL, detail as u8)],
    )
}

/// Upload queue listing
pub fn upload_queue_request(detail: DetailLevel) -> Packet {
    Packet::with_tags(
        OpCode::GET_ULOAD_QUEUE,
        Flags::use_utf8_numbers(),
        vec![Tag::uint8(TagName::DETAIL_LEVEL, detail as u8)],
    )
}

/// Apply a command to a queued download; the command selects the opcode
pub fn download_command_request(hash: [u8; 16], command: DownloadCommand) -> Packet {
    let op_code = match command {
        DownloadCommand::Pause => OpCode::PARTFILE_PAUSE,
        DownloadCommand::Resume => OpCode::PARTFILE_RESUME,
        DownloadCommand::Stop => OpCode::PARTFILE_STOP,
        DownloadCommand::Delete => OpCode::PARTFILE_DELETE,
        DownloadCommand::SwapA4afThis => OpCode::PARTFILE_SWAP_A4AF_THIS,
        DownloadCommand::SwapA4afThisAuto => OpCode::PARTFILE_SWAP_A4AF_THIS_AUTO,
        DownloadCommand::SwapA4afOthers => OpCode::PARTFILE_SWAP_A4AF_OTHERS,
    };

    Packet::with_tags(
        op_code,
        Flags::use_utf8_numbers(),
        vec![Tag::hash16(TagName::PARTFILE, hash)],
    )
}

/// Move a queued download into a category
pub fn set_file_category_request(hash: [u8; 16], category_id: u8) -> Packet {
    Packet::with_tags(
        OpCode::PARTFILE_SET_CAT,
        Flags::use_utf8_numbers(),
        vec![Tag::hash16(TagName::PARTFILE, hash)
            .with_subtags(vec![Tag::uint8(TagName::PARTFILE_CAT, category_id)])],
    )
}

/// The category property subtags shared by create and update
fn category_tags(category: &Category) -> Vec<Tag> {
    vec![
        Tag::string(TagName::CATEGORY_TITLE, category.name.clone()),
        Tag::string(TagName::CATEGORY_PATH, category.path.clone()),
        Tag::string(TagName::CATEGORY_COMMENT, category.comment.clone()),
        Tag::uint32(TagName::CATEGORY_COLOR, category.color),
        Tag::uint8(TagName::CATEGORY_PRIO, category.priority),
    ]
}

/// Create a new category
pub fn create_category_request(category: &Category) -> Packet {
    Packet::with_tags(
        OpCode::CREATE_CATEGORY,
        Flags::use_utf8_numbers(),
        vec![Tag::uint32(TagName::CATEGORY, 0).with_subtags(category_tags(category))],
    )
}

/// Update an existing category
pub fn update_category_request(id: u32, category: &Category) -> Packet {
    Packet::with_tags(
        OpCode::UPDATE_CATEGORY,
        Flags::use_utf8_numbers(),
        vec![Tag::uint32(TagName::CATEGORY, id).with_subtags(category_tags(category))],
    )
}

/// Delete a category
pub fn delete_category_request(id: u32) -> Packet {
    Packet::with_tags(
        OpCode::DELETE_CATEGORY,
        Flags::use_utf8_numbers(),
        vec![Tag::uint32(TagName::CATEGORY, id)],
    )
}

/// Server list
pub fn server_list_request() -> Packet {
    Packet::new(OpCode::GET_SERVER_LIST, Flags::use_utf8_numbers())
}

/// Connect to a specific server, or to any when no address is given
pub fn server_connect_request(addr: Option<Ipv4Value>) -> Packet {
    let mut packet = Packet::new(OpCode::SERVER_CONNECT, Flags::use_utf8_numbers());
    if let Some(addr) = addr {
        packet.add_tag(Tag::ipv4(TagName::SERVER, addr.addr, addr.port));
    }
    packet
}

/// Disconnect from the current server
pub fn server_disconnect_request() -> Packet {
    Packet::new(OpCode::SERVER_DISCONNECT, Flags::use_utf8_numbers())
}

/// Query preference subsystems selected by `selection` (see
/// [`crate::protocol::prefs`])
pub fn preferences_request(selection: u32) -> Packet {
    Packet::with_tags(
        OpCode::GET_PREFERENCES,
        Flags::use_utf8_numbers(),
        vec![
            Tag::uint8(TagName::DETAIL_LEVEL, DetailLevel::Full as u8),
            Tag::uint32(TagName::SELECT_PREFS, selection),
        ],
    )
}

/// Incremental update of files, clients, and servers
pub fn update_request(detail: DetailLevel) -> Packet {
    Packet::with_tags(
        OpCode::GET_UPDATE,
        Flags::use_utf8_numbers(),
        vec![Tag::uint8(TagName::DETAIL_LEVEL, detail as u8)],
    )
}
