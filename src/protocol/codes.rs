//! Protocol constant tables
//!
//! Opcode and tag-name values of the EC protocol, version 0x0204. Names are
//! 16-bit identifiers grouped by subsystem (0x00xx session, 0x01xx client
//! info, 0x02xx statistics, 0x03xx partfiles, 0x04xx known files, 0x05xx
//! servers, 0x06xx remote clients, 0x07xx search, 0x08xx friends, 0x10xx
//! category preferences). The codec never interprets these; they matter only
//! to the request builders and response mappers.

/// EC protocol version word
pub const PROTOCOL_VERSION: u16 = 0x0204;

/// 8-bit packet operation code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpCode(pub u8);

impl std::fmt::Display for OpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

impl OpCode {
    pub const NOOP: OpCode = OpCode(0x01);
    pub const AUTH_REQ: OpCode = OpCode(0x02);
    pub const AUTH_FAIL: OpCode = OpCode(0x03);
    pub const AUTH_OK: OpCode = OpCode(0x04);
    pub const FAILED: OpCode = OpCode(0x05);
    pub const STRINGS: OpCode = OpCode(0x06);
    pub const MISC_DATA: OpCode = OpCode(0x07);
    pub const SHUTDOWN: OpCode = OpCode(0x08);
    pub const ADD_LINK: OpCode = OpCode(0x09);
    pub const STAT_REQ: OpCode = OpCode(0x0A);
    pub const GET_CONNSTATE: OpCode = OpCode(0x0B);
    pub const STATS: OpCode = OpCode(0x0C);
    pub const GET_DLOAD_QUEUE: OpCode = OpCode(0x0D);
    pub const DLOAD_QUEUE: OpCode = OpCode(0x0E);
    pub const GET_ULOAD_QUEUE: OpCode = OpCode(0x0F);
    pub const ULOAD_QUEUE: OpCode = OpCode(0x10);
    pub const GET_SHARED_FILES: OpCode = OpCode(0x11);
    pub const SHARED_FILES: OpCode = OpCode(0x12);
    pub const SHAREDFILES_RELOAD: OpCode = OpCode(0x13);
    pub const RENAME_FILE: OpCode = OpCode(0x14);
    pub const SEARCH_START: OpCode = OpCode(0x15);
    pub const SEARCH_STOP: OpCode = OpCode(0x16);
    pub const SEARCH_RESULTS: OpCode = OpCode(0x17);
    pub const SEARCH_PROGRESS: OpCode = OpCode(0x18);
    pub const DOWNLOAD_SEARCH_RESULT: OpCode = OpCode(0x19);
    pub const IPFILTER_RELOAD: OpCode = OpCode(0x1A);
    pub const GET_SERVER_LIST: OpCode = OpCode(0x1B);
    pub const SERVER_LIST: OpCode = OpCode(0x1C);
    pub const SERVER_DISCONNECT: OpCode = OpCode(0x1D);
    pub const SERVER_CONNECT: OpCode = OpCode(0x1E);
    pub const SERVER_REMOVE: OpCode = OpCode(0x1F);
    pub const SERVER_ADD: OpCode = OpCode(0x20);
    pub const SERVER_UPDATE_FROM_URL: OpCode = OpCode(0x21);
    pub const ADDLOGLINE: OpCode = OpCode(0x22);
    pub const ADDDEBUGLOGLINE: OpCode = OpCode(0x23);
    pub const GET_LOG: OpCode = OpCode(0x24);
    pub const GET_DEBUGLOG: OpCode = OpCode(0x25);
    pub const GET_SERVERINFO: OpCode = OpCode(0x26);
    pub const LOG: OpCode = OpCode(0x27);
    pub const DEBUGLOG: OpCode = OpCode(0x28);
    pub const SERVERINFO: OpCode = OpCode(0x29);
    pub const RESET_LOG: OpCode = OpCode(0x2A);
    pub const RESET_DEBUGLOG: OpCode = OpCode(0x2B);
    pub const CLEAR_SERVERINFO: OpCode = OpCode(0x2C);
    pub const GET_LAST_LOG_ENTRY: OpCode = OpCode(0x2D);
    pub const GET_PREFERENCES: OpCode = OpCode(0x2E);
    pub const SET_PREFERENCES: OpCode = OpCode(0x2F);
    pub const CREATE_CATEGORY: OpCode = OpCode(0x30);
    pub const UPDATE_CATEGORY: OpCode = OpCode(0x31);
    pub const DELETE_CATEGORY: OpCode = OpCode(0x32);
    pub const GET_STATSGRAPHS: OpCode = OpCode(0x33);
    pub const STATSGRAPHS: OpCode = OpCode(0x34);
    pub const GET_STATSTREE: OpCode = OpCode(0x35);
    pub const STATSTREE: OpCode = OpCode(0x36);
    pub const KAD_START: OpCode = OpCode(0x37);
    pub const KAD_STOP: OpCode = OpCode(0x38);
    pub const CONNECT: OpCode = OpCode(0x39);
    pub const DISCONNECT: OpCode = OpCode(0x3A);
    pub const PARTFILE_REMOVE_NO_NEEDED: OpCode = OpCode(0x3B);
    pub const PARTFILE_REMOVE_FULL_QUEUE: OpCode = OpCode(0x3C);
    pub const PARTFILE_REMOVE_HIGH_QUEUE: OpCode = OpCode(0x3D);
    pub const PARTFILE_CLEANUP_SOURCES: OpCode = OpCode(0x3E);
    pub const PARTFILE_SWAP_A4AF_THIS: OpCode = OpCode(0x3F);
    pub const PARTFILE_SWAP_A4AF_THIS_AUTO: OpCode = OpCode(0x40);
    pub const PARTFILE_SWAP_A4AF_OTHERS: OpCode = OpCode(0x41);
    pub const PARTFILE_PAUSE: OpCode = OpCode(0x42);
    pub const PARTFILE_RESUME: OpCode = OpCode(0x43);
    pub const PARTFILE_STOP: OpCode = OpCode(0x44);
    pub const PARTFILE_PRIO_SET: OpCode = OpCode(0x45);
    pub const PARTFILE_DELETE: OpCode = OpCode(0x46);
    pub const PARTFILE_SET_CAT: OpCode = OpCode(0x47);
    pub const DLOAD_QUEUE_DETAIL: OpCode = OpCode(0x48);
    pub const CLIENT_SWAP_TO_ANOTHER_FILE: OpCode = OpCode(0x49);
    pub const SHARED_SET_PRIO: OpCode = OpCode(0x4A);
    pub const KAD_UPDATE_FROM_URL: OpCode = OpCode(0x4B);
    pub const KAD_BOOTSTRAP_FROM_IP: OpCode = OpCode(0x4C);
    pub const AUTH_SALT: OpCode = OpCode(0x4F);
    pub const AUTH_PASSWD: OpCode = OpCode(0x50);
    pub const GET_UPDATE: OpCode = OpCode(0x51);
    pub const CLEAR_COMPLETED: OpCode = OpCode(0x52);
}

/// 16-bit tag name identifier
///
/// On the wire the name is shifted left by one and the low bit marks the
/// presence of subtags; the codec handles that packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagName(pub u16);

impl std::fmt::Display for TagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

impl TagName {
    // Session
    pub const STRING: TagName = TagName(0x0000);
    pub const PASSWD_HASH: TagName = TagName(0x0001);
    pub const PROTOCOL_VERSION: TagName = TagName(0x0002);
    pub const VERSION_ID: TagName = TagName(0x0003);
    pub const DETAIL_LEVEL: TagName = TagName(0x0004);
    pub const CONNSTATE: TagName = TagName(0x0005);
    pub const ED2K_ID: TagName = TagName(0x0006);
    pub const LOG_TO_STATUS: TagName = TagName(0x0007);
    pub const BOOTSTRAP_IP: TagName = TagName(0x0008);
    pub const BOOTSTRAP_PORT: TagName = TagName(0x0009);
    pub const CLIENT_ID: TagName = TagName(0x000A);
    pub const PASSWD_SALT: TagName = TagName(0x000B);
    pub const CAN_ZLIB: TagName = TagName(0x000C);
    pub const CAN_UTF8_NUMBERS: TagName = TagName(0x000D);
    pub const CAN_NOTIFY: TagName = TagName(0x000E);
    pub const ECID: TagName = TagName(0x000F);
    pub const KAD_ID: TagName = TagName(0x0010);
    pub const SELECT_PREFS: TagName = TagName(0x0011);

    // Client info
    pub const CLIENT_NAME: TagName = TagName(0x0100);
    pub const CLIENT_VERSION: TagName = TagName(0x0101);
    pub const CLIENT_MOD: TagName = TagName(0x0102);

    // Statistics
    pub const STATS_UL_SPEED: TagName = TagName(0x0200);
    pub const STATS_DL_SPEED: TagName = TagName(0x0201);
    pub const STATS_UL_SPEED_LIMIT: TagName = TagName(0x0202);
    pub const STATS_DL_SPEED_LIMIT: TagName = TagName(0x0203);
    pub const STATS_UP_OVERHEAD: TagName = TagName(0x0204);
    pub const STATS_DOWN_OVERHEAD: TagName = TagName(0x0205);
    pub const STATS_TOTAL_SRC_COUNT: TagName = TagName(0x0206);
    pub const STATS_BANNED_COUNT: TagName = TagName(0x0207);
    pub const STATS_UL_QUEUE_LEN: TagName = TagName(0x0208);
    pub const STATS_ED2K_USERS: TagName = TagName(0x0209);
    pub const STATS_KAD_USERS: TagName = TagName(0x020A);
    pub const STATS_ED2K_FILES: TagName = TagName(0x020B);
    pub const STATS_KAD_FILES: TagName = TagName(0x020C);
    pub const STATS_LOGGER_MESSAGE: TagName = TagName(0x020D);
    pub const STATS_TOTAL_SENT_BYTES: TagName = TagName(0x0218);
    pub const STATS_TOTAL_RECEIVED_BYTES: TagName = TagName(0x0219);
    pub const STATS_SHARED_FILE_COUNT: TagName = TagName(0x021A);
    pub const STATS_KAD_NODES: TagName = TagName(0x021B);

    // Partfiles (download queue)
    pub const PARTFILE: TagName = TagName(0x0300);
    pub const PARTFILE_NAME: TagName = TagName(0x0301);
    pub const PARTFILE_PARTMETID: TagName = TagName(0x0302);
    pub const PARTFILE_SIZE_FULL: TagName = TagName(0x0303);
    pub const PARTFILE_SIZE_XFER: TagName = TagName(0x0304);
    pub const PARTFILE_SIZE_XFER_UP: TagName = TagName(0x0305);
    pub const PARTFILE_SIZE_DONE: TagName = TagName(0x0306);
    pub const PARTFILE_SPEED: TagName = TagName(0x0307);
    pub const PARTFILE_STATUS: TagName = TagName(0x0308);
    pub const PARTFILE_PRIO: TagName = TagName(0x0309);
    pub const PARTFILE_SOURCE_COUNT: TagName = TagName(0x030A);
    pub const PARTFILE_SOURCE_COUNT_A4AF: TagName = TagName(0x030B);
    pub const PARTFILE_SOURCE_COUNT_NOT_CURRENT: TagName = TagName(0x030C);
    pub const PARTFILE_SOURCE_COUNT_XFER: TagName = TagName(0x030D);
    pub const PARTFILE_ED2K_LINK: TagName = TagName(0x030E);
    pub const PARTFILE_CAT: TagName = TagName(0x030F);
    pub const PARTFILE_LAST_RECV: TagName = TagName(0x0310);
    pub const PARTFILE_LAST_SEEN_COMP: TagName = TagName(0x0311);
    pub const PARTFILE_PART_STATUS: TagName = TagName(0x0312);
    pub const PARTFILE_STOPPED: TagName = TagName(0x0317);
    pub const PARTFILE_DOWNLOAD_ACTIVE: TagName = TagName(0x0318);
    pub const PARTFILE_LOST_CORRUPTION: TagName = TagName(0x0319);
    pub const PARTFILE_GAINED_COMPRESSION: TagName = TagName(0x031A);
    pub const PARTFILE_SAVED_ICH: TagName = TagName(0x031B);
    pub const PARTFILE_AVAILABLE_PARTS: TagName = TagName(0x031D);
    pub const PARTFILE_HASH: TagName = TagName(0x031E);
    pub const PARTFILE_SHARED: TagName = TagName(0x031F);
    pub const PARTFILE_HASHED_PART_COUNT: TagName = TagName(0x0320);
    pub const PARTFILE_A4AFAUTO: TagName = TagName(0x0321);
    pub const PARTFILE_A4AF_SOURCES: TagName = TagName(0x0322);

    // Known files (shared list)
    pub const KNOWNFILE: TagName = TagName(0x0400);
    pub const KNOWNFILE_XFERRED: TagName = TagName(0x0401);
    pub const KNOWNFILE_XFERRED_ALL: TagName = TagName(0x0402);
    pub const KNOWNFILE_REQ_COUNT: TagName = TagName(0x0403);
    pub const KNOWNFILE_REQ_COUNT_ALL: TagName = TagName(0x0404);
    pub const KNOWNFILE_ACCEPT_COUNT: TagName = TagName(0x0405);
    pub const KNOWNFILE_ACCEPT_COUNT_ALL: TagName = TagName(0x0406);
    pub const KNOWNFILE_SHARED_SIZE: TagName = TagName(0x0407);
    pub const KNOWNFILE_PRIO: TagName = TagName(0x0408);
    pub const KNOWNFILE_FILENAME: TagName = TagName(0x0409);
    pub const KNOWNFILE_COMPLETE_SOURCES_LOW: TagName = TagName(0x040A);
    pub const KNOWNFILE_COMPLETE_SOURCES_HIGH: TagName = TagName(0x040B);
    pub const KNOWNFILE_COMPLETE_SOURCES: TagName = TagName(0x040C);
    pub const KNOWNFILE_COMMENT: TagName = TagName(0x040D);
    pub const KNOWNFILE_RATING: TagName = TagName(0x040E);
    pub const KNOWNFILE_ON_QUEUE: TagName = TagName(0x040F);

    // Servers
    pub const SERVER: TagName = TagName(0x0500);
    pub const SERVER_NAME: TagName = TagName(0x0501);
    pub const SERVER_DESC: TagName = TagName(0x0502);
    pub const SERVER_ADDRESS: TagName = TagName(0x0503);
    pub const SERVER_PING: TagName = TagName(0x0504);
    pub const SERVER_USERS: TagName = TagName(0x0505);
    pub const SERVER_USERS_MAX: TagName = TagName(0x0506);
    pub const SERVER_FILES: TagName = TagName(0x0507);
    pub const SERVER_PRIO: TagName = TagName(0x0508);
    pub const SERVER_FAILED: TagName = TagName(0x0509);
    pub const SERVER_STATIC: TagName = TagName(0x050A);
    pub const SERVER_VERSION: TagName = TagName(0x050B);
    pub const SERVER_IP: TagName = TagName(0x050C);
    pub const SERVER_PORT: TagName = TagName(0x050D);

    // Remote clients (upload queue)
    pub const CLIENT: TagName = TagName(0x0600);
    pub const CLIENT_SOFTWARE: TagName = TagName(0x0601);
    pub const CLIENT_SCORE: TagName = TagName(0x0602);
    pub const CLIENT_HASH: TagName = TagName(0x0603);
    pub const CLIENT_FRIEND_SLOT: TagName = TagName(0x0604);
    pub const CLIENT_WAIT_TIME: TagName = TagName(0x0605);
    pub const CLIENT_XFER_TIME: TagName = TagName(0x0606);
    pub const CLIENT_QUEUE_TIME: TagName = TagName(0x0607);
    pub const CLIENT_LAST_TIME: TagName = TagName(0x0608);
    pub const CLIENT_UPLOAD_SESSION: TagName = TagName(0x0609);
    pub const CLIENT_UPLOAD_TOTAL: TagName = TagName(0x060A);
    pub const CLIENT_DOWNLOAD_TOTAL: TagName = TagName(0x060B);
    pub const CLIENT_UPLOAD_STATE: TagName = TagName(0x060C);
    pub const CLIENT_UP_SPEED: TagName = TagName(0x060D);
    pub const CLIENT_DOWN_SPEED: TagName = TagName(0x060E);
    pub const CLIENT_FROM: TagName = TagName(0x060F);
    pub const CLIENT_USER_IP: TagName = TagName(0x0610);
    pub const CLIENT_USER_PORT: TagName = TagName(0x0611);
    pub const CLIENT_SERVER_IP: TagName = TagName(0x0612);
    pub const CLIENT_SERVER_PORT: TagName = TagName(0x0613);
    pub const CLIENT_SERVER_NAME: TagName = TagName(0x0614);
    pub const CLIENT_SOFT_VER_STR: TagName = TagName(0x0615);
    pub const CLIENT_WAITING_POSITION: TagName = TagName(0x0616);
    pub const CLIENT_IDENT_STATE: TagName = TagName(0x0617);
    pub const CLIENT_OBFUSCATION_STATUS: TagName = TagName(0x0618);
    pub const CLIENT_CURRENTLYUNUSED1: TagName = TagName(0x0619);
    pub const CLIENT_REMOTE_QUEUE_RANK: TagName = TagName(0x061A);
    pub const CLIENT_DISABLE_VIEW_SHARED: TagName = TagName(0x061B);
    pub const CLIENT_UPLOAD_FILE: TagName = TagName(0x061C);
    pub const CLIENT_REQUEST_FILE: TagName = TagName(0x061D);
    pub const CLIENT_DOWNLOAD_STATE: TagName = TagName(0x061E);

    // Search
    pub const SEARCHFILE: TagName = TagName(0x0700);
    pub const SEARCH_TYPE: TagName = TagName(0x0701);
    pub const SEARCH_NAME: TagName = TagName(0x0702);
    pub const SEARCH_MIN_SIZE: TagName = TagName(0x0703);
    pub const SEARCH_MAX_SIZE: TagName = TagName(0x0704);
    pub const SEARCH_FILE_TYPE: TagName = TagName(0x0705);
    pub const SEARCH_EXTENSION: TagName = TagName(0x0706);
    pub const SEARCH_AVAILABILITY: TagName = TagName(0x0707);
    pub const SEARCH_STATUS: TagName = TagName(0x0708);
    pub const SEARCH_PARENT: TagName = TagName(0x0709);

    // Friends
    pub const FRIEND: TagName = TagName(0x0800);
    pub const FRIEND_NAME: TagName = TagName(0x0801);
    pub const FRIEND_HASH: TagName = TagName(0x0802);
    pub const FRIEND_IP: TagName = TagName(0x0803);
    pub const FRIEND_PORT: TagName = TagName(0x0804);

    // Category preferences
    pub const PREFS_CATEGORIES: TagName = TagName(0x1000);
    pub const CATEGORY: TagName = TagName(0x1001);
    pub const CATEGORY_TITLE: TagName = TagName(0x1002);
    pub const CATEGORY_PATH: TagName = TagName(0x1003);
    pub const CATEGORY_COMMENT: TagName = TagName(0x1004);
    pub const CATEGORY_COLOR: TagName = TagName(0x1005);
    pub const CATEGORY_PRIO: TagName = TagName(0x1006);
}

/// Requested level of detail for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DetailLevel {
    Cmd = 0,
    Web = 1,
    Full = 2,
    Update = 3,
    IncUpdate = 4,
}

/// Preference subsystem selection bits for GET_PREFERENCES
pub mod prefs {
    pub const CATEGORIES: u32 = 0x01;
    pub const GENERAL: u32 = 0x02;
    pub const CONNECTIONS: u32 = 0x04;
    pub const MESSAGEFILTER: u32 = 0x08;
    pub const REMOTE_CONTROLS: u32 = 0x10;
    pub const ONLINE_SIG: u32 = 0x20;
    pub const SERVERS: u32 = 0x40;
    pub const FILES: u32 = 0x80;
    pub const DIRECTORIES: u32 = 0x400;
    pub const STATISTICS: u32 = 0x800;
    pub const SECURITY: u32 = 0x1000;
    pub const CORETWEAKS: u32 = 0x2000;
    pub const KADEMLIA: u32 = 0x4000;
}
