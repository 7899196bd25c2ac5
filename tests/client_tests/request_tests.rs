//! Request Builder Tests

use amule_ec::client::model::{Category, DownloadCommand, SearchFilters, SearchType};
use amule_ec::client::requests;
use amule_ec::protocol::{OpCode, TagName, TagValue};

#[test]
fn test_stats_request_shape() {
    let packet = requests::stats_request(amule_ec::protocol::DetailLevel::Full);

    assert_eq!(packet.op_code, OpCode::STAT_REQ);
    assert!(packet.flags.is_utf8_numbers());

    let detail = packet.find_tag(TagName::DETAIL_LEVEL).unwrap();
    assert_eq!(detail.value, TagValue::UInt8(2));
}

#[test]
fn test_search_request_uses_fixed_width_numbers() {
    // The daemon refuses UTF-8 numbers on the search opcode
    let packet =
        requests::search_start_request("linux iso", SearchType::Kad, &SearchFilters::default());

    assert_eq!(packet.op_code, OpCode::SEARCH_START);
    assert!(!packet.flags.is_utf8_numbers());
    assert_eq!(packet.tags.len(), 1);

    // The query rides as a subtag of the search type tag
    let type_tag = packet.find_tag(TagName::SEARCH_TYPE).unwrap();
    assert_eq!(type_tag.value, TagValue::UInt8(SearchType::Kad as u8));
    assert_eq!(type_tag.subtags.len(), 1);
    assert_eq!(
        type_tag.subtags[0].value,
        TagValue::String("linux iso".to_string())
    );
}

#[test]
fn test_search_request_filters() {
    let filters = SearchFilters {
        min_size: Some(1024),
        max_size: Some(1 << 30),
        file_type: Some("Video".to_string()),
        extension: Some("mkv".to_string()),
        availability: Some(3),
    };

    let packet = requests::search_start_request("query", SearchType::Local, &filters);

    assert_eq!(
        packet.find_tag(TagName::SEARCH_MIN_SIZE).unwrap().value,
        TagValue::UInt64(1024)
    );
    assert_eq!(
        packet.find_tag(TagName::SEARCH_MAX_SIZE).unwrap().value,
        TagValue::UInt64(1 << 30)
    );
    assert_eq!(
        packet.find_tag(TagName::SEARCH_FILE_TYPE).unwrap().value,
        TagValue::String("Video".to_string())
    );
    assert_eq!(
        packet.find_tag(TagName::SEARCH_EXTENSION).unwrap().value,
        TagValue::String("mkv".to_string())
    );
    assert_eq!(
        packet.find_tag(TagName::SEARCH_AVAILABILITY).unwrap().value,
        TagValue::UInt32(3)
    );
}

#[test]
fn test_download_command_selects_opcode() {
    let hash = [0x11; 16];

    let cases = [
        (DownloadCommand::Pause, OpCode::PARTFILE_PAUSE),
        (DownloadCommand::Resume, OpCode::PARTFILE_RESUME),
        (DownloadCommand::Stop, OpCode::PARTFILE_STOP),
        (DownloadCommand::Delete, OpCode::PARTFILE_DELETE),
        (
            DownloadCommand::SwapA4afThis,
            OpCode::PARTFILE_SWAP_A4AF_THIS,
        ),
        (
            DownloadCommand::SwapA4afThisAuto,
            OpCode::PARTFILE_SWAP_A4AF_THIS_AUTO,
        ),
        (
            DownloadCommand::SwapA4afOthers,
            OpCode::PARTFILE_SWAP_A4AF_OTHERS,
        ),
    ];

    for (command, expected_op) in cases {
        let packet = requests::download_command_request(hash, command);
        assert_eq!(packet.op_code, expected_op, "{:?}", command);
        assert_eq!(
            packet.find_tag(TagName::PARTFILE).unwrap().value,
            TagValue::Hash16(hash)
        );
    }
}

#[test]
fn test_set_file_category_nests_the_category() {
    let packet = requests::set_file_category_request([0x22; 16], 5);

    assert_eq!(packet.op_code, OpCode::PARTFILE_SET_CAT);
    let file_tag = packet.find_tag(TagName::PARTFILE).unwrap();
    assert_eq!(file_tag.subtags.len(), 1);
    assert_eq!(file_tag.subtags[0].name, TagName::PARTFILE_CAT);
    assert_eq!(file_tag.subtags[0].value, TagValue::UInt8(5));
}

#[test]
fn test_category_requests() {
    let category = Category {
        id: 0,
        name: "movies".to_string(),
        path: "/data/movies".to_string(),
        comment: "".to_string(),
        color: 0x00FF_8800,
        priority: 1,
    };

    let packet = requests::create_category_request(&category);
    assert_eq!(packet.op_code, OpCode::CREATE_CATEGORY);

    let container = packet.find_tag(TagName::CATEGORY).unwrap();
    assert_eq!(container.value, TagValue::UInt32(0));
    assert_eq!(container.subtags.len(), 5);
    assert_eq!(
        container.subtags[0].value,
        TagValue::String("movies".to_string())
    );

    let packet = requests::update_category_request(7, &category);
    assert_eq!(packet.op_code, OpCode::UPDATE_CATEGORY);
    assert_eq!(
        packet.find_tag(TagName::CATEGORY).unwrap().value,
        TagValue::UInt32(7)
    );

    let packet = requests::delete_category_request(7);
    assert_eq!(packet.op_code, OpCode::DELETE_CATEGORY);
    assert_eq!(
        packet.find_tag(TagName::CATEGORY).unwrap().value,
        TagValue::UInt32(7)
    );
}

#[test]
fn test_server_requests() {
    let packet = requests::server_connect_request(None);
    assert_eq!(packet.op_code, OpCode::SERVER_CONNECT);
    assert!(packet.tags.is_empty());

    let addr = amule_ec::protocol::Ipv4Value {
        addr: std::net::Ipv4Addr::new(176, 103, 48, 36),
        port: 4184,
    };
    let packet = requests::server_connect_request(Some(addr));
    assert_eq!(packet.find_tag(TagName::SERVER).unwrap().as_ipv4(), Some(addr));

    assert_eq!(
        requests::server_disconnect_request().op_code,
        OpCode::SERVER_DISCONNECT
    );
    assert_eq!(
        requests::server_list_request().op_code,
        OpCode::GET_SERVER_LIST
    );
}

#[test]
fn test_add_link_request() {
    let link = "ed2k://|file|name.iso|123456|0123456789ABCDEF0123456789ABCDEF|/";
    let packet = requests::add_link_request(link);

    assert_eq!(packet.op_code, OpCode::ADD_LINK);
    assert_eq!(
        packet.find_tag(TagName::PARTFILE_ED2K_LINK).unwrap().as_str(),
        Some(link)
    );
}

#[test]
fn test_preferences_request_selection() {
    let packet = requests::preferences_request(amule_ec::protocol::prefs::CATEGORIES);

    assert_eq!(packet.op_code, OpCode::GET_PREFERENCES);
    assert_eq!(
        packet.find_tag(TagName::SELECT_PREFS).unwrap().value,
        TagValue::UInt32(0x01)
    );
}
