// End-to-end tests driving a live server over loopback sockets.

mod common;

use std::thread::sleep;
use std::time::Duration;
use common::*;

#[test]
fn test_cold_connect() {
    let (mut server, stats, address) = start_test_server(2);
    let client = client_socket();

    let response = request_response(&client, address, &build_connect_request(0x7EADBEEF));
    assert_eq!(response.len(), 16);
    assert_eq!(read_u32(&response, 0), 0);
    assert_eq!(read_i32(&response, 4), 0x7EADBEEF);

    // the cookie is bound to this endpoint and key; a second connect from
    // the same socket must produce the same cookie
    let repeat = request_response(&client, address, &build_connect_request(0x7EADBEEF));
    assert_eq!(read_i64(&response, 8), read_i64(&repeat, 8));

    assert_eq!(stats.get_stats().connects, 2);
    server.shutdown();
}

#[test]
fn test_connect_then_announce_single_seed() {
    let (mut server, stats, address) = start_test_server(2);
    let client = client_socket();
    let connection_id = obtain_connection_id(&client, address);

    let announce = build_announce_request(connection_id, 0x2222, [0x01; 20], [0xAA; 20], 0, 2, 50, 6881);
    let response = request_response(&client, address, &announce);
    assert_eq!(response.len(), 20);
    assert_eq!(read_u32(&response, 0), 1);
    assert_eq!(read_i32(&response, 4), 0x2222);
    let interval = read_i32(&response, 8);
    assert!((1680..=1920).contains(&interval), "interval {interval} outside the jitter window");
    assert_eq!(read_i32(&response, 12), 0, "leechers");
    assert_eq!(read_i32(&response, 16), 1, "seeds");

    assert_eq!(stats.get_stats().announces, 1);
    server.shutdown();
}

#[test]
fn test_two_peers_see_each_other() {
    let (mut server, _stats, address) = start_test_server(2);
    let info_hash = [0x33; 20];

    let client_a = client_socket();
    let cookie_a = obtain_connection_id(&client_a, address);
    let announce_a = build_announce_request(cookie_a, 1, info_hash, [0xAA; 20], 1000, 2, 50, 1000);
    let response_a = request_response(&client_a, address, &announce_a);
    assert_eq!(response_a.len(), 20, "first peer should get an empty peer list");

    let client_b = client_socket();
    let cookie_b = obtain_connection_id(&client_b, address);
    let announce_b = build_announce_request(cookie_b, 2, info_hash, [0xBB; 20], 0, 2, 50, 2000);
    let response_b = request_response(&client_b, address, &announce_b);
    assert_eq!(response_b.len(), 26, "second peer should see exactly one peer");
    assert_eq!(read_i32(&response_b, 12), 1, "leechers");
    assert_eq!(read_i32(&response_b, 16), 1, "seeds");
    // peer A announced from loopback with port field 1000
    assert_eq!(&response_b[20..26], &[127, 0, 0, 1, 0x03, 0xE8]);

    server.shutdown();
}

#[test]
fn test_scrape_counts() {
    // one worker, so announce and scrape sharding agree on the owner
    let (mut server, stats, address) = start_test_server(1);
    let info_hash = [0x44; 20];
    let client = client_socket();
    let connection_id = obtain_connection_id(&client, address);

    let seed = build_announce_request(connection_id, 1, info_hash, [0xAA; 20], 0, 2, 50, 6881);
    request_response(&client, address, &seed);
    let leecher = build_announce_request(connection_id, 2, info_hash, [0xBB; 20], 500, 2, 50, 6882);
    request_response(&client, address, &leecher);

    let response = request_response(&client, address, &build_scrape_request(connection_id, 3, info_hash));
    assert_eq!(response.len(), 20);
    assert_eq!(read_u32(&response, 0), 2);
    assert_eq!(read_i32(&response, 4), 3);
    assert_eq!(read_i32(&response, 8), 1, "seeds");
    assert_eq!(read_i32(&response, 12), 0, "completed");
    assert_eq!(read_i32(&response, 16), 1, "leechers");

    // scraping a torrent nobody announced yields zeros, not an error
    let response = request_response(&client, address, &build_scrape_request(connection_id, 4, [0x55; 20]));
    assert_eq!(read_i32(&response, 8), 0);
    assert_eq!(read_i32(&response, 12), 0);
    assert_eq!(read_i32(&response, 16), 0);

    assert_eq!(stats.get_stats().scrapes, 2);
    server.shutdown();
}

#[test]
fn test_bad_cookie_gets_silence() {
    let (mut server, stats, address) = start_test_server(2);
    let client = client_socket();

    let announce = build_announce_request(0xBAD, 1, [0x66; 20], [0xAA; 20], 0, 2, 50, 6881);
    expect_no_response(&client, address, &announce);
    assert_eq!(stats.get_stats().errors, 1);
    assert_eq!(stats.get_stats().announces, 0);

    server.shutdown();
}

#[test]
fn test_bad_connect_magic_gets_silence() {
    let (mut server, stats, address) = start_test_server(2);
    let client = client_socket();

    let mut request = build_connect_request(1);
    request[0] = 0xFF;
    expect_no_response(&client, address, &request);
    assert_eq!(stats.get_stats().errors, 1);
    assert_eq!(stats.get_stats().connects, 0);

    server.shutdown();
}

#[test]
fn test_undersized_announce_gets_silence() {
    let (mut server, stats, address) = start_test_server(2);
    let client = client_socket();
    let connection_id = obtain_connection_id(&client, address);

    let mut announce = build_announce_request(connection_id, 1, [0x77; 20], [0xAA; 20], 0, 2, 50, 6881);
    announce.truncate(97);
    expect_no_response(&client, address, &announce);
    assert_eq!(stats.get_stats().errors, 1);

    server.shutdown();
}

#[test]
fn test_unknown_action_gets_silence() {
    let (mut server, stats, address) = start_test_server(2);
    let client = client_socket();

    let mut request = build_connect_request(1);
    request[11] = 7;
    expect_no_response(&client, address, &request);
    assert_eq!(stats.get_stats().errors, 1);

    server.shutdown();
}

#[test]
fn test_short_datagram_is_dropped_without_error() {
    let (mut server, stats, address) = start_test_server(2);
    let client = client_socket();

    expect_no_response(&client, address, &[0u8; 15]);
    sleep(Duration::from_millis(100));
    let snapshot = stats.get_stats();
    assert_eq!(snapshot.errors, 0);
    assert_eq!(snapshot.bytes_in, 15);

    server.shutdown();
}

#[test]
fn test_bytes_counters_move() {
    let (mut server, stats, address) = start_test_server(2);
    let client = client_socket();

    request_response(&client, address, &build_connect_request(5));
    // the byte counter is charged right after the flush that carried the
    // response; give the receive thread a moment to get there
    sleep(Duration::from_millis(100));
    let snapshot = stats.get_stats();
    assert_eq!(snapshot.bytes_in, 16);
    assert_eq!(snapshot.bytes_out, 16);

    server.shutdown();
}
