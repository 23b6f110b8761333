pub mod announce_interval;
pub mod announce_request;
pub mod announce_response;
pub mod announce_worker;
pub mod connect_response;
pub mod connection_id;
pub mod number_of_downloads;
pub mod number_of_peers;
pub mod packet_buffer;
pub mod packet_socket;
pub mod peer_key;
pub mod port;
pub mod recv_batch;
pub mod request_header;
pub mod scrape_request;
pub mod scrape_response;
pub mod torrent_scrape_statistics;
pub mod tracker_message;
pub mod transaction_id;
pub mod udp_server;
pub mod worker_queue;
