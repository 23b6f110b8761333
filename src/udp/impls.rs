pub mod announce_request;
pub mod announce_response;
pub mod announce_worker;
pub mod connect_response;
pub mod packet_buffer;
pub mod packet_socket;
pub mod recv_batch;
pub mod request_header;
pub mod scrape_request;
pub mod scrape_response;
pub mod udp_server;
