pub mod worker_request;
