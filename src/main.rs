use std::process::exit;
use std::sync::mpsc;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use swarmtrack::config::structs::configuration::Configuration;
use swarmtrack::logging::setup_logging;
use swarmtrack::stats::structs::stats_atomics::StatsAtomics;
use swarmtrack::structs::Cli;
use swarmtrack::udp::udp::udp_service;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let stats = Arc::new(StatsAtomics::new());
    let mut udp_server = udp_service(config.clone(), stats.clone());

    let (shutdown_send, shutdown_recv) = mpsc::channel();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = shutdown_send.send(());
    }) {
        error!("Could not install the shutdown handler: {e}");
        exit(1);
    }

    let console_log_interval = config.log_console_interval;
    loop {
        match shutdown_recv.recv_timeout(Duration::from_secs(console_log_interval)) {
            Err(RecvTimeoutError::Timeout) => {
                let snapshot = stats.get_stats();
                info!("[STATS] Connects: {} - Announces: {} - Scrapes: {} - Errors: {} - Dropped: {}",
                    snapshot.connects, snapshot.announces, snapshot.scrapes, snapshot.errors, snapshot.dropped_announces);
                info!("[STATS] Bytes IN: {} - Bytes OUT: {}", snapshot.bytes_in, snapshot.bytes_out);
            }
            Ok(_) | Err(RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    info!("Shutdown request received, shutting down...");
    udp_server.shutdown();
    info!("Server shutting down completed");
    Ok(())
}
