use std::thread;
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, warn, LevelFilter};
use crate::config::structs::configuration::Configuration;

/// Builds the fern dispatcher for the tracker.
///
/// Every thread in the pipeline is named (receive, announce-N,
/// key-rotator), so the thread name is part of the line format; that is
/// usually the fastest way to tell which side of a queue a message came
/// from. An unknown level string falls back to info rather than refusing
/// to start.
pub fn setup_logging(config: &Configuration)
{
    let level = config.log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::Cyan)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            let current = thread::current();
            out.finish(format_args!(
                "{} {:5} ({}) {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                colors.color(record.level()),
                current.name().unwrap_or("?"),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Err(e) = dispatch.apply() {
        eprintln!("logging dispatcher already installed: {e}");
        return;
    }
    if config.log_level.parse::<LevelFilter>().is_err() {
        warn!("unknown log_level '{}' in config.toml, using info", config.log_level);
    }
    info!("[LOG] dispatcher ready at level {level}");
}
