//! Optional diagnostic logging.
//!
//! The library only emits `tracing` events. Nothing is printed until the host
//! installs a subscriber, usually through `rp_logging_init`.

use tracing_subscriber::filter::LevelFilter;

/// Map a numeric verbosity (0 = off .. 5 = trace) to a level filter.
pub fn level_from_verbosity(verbosity: u32) -> Option<LevelFilter> {
    match verbosity {
        0 => Some(LevelFilter::OFF),
        1 => Some(LevelFilter::ERROR),
        2 => Some(LevelFilter::WARN),
        3 => Some(LevelFilter::INFO),
        4 => Some(LevelFilter::DEBUG),
        5 => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// Install a stderr subscriber at `level`.
///
/// Returns false if a global subscriber was already set, in which case the
/// existing one is kept.
pub fn init_logging(level: LevelFilter) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
