//! FFI functions for diagnostic logging.

use super::types::RpStatus;
use crate::logging::{init_logging, level_from_verbosity};

/// Install a stderr log subscriber.
///
/// `verbosity` runs from 0 (off) to 5 (trace). Only the first successful
/// call takes effect; later calls return `Ok` without changing anything.
#[no_mangle]
pub extern "C" fn rp_logging_init(verbosity: u32) -> RpStatus {
    let Some(level) = level_from_verbosity(verbosity) else {
        return RpStatus::InvalidArgument;
    };

    if !init_logging(level) {
        tracing::debug!(verbosity, "log subscriber already installed");
    }
    RpStatus::Ok
}
