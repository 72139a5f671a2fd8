//! Logger setup for the CLI
//!
//! The library only emits `log` records; the binary decides where they go.

use log::LevelFilter;
use std::env;

/// Environment variable that turns on debug logging when set to anything but `0`/`false`
pub const DEBUG_ENV: &str = "CROSSWORD_DEBUG";

/// Whether [`DEBUG_ENV`] asks for debug output
#[must_use]
pub fn debug_requested() -> bool {
    env::var(DEBUG_ENV).is_ok_and(|value| !matches!(value.trim(), "" | "0" | "false"))
}

/// Initialize logging for the CLI
///
/// Logs at `Debug` when `debug_enabled`, `Info` otherwise. `RUST_LOG` overrides
/// both when set. Calling this twice keeps the first logger.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
