//! Logger initialisation for the command-line tool

use log::LevelFilter;
use std::env;

/// Initialise the global logger
///
/// Logs at `Info` by default and at `Debug` when `verbose` is set. An explicit
/// `RUST_LOG` overrides both. Calling this more than once keeps the first logger.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
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

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
