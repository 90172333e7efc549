// src/logging.rs
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber. `log` records from the library crates are
/// bridged into it.
///
/// The filter comes only from the CLI level; the environment is not consulted.
pub fn init(level: log::LevelFilter) {
    let filter = EnvFilter::new(level.as_str().to_ascii_lowercase());

    // A second call (tests that drive `main` logic twice) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
