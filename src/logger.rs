//! Logging setup for the quaternions binaries
//!
//! The library itself only emits `tracing` events (zero-axis construction,
//! non-invertible quaternions, rejected builder parameters at DEBUG level).
//! Binaries call [`init_logger`] once to print them.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

/// Initialize the tracing subscriber with a default level of INFO.
///
/// # Example
/// ```no_run
/// use quaternions::init_logger;
///
/// init_logger();
/// tracing::info!("Application started");
/// ```
///
/// # Environment Variables
/// `RUST_LOG` overrides the default level:
/// ```bash
/// RUST_LOG=quaternions=debug cargo run --bin quaternion_demo
/// ```
pub fn init_logger() -> bool {
    init_logger_with_level(Level::INFO)
}

/// Initialize the tracing subscriber with a custom default level.
///
/// Returns `false` if a global subscriber was already installed, in which case
/// the existing one is left in place.
pub fn init_logger_with_level(default_level: Level) -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(SystemTime)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .try_init()
        .is_ok()
}
