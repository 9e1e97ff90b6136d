//! Logging setup
//!
//! The pipeline reports through the `log` macros; hosts pick the backend.
//! These helpers install `env_logger` for binaries and tests.

pub use log::{debug, info, warn, error, trace};

/// Install `env_logger`, filtered by `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging for unit tests
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
