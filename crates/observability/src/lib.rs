//! Process-wide logging setup shared by the engine's binaries.

pub mod tracing;

pub use self::tracing::{LOG_FORMAT_ENV, LogFormat, UnknownLogFormat};

/// Initialize logging from the environment.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    self::tracing::init();
}
