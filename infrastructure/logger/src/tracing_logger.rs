use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] backed by the global `tracing` subscriber.
///
/// Every event carries the `catalog` target so business messages can be
/// filtered apart from sqlx and poem output (`RUST_LOG=catalog=debug`).
pub struct TracingLogger;

const TARGET: &str = "catalog";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
