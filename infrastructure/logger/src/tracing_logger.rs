use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target every EcoCart event is emitted under.
pub const TARGET: &str = "ecocart";

/// `Logger` adapter that forwards to `tracing` under [`TARGET`].
pub struct TracingLogger;

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
