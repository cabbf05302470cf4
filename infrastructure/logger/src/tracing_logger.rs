use business::domain::logger::Logger;
use business::domain::product::errors::ErrorReason;
use tracing::{debug, error, info, warn};

const TARGET: &str = "warehouse";

/// [`Logger`] backed by `tracing`. All events share the `warehouse` target so
/// they can be filtered with `RUST_LOG=warehouse=debug`.
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

    fn rejection(&self, operation: &str, subject: &str, reason: ErrorReason) {
        warn!(
            target: TARGET,
            operation,
            subject,
            reason = reason.name(),
            "{} rejected",
            operation
        );
    }
}
