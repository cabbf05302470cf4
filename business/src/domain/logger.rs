use crate::domain::product::errors::ErrorReason;

/// Logging port used by the use cases. Infrastructure decides where the
/// messages end up.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    /// Business rejections are expected outcomes, so they go out at warn level.
    fn rejection(&self, operation: &str, subject: &str, reason: ErrorReason) {
        self.warn(&format!(
            "{} rejected for {}: {}",
            operation,
            subject,
            reason.name()
        ));
    }
}
