/// Logging port used by the application layer.
///
/// Kept as a trait so use cases can be tested with a silent mock while the
/// binary plugs in the tracing-backed adapter.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
