/// Diagnostic channel used by the application layer. Every provider failure
/// is reported here before it is handed back to the caller.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
