#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input failed a domain rule. The message is safe to show to clients.
    #[error("{0}")]
    Validation(String),
}
