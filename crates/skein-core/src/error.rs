use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Planning error: {0}")]
    Plan(String),

    // Higher layers (optimizer, physical translation) map their own failures
    // into this variant when no finer classification exists.
    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}
