use crate::types::DbId;

/// Domain-level error type shared across crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by ID came up empty.
    #[error("{entity} with id {id} not found")]
    NotFound {
        entity: &'static str,
        id: DbId,
    },

    /// Input failed a domain validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The portfolio document could not be read from disk.
    #[error("Failed to read portfolio data: {0}")]
    Io(#[from] std::io::Error),

    /// The portfolio document could not be parsed.
    #[error("Failed to parse portfolio data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}
