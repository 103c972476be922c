//! Engine error taxonomy.
//!
//! Every recoverable engine failure is one of three kinds, and the CLI maps
//! each kind to a stable error code in the `--json` envelope. Operations
//! validate fully before mutating either store, so an `Err` never leaves a
//! collection half-updated.

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("version not found: {0}")]
    VersionNotFound(u64),
    #[error("item not found: {0}")]
    ItemNotFound(u64),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("item {id} is attached to {count} version(s)")]
    ItemInUse { id: u64, count: usize },
}

impl EngineError {
    /// Stable code surfaced in JSON error output.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::VersionNotFound(_) | EngineError::ItemNotFound(_) => "NOT_FOUND",
            EngineError::MissingField(_) => "VALIDATION",
            EngineError::ItemInUse { .. } => "IN_USE",
        }
    }
}
