use thiserror::Error;

/// Unified error type for the entire finance-os-core library.
///
/// Query functions never fail; only store mutations and persistence
/// return `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage / File ──────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: String, id: u64 },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl CoreError {
    pub(crate) fn not_found(kind: &str, id: u64) -> Self {
        CoreError::RecordNotFound {
            kind: kind.to_string(),
            id,
        }
    }
}
