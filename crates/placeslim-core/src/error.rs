// crates/placeslim-core/src/error.rs
use thiserror::Error;

/// Errors that stop a slimming run.
///
/// Per-record problems (bad coordinates, odd container shapes) are never
/// reported here; they are counted or skipped by the projector.
#[derive(Debug, Error)]
pub enum SlimError {
    /// The input artifact does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The extracted payload is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed, but does not have the expected shape.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, SlimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_keep_line_and_column() {
        let err: SlimError = serde_json::from_str::<serde_json::Value>("{\"a\": }")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.starts_with("JSON parse error"), "{msg}");
        assert!(msg.contains("line 1 column"), "{msg}");
    }
}
