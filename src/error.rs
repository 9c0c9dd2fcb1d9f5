// ⚠️ Errors - the only failure the parse pipeline reports
// Extraction passes never fail; absence of a match is just `None`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CleaverError {
    /// The full pipeline ran but the result failed the success check.
    /// Carries the untouched input for diagnostics.
    #[error("couldn't parse name: {raw}")]
    UnparseableName { raw: String },
}

impl CleaverError {
    pub fn unparseable(raw: impl Into<String>) -> Self {
        CleaverError::UnparseableName { raw: raw.into() }
    }

    /// Original input that failed to parse
    pub fn raw(&self) -> &str {
        match self {
            CleaverError::UnparseableName { raw } => raw,
        }
    }
}

pub type CleaverResult<T> = Result<T, CleaverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_includes_raw_input() {
        let err = CleaverError::unparseable("mr & mrs");
        assert_eq!(err.to_string(), "couldn't parse name: mr & mrs");
        assert_eq!(err.raw(), "mr & mrs");
    }
}
