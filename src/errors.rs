/// Domain-specific error types for the evaluation engine.
///
/// Three categories with distinct propagation rules:
/// - `Validation` always surfaces to the caller (fail fast)
/// - `Computation` is caught at the pricing boundary and either converted to
///   `Validation` (caller-supplied inputs) or replaced by a documented default
/// - `Data` never aborts a request; the affected entry degrades to a neutral
///   fallback and a warning is logged
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("computation error: {0}")]
    Computation(String),

    #[error("data error: {0}")]
    Data(String),
}

impl EngineError {
    /// Stable category tag for the structured failure payload.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Computation(_) => "computation",
            Self::Data(_) => "data",
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Computation(m) | Self::Data(m) => m,
        }
    }
}

/// Structured failure payload handed to result consumers.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ErrorPayload {
    pub category: &'static str,
    pub message: String,
}

impl From<&EngineError> for ErrorPayload {
    fn from(e: &EngineError) -> Self {
        Self {
            category: e.category(),
            message: e.message().to_string(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_carries_category_and_message() {
        let err = EngineError::Validation("expiry must be in the future".into());
        let payload = ErrorPayload::from(&err);
        assert_eq!(payload.category, "validation");
        assert_eq!(payload.message, "expiry must be in the future");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], "validation");
    }
}
