//! Error types for the allocation engine.

use thiserror::Error;

/// Result type for allocation operations.
pub type PickResult<T> = Result<T, PickError>;

/// Errors that can occur while shuffling, drawing, or allocating.
///
/// Every check runs before any randomness is consumed, so a failed call
/// leaves the random source untouched and produces no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    /// A required list was empty or a team size was zero.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PickError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = PickError::invalid("no topics");
        assert_eq!(err.to_string(), "invalid input: no topics");
    }
}
