//! Error types for SnakeMath calculations

use thiserror::Error;

/// Main error type for SnakeMath calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Input violates a mathematical precondition
    #[error("Domain error: {0}")]
    Domain(String),

    /// Caller supplied an inadmissible combination or malformed value
    #[error("Input error: {0}")]
    Input(String),

    /// Exact integer result does not fit the host integer type
    #[error("Overflow: {operation} exceeds the exact range (limit: {limit})")]
    Overflow {
        /// The operation that overflowed, e.g. `35!`
        operation: String,
        /// Human-readable description of the ceiling
        limit: String,
    },
}

impl MathError {
    /// Build a domain error from anything string-like.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }

    /// Build an input error from anything string-like.
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// Short category name, used by the CLI and in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Domain(_) => "domain",
            Self::Input(_) => "input",
            Self::Overflow { .. } => "overflow",
        }
    }
}

/// Result type alias for SnakeMath calculations
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MathError::domain("hypotenuse must exceed leg").to_string(),
            "Domain error: hypotenuse must exceed leg"
        );
        assert_eq!(
            MathError::input("need two values").to_string(),
            "Input error: need two values"
        );
        let overflow = MathError::Overflow {
            operation: "35!".to_string(),
            limit: "34!".to_string(),
        };
        assert_eq!(
            overflow.to_string(),
            "Overflow: 35! exceeds the exact range (limit: 34!)"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(MathError::domain("x").kind(), "domain");
        assert_eq!(MathError::input("x").kind(), "input");
        let overflow = MathError::Overflow {
            operation: "C(200, 100)".to_string(),
            limit: "u128 max".to_string(),
        };
        assert_eq!(overflow.kind(), "overflow");
    }
}
