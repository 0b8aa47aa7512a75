//! Error types for Bloomcard

use thiserror::Error;

/// Main error type for Bloomcard operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Share token could not be decoded back into a configuration
    #[error("Invalid share token: {0}")]
    InvalidToken(String),

    /// Error during serialization of a configuration
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Color string is not a `#rrggbb` value
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Flower tag is not one of the known kinds
    #[error("Unknown flower kind: {0}")]
    UnknownFlower(String),

    /// Placement bounds are inverted
    #[error("Invalid placement range: min {min} > max {max}")]
    InvalidRange { min: i32, max: i32 },
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::UnknownFlower("daisy".to_string());
        assert_eq!(format!("{}", err), "Unknown flower kind: daisy");
    }

    #[test]
    fn test_range_error_display() {
        let err = CardError::InvalidRange { min: 50, max: 10 };
        assert_eq!(
            format!("{}", err),
            "Invalid placement range: min 50 > max 10"
        );
    }
}
