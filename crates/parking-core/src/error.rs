//! Error types for lot operations and command parsing

use thiserror::Error;

/// Result type for lot operations
pub type LotResult<T> = Result<T, LotError>;

/// Errors that can occur while operating on a parking lot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    /// Every slot is occupied
    #[error("Sorry, parking lot is full")]
    Full,

    /// Slot number outside `1..=capacity`
    #[error("Invalid slot number. Please try again.")]
    InvalidSlot { slot: i64, capacity: usize },

    /// A lot must have at least one slot
    #[error("Parking lot capacity must be a positive integer")]
    ZeroCapacity,

    /// Requested capacity above the supported maximum
    #[error("Parking lot capacity {capacity} exceeds the maximum of {max} slots")]
    CapacityTooLarge { capacity: usize, max: usize },

    /// Slot storage could not be allocated
    #[error("Not enough memory for a parking lot with {capacity} slots")]
    OutOfMemory { capacity: usize },

    /// Operation attempted before `create_parking_lot`
    #[error("Parking lot has not been created yet.")]
    NotCreated,
}

impl LotError {
    /// Get the error code for CLI responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Full => "LOT_FULL",
            Self::InvalidSlot { .. } => "INVALID_SLOT",
            Self::ZeroCapacity | Self::CapacityTooLarge { .. } => "VALIDATION_ERROR",
            Self::OutOfMemory { .. } => "OUT_OF_MEMORY",
            Self::NotCreated => "NOT_CREATED",
        }
    }
}

/// Errors produced while parsing a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Command name not recognised (includes blank lines)
    #[error("Invalid command. Please try again.")]
    Unknown(String),

    /// Known command invoked with the wrong arguments
    #[error("Invalid command. Usage: {usage}")]
    Usage { usage: &'static str },
}

impl CommandError {
    /// Get the error code for CLI responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "UNKNOWN_COMMAND",
            Self::Usage { .. } => "USAGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lot_error_messages() {
        assert_eq!(LotError::Full.to_string(), "Sorry, parking lot is full");
        assert_eq!(
            LotError::NotCreated.to_string(),
            "Parking lot has not been created yet."
        );
        assert_eq!(
            LotError::InvalidSlot { slot: -1, capacity: 3 }.to_string(),
            "Invalid slot number. Please try again."
        );
        assert_eq!(
            LotError::CapacityTooLarge { capacity: 5, max: 4 }.to_string(),
            "Parking lot capacity 5 exceeds the maximum of 4 slots"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LotError::Full.code(), "LOT_FULL");
        assert_eq!(LotError::InvalidSlot { slot: 0, capacity: 1 }.code(), "INVALID_SLOT");
        assert_eq!(CommandError::Unknown("fly".into()).code(), "UNKNOWN_COMMAND");
    }

    #[test]
    fn test_usage_message_includes_usage_line() {
        let err = CommandError::Usage {
            usage: "leave [slot_number]",
        };
        assert_eq!(err.to_string(), "Invalid command. Usage: leave [slot_number]");
    }
}
