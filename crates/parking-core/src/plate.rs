//! Registration plate parity
//!
//! Plate queries classify a registration number by the parity of its
//! last character. For a trailing digit that is the digit's own parity.

/// Vehicle type that plate parity queries are restricted to
pub const MOTOR_TYPE: &str = "Motor";

/// Parity of a registration plate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlateParity {
    Odd,
    Even,
}

impl PlateParity {
    /// Classify a registration number by its last character.
    ///
    /// Returns `None` for an empty registration number.
    #[must_use]
    pub fn of(registration_number: &str) -> Option<Self> {
        let last = registration_number.chars().next_back()?;
        if u32::from(last) % 2 == 0 {
            Some(Self::Even)
        } else {
            Some(Self::Odd)
        }
    }

    /// Whether a registration number has this parity
    #[must_use]
    pub fn matches(self, registration_number: &str) -> bool {
        Self::of(registration_number) == Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_digit_parity() {
        assert_eq!(PlateParity::of("B-1234"), Some(PlateParity::Even));
        assert_eq!(PlateParity::of("B-1235"), Some(PlateParity::Odd));
        assert_eq!(PlateParity::of("0"), Some(PlateParity::Even));
        assert_eq!(PlateParity::of("9"), Some(PlateParity::Odd));
    }

    #[test]
    fn test_trailing_letter_uses_code_point() {
        // 'A' is 65, 'B' is 66
        assert_eq!(PlateParity::of("KA-01-A"), Some(PlateParity::Odd));
        assert_eq!(PlateParity::of("KA-01-B"), Some(PlateParity::Even));
    }

    #[test]
    fn test_empty_has_no_parity() {
        assert_eq!(PlateParity::of(""), None);
        assert!(!PlateParity::Odd.matches(""));
        assert!(!PlateParity::Even.matches(""));
    }
}
