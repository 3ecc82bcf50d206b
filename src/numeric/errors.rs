// ============================================================================
// Calculation Errors
// Error types shared by all calculation engines
// ============================================================================

use std::fmt;

/// Errors that can occur during a calculation.
///
/// Every error is local to a single calculation and recoverable: the caller
/// can re-prompt for input and try again. Nothing here is fatal to a host
/// process.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Requested unit does not belong to the stated measurement category
    UnitMismatch {
        unit: &'static str,
        category: &'static str,
    },
    /// A character in the numeral is not a digit of the requested radix
    InvalidDigit { digit: char, base: u32 },
    /// The numeral string is empty
    EmptyNumeral,
    /// Parsed value does not fit a signed 32-bit integer
    MagnitudeOverflow,
    /// Input value failed validation
    InvalidInput(&'static str),
    /// Currency code is missing from the rate table
    UnknownCurrency(String),
    /// Payoff simulation hit the iteration cap with balance outstanding
    NonConvergentPayoff {
        months_simulated: u32,
        remaining_balance: f64,
    },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::UnitMismatch { unit, category } => {
                write!(f, "unit '{}' does not belong to category '{}'", unit, category)
            },
            CalcError::InvalidDigit { digit, base } => {
                write!(f, "'{}' is not a valid base-{} digit", digit, base)
            },
            CalcError::EmptyNumeral => write!(f, "empty numeral string"),
            CalcError::MagnitudeOverflow => {
                write!(f, "value does not fit a signed 32-bit integer")
            },
            CalcError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            CalcError::UnknownCurrency(code) => {
                write!(f, "no exchange rate for currency '{}'", code)
            },
            CalcError::NonConvergentPayoff {
                months_simulated,
                remaining_balance,
            } => write!(
                f,
                "balance of {:.2} still outstanding after {} months: payment never overtakes interest",
                remaining_balance, months_simulated
            ),
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculation operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CalcError::UnitMismatch {
                unit: "mi",
                category: "mass"
            }
            .to_string(),
            "unit 'mi' does not belong to category 'mass'"
        );
        assert_eq!(
            CalcError::InvalidDigit { digit: 'G', base: 16 }.to_string(),
            "'G' is not a valid base-16 digit"
        );
        assert_eq!(CalcError::EmptyNumeral.to_string(), "empty numeral string");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CalcError::EmptyNumeral, CalcError::EmptyNumeral);
        assert_ne!(
            CalcError::EmptyNumeral,
            CalcError::UnknownCurrency("EUR".to_string())
        );
    }
}
