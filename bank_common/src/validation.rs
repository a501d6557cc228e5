//! Input validation shared by the core and the front ends

use crate::errors::AccountingError;

/// **Basic input validation for an account holder's name**
///
/// Checks for:
/// - An empty string (after trimming).
pub fn is_valid_name(holder: &str) -> bool {
    !holder.trim().is_empty()
}

/// Returns the trimmed holder's name, or [`AccountingError::InvalidHolderName`].
pub fn validate_holder_name(holder: &str) -> Result<&str, AccountingError> {
    if is_valid_name(holder) {
        Ok(holder.trim())
    } else {
        Err(AccountingError::InvalidHolderName(holder.to_string()))
    }
}

/// A transaction amount has to be a finite, strictly positive number.
pub fn validate_amount(amount: f64) -> Result<f64, AccountingError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(AccountingError::InvalidAmount(amount))
    }
}

/// An initial deposit may be zero, but not negative.
pub fn validate_initial_deposit(amount: f64) -> Result<f64, AccountingError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(AccountingError::InvalidInitialDeposit(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name_passes() {
        assert!(is_valid_name("Ivan"));
        assert_eq!(Ok("John Doe"), validate_holder_name("  John Doe "));
    }

    #[test]
    fn test_empty_name_fails() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
        assert_eq!(
            Err(AccountingError::InvalidHolderName(" ".to_string())),
            validate_holder_name(" ")
        );
    }

    #[test]
    fn amount_must_be_positive() {
        assert_eq!(Ok(0.01), validate_amount(0.01));
        assert_eq!(Err(AccountingError::InvalidAmount(0.0)), validate_amount(0.0));
        assert_eq!(Err(AccountingError::InvalidAmount(-5.0)), validate_amount(-5.0));
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn initial_deposit_may_be_zero() {
        assert_eq!(Ok(0.0), validate_initial_deposit(0.0));
        assert_eq!(Ok(1000.0), validate_initial_deposit(1000.0));
        assert_eq!(
            Err(AccountingError::InvalidInitialDeposit(-1.0)),
            validate_initial_deposit(-1.0)
        );
    }
}
