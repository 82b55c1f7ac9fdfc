//! # Validation Module
//!
//! Field format validation for Stockdesk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Form controller (apps/terminal)                           │
//! │  ├── THIS MODULE: field format checks, in fixed order               │
//! │  └── First failure reported, form values kept                       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Database (SQLite)                                         │
//! │  └── NOT NULL constraints                                           │
//! │                                                                     │
//! │  The form is the only writer, so a row that reaches the store       │
//! │  has already passed every check here.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use stockdesk_core::validation::{validate_code, parse_quantity};
//!
//! // Validate the EAN/UPC code before any store write
//! validate_code("4006381333931").unwrap();
//!
//! // Validate and parse the quantity field in one step
//! let quantity = parse_quantity("10").unwrap();
//! ```

use crate::error::ValidationError;
use crate::{EAN_13_LEN, UPC_A_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an EAN/UPC product code.
///
/// ## Rules
/// - Exactly 12 (UPC-A) or 13 (EAN-13) characters
/// - Every character an ASCII decimal digit
/// - Anchored: no surrounding characters, no trimming, so " 123456789012"
///   fails exactly as it would against `^\d{12,13}$`
///
/// ## Example
/// ```rust
/// use stockdesk_core::validation::validate_code;
///
/// assert!(validate_code("123456789012").is_ok());  // UPC-A
/// assert!(validate_code("4006381333931").is_ok()); // EAN-13
/// assert!(validate_code("12345").is_err());
/// assert!(validate_code("12345678901a").is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let len = code.len();

    if len != UPC_A_LEN && len != EAN_13_LEN {
        return Err(ValidationError::InvalidCode);
    }

    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidCode);
    }

    Ok(())
}

/// Validates a quantity field as entered in the form.
///
/// ## Rules
/// - Non-empty
/// - Every character an ASCII decimal digit
/// - Rejects signs, decimal points, and whitespace, so "-1", "1.5" and
///   " 3" all fail
///
/// Non-negativity falls out of the rules: a digit string cannot carry a
/// sign.
pub fn validate_quantity(quantity: &str) -> ValidationResult<()> {
    if quantity.is_empty() {
        return Err(ValidationError::InvalidQuantity);
    }

    if !quantity.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidQuantity);
    }

    Ok(())
}

/// Validates a quantity field and parses it to an `i64`.
///
/// A digit string larger than `i64::MAX` is rejected as
/// [`ValidationError::InvalidQuantity`] rather than wrapping or panicking:
/// the store column is a 64-bit integer, so the boundary enforces the
/// column's range.
///
/// ## Example
/// ```rust
/// use stockdesk_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("0").unwrap(), 0);
/// assert_eq!(parse_quantity("10").unwrap(), 10);
/// assert!(parse_quantity("ten").is_err());
/// assert!(parse_quantity("99999999999999999999").is_err()); // > i64::MAX
/// ```
pub fn parse_quantity(quantity: &str) -> ValidationResult<i64> {
    validate_quantity(quantity)?;

    quantity
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidQuantity)
}

/// Validates that a required text field is non-empty.
///
/// ## Rules
/// - Must contain at least one non-whitespace character
///
/// `field` names the offending field in the error message shown to the
/// user.
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_code_accepts_12_and_13_digits() {
        assert!(validate_code("123456789012").is_ok());
        assert!(validate_code("036000291452").is_ok());
        assert!(validate_code("1234567890123").is_ok());
        assert!(validate_code("4006381333931").is_ok());
    }

    #[test]
    fn test_validate_code_rejects_wrong_length() {
        assert!(validate_code("").is_err());
        assert!(validate_code("1").is_err());
        assert!(validate_code("12345").is_err());
        assert!(validate_code("12345678901").is_err()); // 11 digits
        assert!(validate_code("12345678901234").is_err()); // 14 digits
    }

    #[test]
    fn test_validate_code_rejects_non_digits() {
        assert!(validate_code("12345678901a").is_err());
        assert!(validate_code("1234567890 2").is_err());
        assert!(validate_code("-23456789012").is_err());
        assert!(validate_code("１２３４５６７８９０１２").is_err()); // fullwidth digits
    }

    #[test]
    fn test_validate_code_is_anchored() {
        // Surrounding characters fail; there is no trimming.
        assert!(validate_code(" 123456789012").is_err());
        assert!(validate_code("123456789012 ").is_err());
        assert!(validate_code("a123456789012").is_err());
    }

    #[test]
    fn test_validate_quantity_accepts_digit_strings() {
        assert!(validate_quantity("0").is_ok());
        assert!(validate_quantity("10").is_ok());
        assert!(validate_quantity("007").is_ok());
        assert!(validate_quantity("999999").is_ok());
    }

    #[test]
    fn test_validate_quantity_rejects_non_digit_strings() {
        assert!(validate_quantity("").is_err());
        assert!(validate_quantity("-1").is_err());
        assert!(validate_quantity("+1").is_err());
        assert!(validate_quantity("1.5").is_err());
        assert!(validate_quantity(" 3").is_err());
        assert!(validate_quantity("3 ").is_err());
        assert!(validate_quantity("ten").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("42").unwrap(), 42);
        assert_eq!(parse_quantity("007").unwrap(), 7);

        assert_eq!(parse_quantity("4x").unwrap_err(), ValidationError::InvalidQuantity);
    }

    #[test]
    fn test_parse_quantity_rejects_overflow() {
        // 20 digits: passes the format check, exceeds i64::MAX
        assert_eq!(
            parse_quantity("99999999999999999999").unwrap_err(),
            ValidationError::InvalidQuantity
        );

        // Largest representable value still parses
        assert_eq!(parse_quantity("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("product", "Widget").is_ok());
        assert!(validate_required("product", " x ").is_ok());

        assert_eq!(
            validate_required("product", "").unwrap_err(),
            ValidationError::MissingField { field: "product" }
        );
        assert_eq!(
            validate_required("description", "   ").unwrap_err(),
            ValidationError::MissingField { field: "description" }
        );
    }
}
