//! # Error Types
//!
//! Validation error types for stockdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  stockdesk-core errors (this file)                                  │
//! │  └── ValidationError  - Field format/emptiness failures             │
//! │                                                                     │
//! │  stockdesk-db errors (separate crate)                               │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  Terminal app errors (in app)                                       │
//! │  └── AppError         - What the user sees (rendered)               │
//! │                                                                     │
//! │  Flow: ValidationError ──► AppError ──► shell notification          │
//! │        DbError ────────────┘                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to a user-facing message naming the failing field

use thiserror::Error;

/// Input validation errors.
///
/// Each variant is field-specific: the shell shows the message as a blocking
/// notification and the form keeps its current values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// EAN/UPC code is not exactly 12 or 13 decimal digits.
    #[error("invalid EAN/UPC code: must be exactly 12 or 13 digits")]
    InvalidCode,

    /// Quantity is not a non-negative whole number.
    ///
    /// ## When This Occurs
    /// - Empty string, sign, decimal point, whitespace, non-digit
    /// - A digit string too large to fit in an i64
    #[error("invalid quantity: must be a non-negative whole number")]
    InvalidQuantity,

    /// A required field is missing or empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },
}

// =============================================================================
// Unit Tests
// =============================================================================
