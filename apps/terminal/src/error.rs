//! # Application Error Type
//!
//! Unified error type for the terminal shell.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Error Flow in Stockdesk                           │
//! │                                                                         │
//! │  Shell Loop                     Layers Below                            │
//! │  ──────────                     ────────────                            │
//! │                                                                         │
//! │  dispatch(command)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │  FormController                                                  │   │
//! │  │  Result<T, AppError>                                             │   │
//! │  │         │                                                        │   │
//! │  │         ▼                                                        │   │
//! │  │  Field invalid? ──── ValidationError ──────────┐                 │   │
//! │  │         │                                      │                 │   │
//! │  │         ▼                                      ▼                 │   │
//! │  │  Nothing selected? ── MissingSelection ───── AppError ──────────►│   │
//! │  │         │                                      ▲                 │   │
//! │  │         ▼                                      │                 │   │
//! │  │  Store failed? ────── DbError ─────────────────┘                 │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  The shell prints the error as a one-line notification and keeps        │
//! │  running; nothing here aborts the session.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use stockdesk_core::ValidationError;
use stockdesk_db::DbError;

/// Errors surfaced to the user by the terminal shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// A field failed validation; the form is left untouched.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Update or delete was requested with no row selected.
    #[error("no row is selected (use 'select <id>' first)")]
    MissingSelection,

    /// Select referenced an id that is not among the displayed rows.
    #[error("no displayed row has id {id}")]
    NoSuchRow { id: i64 },

    /// Storage failure from the database layer.
    #[error("database error: {0}")]
    Db(#[from] DbError),

    /// The platform app-data directory could not be determined.
    #[error("could not determine the application data directory")]
    DataDir,

    /// Terminal or filesystem I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_remedy() {
        assert_eq!(
            AppError::MissingSelection.to_string(),
            "no row is selected (use 'select <id>' first)"
        );
        assert_eq!(
            AppError::NoSuchRow { id: 7 }.to_string(),
            "no displayed row has id 7"
        );
    }

    #[test]
    fn test_validation_errors_convert() {
        let err: AppError = ValidationError::InvalidCode.into();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().starts_with("validation error:"));
    }
}
