//! # stockdesk-core: Pure Domain Logic for Stockdesk
//!
//! This crate is the heart of Stockdesk. It contains the record types and the
//! field validators as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockdesk Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal Shell (apps/terminal)              │   │
//! │  │    form fields ──► actions ──► rendered results table       │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ stockdesk-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │   ┌──────────────┐  ┌──────────────┐  ┌──────────────┐     │   │
//! │  │   │    types     │  │  validation  │  │    error     │     │   │
//! │  │   │ StockRecord  │  │  code check  │  │  Validation  │     │   │
//! │  │   │ StockDraft   │  │  qty check   │  │  Error       │     │   │
//! │  │   └──────────────┘  └──────────────┘  └──────────────┘     │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                     │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                stockdesk-db (Database Layer)                │   │
//! │  │             SQLite queries, schema, repository              │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Record types (StockRecord, StockDraft)
//! - [`validation`] - Field format validation
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every validator is deterministic - same input = same output
//! 2. **No I/O**: Database and file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockdesk_core::validation::{validate_code, parse_quantity};
//!
//! // EAN-13 codes pass, anything else is rejected
//! assert!(validate_code("4006381333931").is_ok());
//! assert!(validate_code("12345").is_err());
//!
//! // Quantities are digit strings parsed to i64 at the boundary
//! assert_eq!(parse_quantity("10").unwrap(), 10);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockdesk_core::StockRecord` instead of
// `use stockdesk_core::types::StockRecord`

pub use error::ValidationError;
pub use types::{StockDraft, StockRecord};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Length of a UPC-A product code (12 decimal digits).
pub const UPC_A_LEN: usize = 12;

/// Length of an EAN-13 product code (13 decimal digits).
pub const EAN_13_LEN: usize = 13;

/// Format of the `date_added` timestamp stamped on every create/update.
///
/// ## Why a constant?
/// The store writes it, the round-trip tests parse it, and the shell shows
/// it verbatim. One definition keeps them in agreement.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
