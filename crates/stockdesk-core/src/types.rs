//! # Record Types
//!
//! The record types shared by the store and the form controller.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Record Types                                │
//! │                                                                     │
//! │  ┌──────────────────────┐        ┌──────────────────────┐          │
//! │  │     StockRecord      │        │      StockDraft      │          │
//! │  │  ──────────────────  │        │  ──────────────────  │          │
//! │  │  id (store-assigned) │  ◄───  │  product             │          │
//! │  │  product             │ insert │  description         │          │
//! │  │  description         │ update │  quantity            │          │
//! │  │  quantity            │        │  code                │          │
//! │  │  code                │        └──────────────────────┘          │
//! │  │  date_added          │                                           │
//! │  └──────────────────────┘                                           │
//! │                                                                     │
//! │  A draft is "record minus id minus date_added": the store assigns   │
//! │  the id once and stamps date_added on every write.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Stock Record
// =============================================================================

/// A stock item row as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StockRecord {
    /// Store-assigned identifier. Assigned once, never reused or changed.
    pub id: i64,

    /// Product name.
    pub product: String,

    /// Free-form description.
    pub description: String,

    /// Units on hand. Non-negative; validated as a digit string at the
    /// form boundary before parsing.
    pub quantity: i64,

    /// EAN-13 or UPC-A product code (12 or 13 decimal digits).
    pub code: String,

    /// Local timestamp of the last create/update, formatted
    /// [`crate::TIMESTAMP_FORMAT`].
    pub date_added: String,
}

impl StockRecord {
    /// Checks whether `term` occurs as a substring of any field's text
    /// rendering (the definition the store's search implements in SQL).
    ///
    /// Letters fold case ASCII-only, matching SQLite's default `LIKE`
    /// behavior. The empty term matches every record.
    ///
    /// ## Example
    /// ```rust
    /// # use stockdesk_core::StockRecord;
    /// let record = StockRecord {
    ///     id: 1,
    ///     product: "Widget".to_string(),
    ///     description: "Small widget".to_string(),
    ///     quantity: 10,
    ///     code: "123456789012".to_string(),
    ///     date_added: "2024-05-01 09:30:00".to_string(),
    /// };
    /// assert!(record.contains_term("widg"));
    /// assert!(record.contains_term("10"));
    /// assert!(!record.contains_term("gadget"));
    /// ```
    pub fn contains_term(&self, term: &str) -> bool {
        let term = term.to_ascii_lowercase();
        self.product.to_ascii_lowercase().contains(&term)
            || self.description.to_ascii_lowercase().contains(&term)
            || self.quantity.to_string().contains(&term)
            || self.code.contains(&term)
            || self.date_added.contains(&term)
    }
}

// =============================================================================
// Stock Draft
// =============================================================================

/// The user-entered fields of a record, before the store assigns an id and
/// stamps the timestamp.
///
/// Built by the form controller only after every field has passed
/// validation, so a draft in flight is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDraft {
    pub product: String,
    pub description: String,
    pub quantity: i64,
    pub code: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> StockRecord {
        StockRecord {
            id: 7,
            product: "Widget".to_string(),
            description: "Small widget".to_string(),
            quantity: 10,
            code: "123456789012".to_string(),
            date_added: "2024-05-01 09:30:00".to_string(),
        }
    }

    #[test]
    fn test_contains_term_matches_each_field() {
        let record = sample_record();

        assert!(record.contains_term("Widget"));
        assert!(record.contains_term("Small"));
        assert!(record.contains_term("10"));
        assert!(record.contains_term("6789"));
        assert!(record.contains_term("2024-05"));
    }

    #[test]
    fn test_contains_term_is_case_insensitive() {
        // SQLite LIKE is case-insensitive for ASCII; the predicate agrees.
        let record = sample_record();
        assert!(record.contains_term("widget"));
        assert!(record.contains_term("WIDGET"));
        assert!(record.contains_term("small WIDGET"));
    }

    #[test]
    fn test_contains_term_empty_matches_all() {
        assert!(sample_record().contains_term(""));
    }

    #[test]
    fn test_contains_term_rejects_non_substring() {
        let record = sample_record();
        assert!(!record.contains_term("gadget"));
        assert!(!record.contains_term("999999"));
    }

    #[test]
    fn test_record_serializes_with_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["product"], "Widget");
        assert_eq!(json["quantity"], 10);
        assert_eq!(json["code"], "123456789012");
        assert_eq!(json["date_added"], "2024-05-01 09:30:00");
    }

    #[test]
    fn test_draft_round_trips_through_json() {
        let draft = StockDraft {
            product: "Widget".to_string(),
            description: "Small widget".to_string(),
            quantity: 10,
            code: "123456789012".to_string(),
        };

        let json = serde_json::to_string(&draft).unwrap();
        let back: StockDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
