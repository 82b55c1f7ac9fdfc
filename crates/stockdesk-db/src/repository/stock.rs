//! # Stock Repository
//!
//! Database operations for stock records.
//!
//! ## Key Operations
//! - Insert / update / delete by id
//! - Substring search across every visible column
//! - Full listing in insertion order
//!
//! ## LIKE Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Substring Search Works                           │
//! │                                                                         │
//! │  User types: "lap"                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LIKE '%lap%' against: product, description, quantity, code,            │
//! │                        date_added                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌────────────────────────────────────────────┐                         │
//! │  │ stock                                      │                         │
//! │  │                                            │                         │
//! │  │ Laptop   | 14-inch ultrabook | 4 | 4006…  │ ← MATCH!                │
//! │  │ Lapboard | Lap desk, beech   | 9 | 0123…  │ ← MATCH!                │
//! │  │ Monitor  | 27-inch IPS       | 7 | 4006…  │                         │
//! │  └────────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results: [Laptop, Lapboard]                                            │
//! │                                                                         │
//! │  A LIKE scan is plenty for a single-operator table of this size;        │
//! │  an empty term degenerates to '%%', which matches every row.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Local;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockdesk_core::{StockDraft, StockRecord, TIMESTAMP_FORMAT};

/// Repository for stock record database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = StockRepository::new(pool);
///
/// // Add a record
/// let record = repo.insert(&draft).await?;
///
/// // Search records
/// let results = repo.search("laptop").await?;
/// ```
#[derive(Debug, Clone)]
pub struct StockRepository {
    pool: SqlitePool,
}

impl StockRepository {
    /// Creates a new StockRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StockRepository { pool }
    }

    /// Inserts a new stock record.
    ///
    /// The database assigns the id, and `date_added` is stamped with the
    /// current local time. Callers are expected to have validated the draft
    /// already; the repository stores whatever it is given.
    ///
    /// ## Arguments
    /// * `draft` - Field values for the new record
    ///
    /// ## Returns
    /// * `Ok(StockRecord)` - The stored record, with id and timestamp filled in
    pub async fn insert(&self, draft: &StockDraft) -> DbResult<StockRecord> {
        debug!(product = %draft.product, "Inserting stock record");

        let date_added = current_timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO stock (product, description, quantity, code, date_added)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&draft.product)
        .bind(&draft.description)
        .bind(draft.quantity)
        .bind(&draft.code)
        .bind(&date_added)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id = %id, "Stock record inserted");

        Ok(StockRecord {
            id,
            product: draft.product.clone(),
            description: draft.description.clone(),
            quantity: draft.quantity,
            code: draft.code.clone(),
            date_added,
        })
    }

    /// Updates an existing stock record.
    ///
    /// All four draft fields are overwritten and `date_added` is re-stamped
    /// with the current local time.
    ///
    /// ## Arguments
    /// * `id` - Record id to update
    /// * `draft` - Replacement field values
    ///
    /// ## Returns
    /// * `Ok(true)` - Record existed and was updated
    /// * `Ok(false)` - No record with this id; nothing changed
    pub async fn update(&self, id: i64, draft: &StockDraft) -> DbResult<bool> {
        debug!(id = %id, "Updating stock record");

        let date_added = current_timestamp();

        let result = sqlx::query(
            r#"
            UPDATE stock
            SET product = ?2, description = ?3, quantity = ?4, code = ?5, date_added = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.product)
        .bind(&draft.description)
        .bind(draft.quantity)
        .bind(&draft.code)
        .bind(&date_added)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a stock record by id.
    ///
    /// ## Returns
    /// * `Ok(true)` - Record existed and was deleted
    /// * `Ok(false)` - No record with this id; nothing changed
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id = %id, "Deleting stock record");

        let result = sqlx::query("DELETE FROM stock WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gets a stock record by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(StockRecord))` - Record found
    /// * `Ok(None)` - Record not found
    pub async fn get(&self, id: i64) -> DbResult<Option<StockRecord>> {
        let record = sqlx::query_as::<_, StockRecord>(
            r#"
            SELECT id, product, description, quantity, code, date_added
            FROM stock
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Lists every stock record, oldest first.
    pub async fn list_all(&self) -> DbResult<Vec<StockRecord>> {
        let records = sqlx::query_as::<_, StockRecord>(
            r#"
            SELECT id, product, description, quantity, code, date_added
            FROM stock
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Searches stock records by substring.
    ///
    /// ## How It Works
    /// The term is wrapped in `%` wildcards and matched with `LIKE` against
    /// product, description, quantity, code and date_added. A record is
    /// returned when any one column matches. ASCII letters compare
    /// case-insensitively (SQLite LIKE default).
    ///
    /// An empty term matches every row, so `search("")` behaves exactly
    /// like [`list_all`](Self::list_all).
    ///
    /// ## Example
    /// ```rust,ignore
    /// // Matches product names, codes, even the date column
    /// let results = repo.search("2024-11").await?;
    /// ```
    pub async fn search(&self, term: &str) -> DbResult<Vec<StockRecord>> {
        debug!(term = %term, "Searching stock records");

        let pattern = format!("%{}%", term);

        let records = sqlx::query_as::<_, StockRecord>(
            r#"
            SELECT id, product, description, quantity, code, date_added
            FROM stock
            WHERE product LIKE ?1
               OR description LIKE ?2
               OR quantity LIKE ?3
               OR code LIKE ?4
               OR date_added LIKE ?5
            ORDER BY id
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = records.len(), "Search returned records");
        Ok(records)
    }

    /// Counts total stock records (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stock")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Current local time in the stored timestamp format.
fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
