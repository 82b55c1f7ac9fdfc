//! # Schema Setup
//!
//! First-run table creation for the stock database.
//!
//! The schema is a single flat table, so there is no migration history to
//! track: every open runs one `CREATE TABLE IF NOT EXISTS` statement, which
//! creates the table on a fresh file and does nothing after that.
//!
//! ## The `stock` Table
//! ```text
//! ┌────────────┬─────────┬──────────────────────────────────────────┐
//! │ Column     │ Type    │ Notes                                    │
//! ├────────────┼─────────┼──────────────────────────────────────────┤
//! │ id         │ INTEGER │ PRIMARY KEY AUTOINCREMENT, never reused  │
//! │ product    │ TEXT    │ Product name                             │
//! │ description│ TEXT    │ Free-form description                    │
//! │ quantity   │ INTEGER │ Units on hand                            │
//! │ code       │ TEXT    │ EAN-13 / UPC-A digits, stored as text    │
//! │ date_added │ TEXT    │ Local "YYYY-MM-DD HH:MM:SS"              │
//! └────────────┴─────────┴──────────────────────────────────────────┘
//! ```
//!
//! `AUTOINCREMENT` matters here: without it SQLite may recycle the rowid of
//! a deleted record, and identifiers handed out earlier would silently point
//! at new rows.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// DDL for the stock table. Safe to execute on every open.
const CREATE_STOCK_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS stock (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    product     TEXT    NOT NULL,
    description TEXT    NOT NULL,
    quantity    INTEGER NOT NULL,
    code        TEXT    NOT NULL,
    date_added  TEXT    NOT NULL
)
"#;

/// Ensures the stock table exists.
///
/// Called automatically when the pool is created. Idempotent: a second call
/// against the same database is a no-op and existing rows are untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    debug!("Ensuring stock table exists");
    sqlx::query(CREATE_STOCK_TABLE).execute(pool).await?;
    Ok(())
}

// ===== Tests =====
