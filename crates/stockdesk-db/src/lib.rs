//! # stockdesk-db: Database Layer
//!
//! SQLite persistence for Stockdesk using sqlx.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     stockdesk-db                        │
//! │                                                         │
//! │  ┌───────────┐  ┌───────────┐  ┌────────────────────┐   │
//! │  │  pool.rs  │  │ schema.rs │  │  repository/       │   │
//! │  │           │  │           │  │                    │   │
//! │  │ Database  │─▶│ first-run │  │  StockRepository   │   │
//! │  │ DbConfig  │  │ DDL       │  │  (CRUD + search)   │   │
//! │  └───────────┘  └───────────┘  └────────────────────┘   │
//! │        │                                 │              │
//! │        └────────────┬────────────────────┘              │
//! │                     ▼                                   │
//! │              ┌─────────────┐                            │
//! │              │  error.rs   │                            │
//! │              │  DbError    │                            │
//! │              └─────────────┘                            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockdesk_db::{Database, DbConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(DbConfig::new("stock.db")).await?;
//!     let rows = db.stock().list_all().await?;
//!     println!("{} item(s) on hand", rows.len());
//!     db.close().await;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// Re-export main types for convenience
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::StockRepository;
