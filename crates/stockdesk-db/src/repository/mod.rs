//! # Repository Module
//!
//! Database repository implementations for Stockdesk.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Form Controller                                                        │
//! │       │                                                                 │
//! │       │  db.stock().search("laptop")                                    │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  StockRepository                                                        │
//! │  ├── insert(&self, draft)                                               │
//! │  ├── update(&self, id, draft)                                           │
//! │  ├── delete(&self, id)                                                  │
//! │  └── search(&self, term)                                                │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • Callers never see sqlx types                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`StockRepository`] - Stock record CRUD and search
//!
//! [`StockRepository`]: stock::StockRepository

pub mod stock;

pub use stock::StockRepository;
