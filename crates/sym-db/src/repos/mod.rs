//! Keyed repositories, one module per table.
//!
//! Every function takes a `&libsql::Connection`. A `libsql::Transaction`
//! derefs to a connection, so the same functions serve both the shared
//! handle and a bulk-load transaction.

pub mod api_calls;
pub mod conditions;
pub mod counts;
pub mod mappings;
pub mod profiles;
pub mod rules;
pub mod sessions;
pub mod symptoms;

pub use counts::TableCounts;
