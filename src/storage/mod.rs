//! Storage layer for the market status CLI
//!
//! Read-only access to the `marketstats` SQLite table:
//! - `models`: Row structures and SQLite value conversion
//! - `schema`: Connection management
//! - `queries`: The filtered market lookup

pub mod models;
pub mod queries;
pub mod schema;


pub use models::MarketRow;
pub use queries::{build_market_query, query_market};
pub use schema::MarketDatabase;
