//! Market Status CLI Library
//!
//! Looks up market statistics in the local SQLite market databases and
//! formats them for display.
//!
//! ## Features
//!
//! - **Database Aliases**: Short codes (`4H`, `B9`) map to fixed database files
//! - **Filtered Lookup**: By type id, group id, or case-sensitive name substring
//! - **Display Formatting**: Thousands separators and minute-rounded timestamps
//! - **Output**: Aligned plain-text table or JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mktstatus::{storage::query_market, FilterKind};
//! use std::path::Path;
//!
//! # fn example() -> mktstatus::Result<()> {
//! let rows = query_market(Path::new("wcmktprod.db"), FilterKind::TypeName, "Tritanium")?;
//! for row in rows {
//!     println!("{} ({})", row.type_name, row.group_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a directory of database files instead of the
//! executable's own directory:
//! ```bash
//! export MKTSTATUS_DB_DIR=/srv/market
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod format;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{DatabaseAlias, FilterKind, MarketFilter};
pub use error::{MktError, Result};
pub use format::{format_number, format_timestamp, Number};
pub use storage::MarketRow;

pub const DB_DIR_ENV_VAR: &str = "MKTSTATUS_DB_DIR";
