//! Database connection management

use crate::error::{MktError, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

/// Upper bound on waiting for a lock held by the ingestion process.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Table holding the market snapshots.
pub const MARKET_TABLE: &str = "marketstats";

/// Read-only connection to a market statistics database.
///
/// The connection closes when this value is dropped.
pub struct MarketDatabase {
    pub(crate) conn: Connection,
}

impl MarketDatabase {
    /// Open an existing database file read-only.
    ///
    /// Never creates the file. Fails with [`MktError::DatabaseUnavailable`]
    /// if the file cannot be opened or is not a readable SQLite database.
    pub fn open(path: &Path) -> Result<Self> {
        let unavailable = |source| MktError::DatabaseUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(unavailable)?;
        conn.busy_timeout(BUSY_TIMEOUT).map_err(unavailable)?;

        // SQLite opens lazily; touch the header so a corrupt or foreign file
        // fails here rather than at query time.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(unavailable)?;

        tracing::debug!(path = %path.display(), "opened market database");
        Ok(Self { conn })
    }
}
