//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// (type_id, group_id, type_name, group_name, total_volume_remain, price, last_update)
pub type FixtureRow = (i64, i64, &'static str, &'static str, i64, f64, &'static str);

pub const SAMPLE_ROWS: &[FixtureRow] = &[
    (34, 18, "Tritanium", "Mineral", 1_500_000, 4.6, "2024-01-15T12:30:45"),
    (35, 18, "Pyerite", "Mineral", 800_000, 11.2, "2024-01-15T12:30:29"),
    (11176, 831, "Crow", "Interceptor", 12, 31_250_000.0, "2024-01-15T23:59:45"),
    (11178, 831, "Raptor", "Interceptor", 0, 29_999_999.4, "not-a-date"),
    (11174, 831, "Ares", "Interceptor", 3, 35_000_000.0, "2024-01-15T12:30:30"),
];

/// Helper to get a mktstatus command with logging quiet
pub fn mktstatus() -> Command {
    let mut cmd = Command::cargo_bin("mktstatus").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("MKTSTATUS_DB_DIR");
    cmd
}

/// Create a `marketstats` database file holding `rows`.
pub fn write_market_db(path: &Path, rows: &[FixtureRow]) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE marketstats (
            type_id INTEGER,
            group_id INTEGER,
            type_name TEXT,
            group_name TEXT,
            total_volume_remain INTEGER,
            price REAL,
            last_update TEXT
        );",
    )
    .unwrap();
    for row in rows {
        conn.execute(
            "INSERT INTO marketstats VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![row.0, row.1, row.2, row.3, row.4, row.5, row.6],
        )
        .unwrap();
    }
}

/// Temp directory with both alias databases populated from [`SAMPLE_ROWS`].
pub fn setup_market_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_market_db(&tmp.path().join("wcmktprod.db"), SAMPLE_ROWS);
    write_market_db(&tmp.path().join("wcmktnorth2.db"), &SAMPLE_ROWS[..2]);
    tmp
}

pub fn db_path(tmp: &TempDir, file_name: &str) -> PathBuf {
    tmp.path().join(file_name)
}
