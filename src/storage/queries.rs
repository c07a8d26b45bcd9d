//! Market lookup queries

use super::{
    models::{value_to_text, MarketRow},
    schema::{MarketDatabase, MARKET_TABLE},
};
use crate::cli::types::filters::{FilterKind, MarketFilter};
use crate::error::Result;
use rusqlite::{types::Value, Row};
use std::path::Path;
use std::time::Instant;

/// Build the SELECT for a filter kind.
///
/// Only the column name varies; the filter value is always bound as `?1`.
/// Name filters use `instr` so matching is a case-sensitive substring test
/// with no wildcard characters.
pub fn build_market_query(kind: FilterKind) -> String {
    let condition = if kind.is_id() {
        format!("{} = ?1", kind.column())
    } else {
        format!("instr({}, ?1) > 0", kind.column())
    };

    format!(
        "SELECT type_name, group_name, total_volume_remain, ROUND(price, 0), last_update
         FROM {MARKET_TABLE}
         WHERE {condition}
         ORDER BY group_name, type_name"
    )
}

impl MarketFilter {
    /// The value bound to `?1`.
    fn bind_value(&self) -> Value {
        match self {
            MarketFilter::TypeId(id) | MarketFilter::GroupId(id) => Value::Integer(*id),
            MarketFilter::TypeName(name) | MarketFilter::GroupName(name) => {
                Value::Text(name.clone())
            }
        }
    }
}

impl MarketDatabase {
    /// Rows matching `filter`, ordered by group name then type name.
    pub fn query_market(&self, filter: &MarketFilter) -> Result<Vec<MarketRow>> {
        let started = Instant::now();
        let sql = build_market_query(filter.kind());
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt
            .query_map([filter.bind_value()], Self::row_to_market)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(
            %filter,
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "market query finished"
        );
        Ok(rows)
    }

    pub(crate) fn row_to_market(row: &Row) -> rusqlite::Result<MarketRow> {
        Ok(MarketRow {
            type_name: value_to_text(row.get_ref(0)?).unwrap_or_default(),
            group_name: value_to_text(row.get_ref(1)?).unwrap_or_default(),
            stock: row.get(2)?,
            price: row.get(3)?,
            last_update: value_to_text(row.get_ref(4)?),
        })
    }
}

/// Look up market rows in the database at `path`.
///
/// `value` is coerced according to `kind` before the file is touched, so a
/// non-integer id fails with [`crate::MktError::InvalidFilterValue`] even when
/// the database is missing. The connection is closed before returning.
pub fn query_market(path: &Path, kind: FilterKind, value: &str) -> Result<Vec<MarketRow>> {
    let filter = MarketFilter::from_raw(kind, value)?;
    let db = MarketDatabase::open(path)?;
    db.query_market(&filter)
}
