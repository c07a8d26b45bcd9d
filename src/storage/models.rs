//! Data models for the storage layer

use crate::format::Number;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use serde::{Deserialize, Serialize};

/// One product's market snapshot from `marketstats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    pub type_name: String,
    pub group_name: String,
    /// `total_volume_remain`
    pub stock: Option<Number>,
    /// `ROUND(price, 0)`
    pub price: Option<Number>,
    /// Verbatim from the source, not guaranteed to be a valid timestamp
    pub last_update: Option<String>,
}

impl FromSql for Number {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => Ok(Number::Integer(i)),
            ValueRef::Real(f) => Ok(Number::Real(f)),
            ValueRef::Text(bytes) => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))?
                    .trim();
                text.parse::<i64>()
                    .map(Number::Integer)
                    .or_else(|_| text.parse::<f64>().map(Number::Real))
                    .map_err(|_| FromSqlError::InvalidType)
            }
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

/// Read any SQLite value as text, `None` for NULL.
///
/// The source tables are loosely typed; a name or timestamp column may
/// hold a number.
pub(crate) fn value_to_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
