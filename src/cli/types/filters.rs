//! Filter types for market lookups.

use crate::error::{MktError, Result};
use std::fmt;

/// The four lookup dimensions supported by the `marketstats` query.
///
/// Each kind owns the name of the column it filters on, so the only
/// text ever spliced into the SQL comes from this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    TypeId,
    GroupId,
    TypeName,
    GroupName,
}

impl FilterKind {
    /// Column in `marketstats` this filter applies to.
    pub fn column(&self) -> &'static str {
        match self {
            FilterKind::TypeId => "type_id",
            FilterKind::GroupId => "group_id",
            FilterKind::TypeName => "type_name",
            FilterKind::GroupName => "group_name",
        }
    }

    /// Id filters match exactly; name filters match by substring.
    pub fn is_id(&self) -> bool {
        matches!(self, FilterKind::TypeId | FilterKind::GroupId)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// A resolved filter: the kind plus its typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketFilter {
    TypeId(i64),
    GroupId(i64),
    /// Case-sensitive substring of the type name
    TypeName(String),
    /// Case-sensitive substring of the group name
    GroupName(String),
}

impl MarketFilter {
    /// Build a filter from an untyped value, coercing id values to integers.
    ///
    /// Fails with [`MktError::InvalidFilterValue`] when an id filter is given
    /// something that is not an integer.
    pub fn from_raw(kind: FilterKind, value: &str) -> Result<Self> {
        let parse_id = || {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| MktError::InvalidFilterValue {
                    kind: kind.to_string(),
                    value: value.to_string(),
                })
        };

        Ok(match kind {
            FilterKind::TypeId => MarketFilter::TypeId(parse_id()?),
            FilterKind::GroupId => MarketFilter::GroupId(parse_id()?),
            FilterKind::TypeName => MarketFilter::TypeName(value.to_string()),
            FilterKind::GroupName => MarketFilter::GroupName(value.to_string()),
        })
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            MarketFilter::TypeId(_) => FilterKind::TypeId,
            MarketFilter::GroupId(_) => FilterKind::GroupId,
            MarketFilter::TypeName(_) => FilterKind::TypeName,
            MarketFilter::GroupName(_) => FilterKind::GroupName,
        }
    }
}

impl fmt::Display for MarketFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketFilter::TypeId(id) | MarketFilter::GroupId(id) => {
                write!(f, "{} = {}", self.kind(), id)
            }
            MarketFilter::TypeName(name) | MarketFilter::GroupName(name) => {
                write!(f, "{} contains {:?}", self.kind(), name)
            }
        }
    }
}
