//! CLI argument definitions and parsing.

pub mod types;

use crate::error::{MktError, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use types::{DatabaseAlias, MarketFilter};

#[derive(Debug, Parser)]
#[clap(
    name = "mktstatus",
    version,
    about = "Query market statistics from the market databases",
    after_help = "Examples:
  mktstatus B9 --group_id 831
  mktstatus 4H --type_name Tritanium
  mktstatus B9 --group_name Interceptor"
)]
#[clap(group(
    ArgGroup::new("filter")
        .required(true)
        .args(["type_id", "type_name", "group_id", "group_name"])
))]
pub struct MktStatus {
    /// Database to query (4H=wcmktprod.db, B9=wcmktnorth2.db).
    #[clap(value_name = "DB")]
    pub db: DatabaseAlias,

    /// Filter by type ID.
    #[clap(
        long = "type_id",
        visible_alias = "type-id",
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub type_id: Option<i64>,

    /// Filter by type name (partial match, case-sensitive).
    #[clap(long = "type_name", visible_alias = "type-name", value_name = "STR")]
    pub type_name: Option<String>,

    /// Filter by group ID.
    #[clap(
        long = "group_id",
        visible_alias = "group-id",
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub group_id: Option<i64>,

    /// Filter by group name (partial match, case-sensitive).
    #[clap(long = "group_name", visible_alias = "group-name", value_name = "STR")]
    pub group_name: Option<String>,

    /// Output results as JSON instead of a table.
    #[clap(long)]
    pub json: bool,

    /// Directory holding the database files (or set `MKTSTATUS_DB_DIR`).
    /// Defaults to the directory of the executable.
    #[clap(long, value_name = "DIR")]
    pub db_dir: Option<PathBuf>,

    /// Log the resolved database and query details to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}

impl MktStatus {
    /// The single filter selected on the command line.
    ///
    /// Clap already enforces exactly one; this re-checks for callers that
    /// build the struct by hand.
    pub fn filter(&self) -> Result<MarketFilter> {
        let mut selected = [
            self.type_id.map(MarketFilter::TypeId),
            self.type_name.clone().map(MarketFilter::TypeName),
            self.group_id.map(MarketFilter::GroupId),
            self.group_name.clone().map(MarketFilter::GroupName),
        ]
        .into_iter()
        .flatten();

        match (selected.next(), selected.next()) {
            (Some(filter), None) => Ok(filter),
            _ => Err(MktError::Usage {
                message: "exactly one of --type_id, --type_name, --group_id, --group_name \
                          is required"
                    .to_string(),
            }),
        }
    }
}
