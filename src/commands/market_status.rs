//! Market status lookup and rendering.
//!
//! Resolves the database alias to a file, runs the filtered lookup and
//! prints either an aligned table or JSON. An empty result is reported as
//! `No results found.` and is not an error.

use crate::{
    cli::types::{DatabaseAlias, MarketFilter},
    format::{format_number, format_timestamp, Number},
    storage::{MarketDatabase, MarketRow},
    Result,
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use super::{resolve_database_path, resolve_db_dir};

/// Printed instead of a table when nothing matches.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Parameters for a market status lookup.
#[derive(Debug)]
pub struct MarketStatusParams {
    pub db: DatabaseAlias,
    pub db_dir: Option<PathBuf>,
    pub filter: MarketFilter,
    pub as_json: bool,
}

/// A market row with every column formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct FormattedRow {
    #[tabled(rename = "Type")]
    pub type_name: String,
    #[tabled(rename = "Group")]
    pub group_name: String,
    #[tabled(rename = "Stock")]
    pub stock: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Last Update")]
    pub last_update: String,
}

impl From<&MarketRow> for FormattedRow {
    fn from(row: &MarketRow) -> Self {
        let number = |value: Option<Number>| value.map(format_number).unwrap_or_default();
        Self {
            type_name: row.type_name.clone(),
            group_name: row.group_name.clone(),
            stock: number(row.stock),
            price: number(row.price),
            last_update: row
                .last_update
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_default(),
        }
    }
}

/// Render rows as an aligned plain-text table with numeric columns right-aligned.
pub fn render_table(rows: &[FormattedRow]) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(2..4), Alignment::right());
    table.to_string()
}

/// Run the lookup and write the output to stdout.
pub fn handle_market_status(params: MarketStatusParams) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_market_status(params, &mut out)
}

/// Run the lookup, writing the table, JSON or no-results message to `out`.
pub fn run_market_status<W: Write>(params: MarketStatusParams, out: &mut W) -> Result<()> {
    let db_dir = resolve_db_dir(params.db_dir)?;
    let path = resolve_database_path(params.db, &db_dir)?;
    tracing::debug!(alias = %params.db, path = %path.display(), "resolved database");

    let rows = {
        let db = MarketDatabase::open(&path)?;
        db.query_market(&params.filter)?
    };
    let formatted: Vec<FormattedRow> = rows.iter().map(FormattedRow::from).collect();

    if params.as_json {
        serde_json::to_writer_pretty(&mut *out, &formatted)?;
        writeln!(out)?;
    } else if formatted.is_empty() {
        writeln!(out, "{}", NO_RESULTS_MESSAGE)?;
    } else {
        writeln!(out, "{}", render_table(&formatted))?;
    }

    Ok(())
}
