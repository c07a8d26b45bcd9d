//! Entry point: parse CLI and run the market lookup.

use clap::{error::ErrorKind, CommandFactory, Parser};
use mktstatus::{
    cli::MktStatus,
    commands::market_status::{handle_market_status, MarketStatusParams},
    logging::init_logging,
};
use std::process::ExitCode;

/// Run the CLI.
fn main() -> ExitCode {
    let app = MktStatus::parse();
    init_logging(app.verbose);

    let result = app.filter().and_then(|filter| {
        handle_market_status(MarketStatusParams {
            db: app.db,
            db_dir: app.db_dir,
            filter,
            as_json: app.json,
        })
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_usage() => MktStatus::command()
            .error(ErrorKind::ValueValidation, e)
            .exit(),
        Err(e) => {
            tracing::debug!(error = ?e, "lookup failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
