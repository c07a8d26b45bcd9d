//! Type-safe wrappers and enums for market lookups.

pub mod alias;
pub mod filters;

pub use alias::DatabaseAlias;
pub use filters::{FilterKind, MarketFilter};
