//! Database aliases for the market status CLI.

use crate::error::MktError;
use std::fmt;
use std::str::FromStr;

/// Short user-facing code naming one of the market databases.
///
/// The mapping from code to backing file is fixed at compile time, so an
/// alias can never name a file outside this table.
///
/// # Examples
///
/// ```rust
/// use mktstatus::DatabaseAlias;
///
/// let alias: DatabaseAlias = "b9".parse().unwrap();
/// assert_eq!(alias, DatabaseAlias::B9);
/// assert_eq!(alias.file_name(), "wcmktnorth2.db");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseAlias {
    /// `4H` — the production market
    FourH,
    /// `B9` — the northern market
    B9,
}

impl DatabaseAlias {
    /// Every known alias, in the order shown to users.
    pub const ALL: [DatabaseAlias; 2] = [DatabaseAlias::FourH, DatabaseAlias::B9];

    /// The code typed on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            DatabaseAlias::FourH => "4H",
            DatabaseAlias::B9 => "B9",
        }
    }

    /// File name of the backing SQLite database.
    pub fn file_name(&self) -> &'static str {
        match self {
            DatabaseAlias::FourH => "wcmktprod.db",
            DatabaseAlias::B9 => "wcmktnorth2.db",
        }
    }
}

impl fmt::Display for DatabaseAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for DatabaseAlias {
    type Err = MktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|alias| alias.code() == code)
            .ok_or(MktError::UnknownDatabase { code })
    }
}
