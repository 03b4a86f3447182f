//! Strategy selectors chosen at configuration time.

use std::fmt;

/// How a requested season is matched against stored `SEASON_ID` values.
///
/// The two policies are not interchangeable:
///
/// - **Suffix** compares two-digit starting-year keys, so `"2023-24"`
///   matches `"2023-24"` but also `"1923-24"`.
/// - **Substring** requires the full requested string to appear inside the
///   stored id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SeasonPolicy {
    /// Match on the two-digit starting year
    #[default]
    Suffix,
    /// Match on the full season string
    Substring,
}

impl fmt::Display for SeasonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeasonPolicy::Suffix => "suffix",
            SeasonPolicy::Substring => "substring",
        };
        write!(f, "{}", s)
    }
}

/// Which player resolution strategy backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ResolverKind {
    /// Scan the live roster, current season first then historical
    #[default]
    Roster,
    /// Look players up in a local static directory file
    Directory,
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResolverKind::Roster => "roster",
            ResolverKind::Directory => "directory",
        };
        write!(f, "{}", s)
    }
}
