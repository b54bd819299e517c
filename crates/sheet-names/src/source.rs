//! Port for fetching name lists from a tabular data source.
//!
//! The generator only knows how to ask for "the strings in this range"; the
//! spreadsheet transport lives in an adapter behind [`NameSource`] so tests
//! and embedders can substitute their own lists.

use std::fmt;

use crate::config::SheetConfig;
use crate::error::FetchError;

/// One of the four sheet columns a name list is drawn from.
///
/// Each column skips the header row, so ranges start at row 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameColumn {
    /// First names, column `A`.
    FirstNames,
    /// Last names, column `B`.
    LastNames,
    /// Titles such as "Bard", column `C`.
    Titles,
    /// Suffixes glued onto last names, column `D`.
    Suffixes,
}

impl NameColumn {
    /// All columns in fetch order.
    pub const ALL: [Self; 4] = [
        Self::FirstNames,
        Self::LastNames,
        Self::Titles,
        Self::Suffixes,
    ];

    /// Returns the range identifier for this column.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheet_names::NameColumn;
    ///
    /// assert_eq!(NameColumn::FirstNames.range(), "A2:A");
    /// assert_eq!(NameColumn::Suffixes.range(), "D2:D");
    /// ```
    #[must_use]
    pub const fn range(self) -> &'static str {
        match self {
            Self::FirstNames => "A2:A",
            Self::LastNames => "B2:B",
            Self::Titles => "C2:C",
            Self::Suffixes => "D2:D",
        }
    }

    /// Looks up the column addressed by a range identifier.
    #[must_use]
    pub fn from_range(range: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.range() == range)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::FirstNames => "first names",
            Self::LastNames => "last names",
            Self::Titles => "titles",
            Self::Suffixes => "suffixes",
        }
    }
}

impl fmt::Display for NameColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.range())
    }
}

/// Port for retrieving the strings held in one range of the name sheet.
#[cfg_attr(test, mockall::automock)]
pub trait NameSource: Send + Sync {
    /// Fetch the strings stored in `range`, flattened row by row.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the list cannot be retrieved or decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheet_names::{NameColumn, NameSource, SheetConfig, StaticNameSource};
    ///
    /// let source = StaticNameSource::new(
    ///     vec!["Billy".to_owned()],
    ///     vec!["Berube".to_owned()],
    ///     vec![],
    ///     vec![],
    /// );
    /// let config = SheetConfig::new("https://test.url/", "id", "key", "NameList", 0, "");
    ///
    /// let firsts = source.fetch(NameColumn::FirstNames.range(), &config)?;
    /// assert_eq!(firsts, vec!["Billy".to_owned()]);
    /// # Ok::<(), sheet_names::FetchError>(())
    /// ```
    fn fetch(&self, range: &str, config: &SheetConfig) -> Result<Vec<String>, FetchError>;
}

/// In-memory source serving fixed lists, one per column.
///
/// Useful for tests and for callers that keep their name lists locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticNameSource {
    first_names: Vec<String>,
    last_names: Vec<String>,
    titles: Vec<String>,
    suffixes: Vec<String>,
}

impl StaticNameSource {
    /// Creates a source serving the given lists.
    #[must_use]
    pub const fn new(
        first_names: Vec<String>,
        last_names: Vec<String>,
        titles: Vec<String>,
        suffixes: Vec<String>,
    ) -> Self {
        Self {
            first_names,
            last_names,
            titles,
            suffixes,
        }
    }

    fn list(&self, column: NameColumn) -> &[String] {
        match column {
            NameColumn::FirstNames => &self.first_names,
            NameColumn::LastNames => &self.last_names,
            NameColumn::Titles => &self.titles,
            NameColumn::Suffixes => &self.suffixes,
        }
    }
}

impl NameSource for StaticNameSource {
    fn fetch(&self, range: &str, _config: &SheetConfig) -> Result<Vec<String>, FetchError> {
        NameColumn::from_range(range)
            .map(|column| self.list(column).to_vec())
            .ok_or_else(|| FetchError::invalid_request(format!("unknown range '{range}'")))
    }
}
