//! Sheet configuration passed into every generation run.
//!
//! The configuration names the spreadsheet to read, carries the header that
//! opens each generated block, and holds the two feature flags controlling
//! titles and second-name appends. Both flags start enabled and can only be
//! switched off.

/// Google Sheets v4 values endpoint, including the trailing slash expected
/// before the spreadsheet id.
pub const DEFAULT_SHEETS_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

/// Configuration describing where name lists live and how blocks are shaped.
///
/// # Example
///
/// ```
/// use sheet_names::SheetConfig;
///
/// let mut config = SheetConfig::new(
///     "https://sheets.googleapis.com/v4/spreadsheets/",
///     "123foo",
///     "456bar",
///     "NameList",
///     2000,
///     "Your names:\n",
/// );
/// assert!(config.titles_enabled());
///
/// config.disable_titles();
/// assert!(!config.titles_enabled());
/// assert!(config.second_name_appends_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    url: String,
    id: String,
    api_key: String,
    sheet_name: String,
    msg_limit: usize,
    header: String,
    titles_enabled: bool,
    second_name_appends_enabled: bool,
}

impl SheetConfig {
    /// Creates a configuration with titles and second-name appends enabled.
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        id: impl Into<String>,
        api_key: impl Into<String>,
        sheet_name: impl Into<String>,
        msg_limit: usize,
        header: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            id: id.into(),
            api_key: api_key.into(),
            sheet_name: sheet_name.into(),
            msg_limit,
            header: header.into(),
            titles_enabled: true,
            second_name_appends_enabled: true,
        }
    }

    /// Stops generated names from carrying a title.
    ///
    /// Turn titles off when the sheet has no title column (`C`). There is no
    /// way to turn them back on.
    pub const fn disable_titles(&mut self) {
        self.titles_enabled = false;
    }

    /// Stops suffixes from being appended to last names.
    ///
    /// Turn appends off when the sheet has no suffix column (`D`). There is
    /// no way to turn them back on.
    pub const fn disable_second_name_appends(&mut self) {
        self.second_name_appends_enabled = false;
    }

    /// Returns the base URL of the spreadsheet API.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the spreadsheet identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the API key sent with every request.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the name of the sheet holding the lists.
    #[must_use]
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Returns the message length limit.
    ///
    /// Generation does not truncate or split output against this value.
    #[must_use]
    pub const fn msg_limit(&self) -> usize {
        self.msg_limit
    }

    /// Returns the header that opens every generated block.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns whether titles may be attached to names.
    #[must_use]
    pub const fn titles_enabled(&self) -> bool {
        self.titles_enabled
    }

    /// Returns whether suffixes may be appended to last names.
    #[must_use]
    pub const fn second_name_appends_enabled(&self) -> bool {
        self.second_name_appends_enabled
    }
}
