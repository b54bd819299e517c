//! CLI support for generating name blocks.
//!
//! Settings are layered by OrthoConfig from `SHEET_NAMES_*` environment
//! variables and command-line flags. The binary delegates to these helpers so
//! they can be exercised in tests without spawning a subprocess or touching
//! the network.

mod error;

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::{DEFAULT_SHEETS_URL, SheetConfig};
use crate::generator::generate_names;
use crate::source::NameSource;

pub use error::CliError;

const DEFAULT_SHEET_NAME: &str = "NameList";
const DEFAULT_MSG_LIMIT: usize = 2000;
const DEFAULT_COUNT: usize = 10;
const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Configuration values controlling a CLI generation run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHEET_NAMES")]
pub struct NameSettings {
    /// Base URL of the spreadsheet API.
    pub url: Option<String>,
    /// Spreadsheet identifier.
    pub sheet_id: Option<String>,
    /// API key sent with every request.
    pub api_key: Option<String>,
    /// Sheet holding the name columns.
    pub sheet_name: Option<String>,
    /// Message length above which a warning is logged.
    pub msg_limit: Option<usize>,
    /// Header printed above the generated names.
    pub header: Option<String>,
    /// Number of names to generate.
    pub count: Option<usize>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Never attach titles.
    #[ortho_config(default = false)]
    pub no_titles: bool,
    /// Never append suffixes to last names.
    #[ortho_config(default = false)]
    pub no_second_name_appends: bool,
}

impl NameSettings {
    /// Return the configured API URL, falling back to Google Sheets v4.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_SHEETS_URL)
    }

    /// Return the configured sheet name, falling back to the default.
    #[must_use]
    pub fn sheet_name(&self) -> &str {
        self.sheet_name.as_deref().unwrap_or(DEFAULT_SHEET_NAME)
    }

    /// Return the configured message limit, falling back to the default.
    #[must_use]
    pub fn msg_limit(&self) -> usize {
        self.msg_limit.unwrap_or(DEFAULT_MSG_LIMIT)
    }

    /// Return the configured header, or an empty header.
    #[must_use]
    pub fn header(&self) -> &str {
        self.header.as_deref().unwrap_or_default()
    }

    /// Return the number of names to generate.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Return the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }

    /// Builds the sheet configuration described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingSetting`] when the spreadsheet id or API key
    /// is absent.
    pub fn to_sheet_config(&self) -> Result<SheetConfig, CliError> {
        let sheet_id = self
            .sheet_id
            .as_deref()
            .ok_or(CliError::MissingSetting {
                setting: "SHEET_NAMES_SHEET_ID",
            })?;
        let api_key = self.api_key.as_deref().ok_or(CliError::MissingSetting {
            setting: "SHEET_NAMES_API_KEY",
        })?;

        let mut config = SheetConfig::new(
            self.url(),
            sheet_id,
            api_key,
            self.sheet_name(),
            self.msg_limit(),
            self.header(),
        );
        if self.no_titles {
            config.disable_titles();
        }
        if self.no_second_name_appends {
            config.disable_second_name_appends();
        }
        Ok(config)
    }
}

/// Generates the block of names requested by `settings`.
///
/// Logs a warning when the block is longer than a non-zero message limit;
/// the block itself is never truncated.
///
/// # Errors
///
/// Returns [`CliError`] when the settings are incomplete or generation fails.
///
/// # Example
///
/// ```
/// use sheet_names::StaticNameSource;
/// use sheet_names::cli::{NameSettings, run};
///
/// let settings = NameSettings {
///     url: None,
///     sheet_id: Some("123foo".to_owned()),
///     api_key: Some("456bar".to_owned()),
///     sheet_name: None,
///     msg_limit: None,
///     header: Some("names:\n".to_owned()),
///     count: Some(1),
///     timeout_ms: None,
///     no_titles: true,
///     no_second_name_appends: true,
/// };
/// let source = StaticNameSource::new(
///     vec!["Billy".to_owned()],
///     vec!["Berube".to_owned()],
///     vec![],
///     vec![],
/// );
///
/// let block = run(&settings, &source).expect("generated");
/// assert_eq!(block, "names:\nBilly Berube\n");
/// ```
pub fn run<S>(settings: &NameSettings, source: &S) -> Result<String, CliError>
where
    S: NameSource + ?Sized,
{
    let config = settings.to_sheet_config()?;
    let count = settings.count();
    let block = generate_names(count, &config, source)?.concat();

    let limit = config.msg_limit();
    let length = block.chars().count();
    if limit > 0 && length > limit {
        warn!(length, limit, "generated block exceeds message limit");
    }
    info!(count, sheet = config.sheet_name(), "generated names");
    Ok(block)
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI settings and the generation flow.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::error::{FetchError, NameGenerationError};
    use crate::source::{NameColumn, StaticNameSource};

    const SETTING_VARS: [&str; 10] = [
        "SHEET_NAMES_URL",
        "SHEET_NAMES_SHEET_ID",
        "SHEET_NAMES_API_KEY",
        "SHEET_NAMES_SHEET_NAME",
        "SHEET_NAMES_MSG_LIMIT",
        "SHEET_NAMES_HEADER",
        "SHEET_NAMES_COUNT",
        "SHEET_NAMES_TIMEOUT_MS",
        "SHEET_NAMES_NO_TITLES",
        "SHEET_NAMES_NO_SECOND_NAME_APPENDS",
    ];

    fn load_from_empty_args() -> NameSettings {
        NameSettings::load_from_iter([OsString::from("sheet-names")])
            .expect("config should load")
    }

    /// Clears every setting variable except the supplied overrides.
    fn env_with(overrides: &[(&'static str, &str)]) -> Vec<(&'static str, Option<String>)> {
        SETTING_VARS
            .iter()
            .map(|var| {
                let value = overrides
                    .iter()
                    .find(|(name, _)| name == var)
                    .map(|(_, value)| (*value).to_owned());
                (*var, value)
            })
            .collect()
    }

    #[fixture]
    fn settings() -> NameSettings {
        NameSettings {
            url: None,
            sheet_id: Some("123foo".to_owned()),
            api_key: Some("456bar".to_owned()),
            sheet_name: None,
            msg_limit: None,
            header: Some("testing:\n".to_owned()),
            count: Some(2),
            timeout_ms: None,
            no_titles: false,
            no_second_name_appends: false,
        }
    }

    #[fixture]
    fn source() -> StaticNameSource {
        StaticNameSource::new(
            vec!["Billy".to_owned(), "Joe".to_owned()],
            vec!["Berube".to_owned(), "Smith".to_owned()],
            vec!["Bard".to_owned(), "Knight".to_owned()],
            vec!["foo".to_owned()],
        )
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(env_with(&[]));

        let settings = load_from_empty_args();
        assert_eq!(settings.url(), DEFAULT_SHEETS_URL);
        assert_eq!(settings.sheet_name(), DEFAULT_SHEET_NAME);
        assert_eq!(settings.msg_limit(), DEFAULT_MSG_LIMIT);
        assert_eq!(settings.header(), "");
        assert_eq!(settings.count(), DEFAULT_COUNT);
        assert_eq!(settings.timeout(), Duration::from_secs(2));
        assert!(!settings.no_titles);
        assert!(!settings.no_second_name_appends);
        assert!(settings.sheet_id.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(env_with(&[
            ("SHEET_NAMES_SHEET_ID", "sheet-123"),
            ("SHEET_NAMES_API_KEY", "key-456"),
            ("SHEET_NAMES_SHEET_NAME", "Heroes"),
            ("SHEET_NAMES_COUNT", "5"),
            ("SHEET_NAMES_NO_TITLES", "true"),
        ]));

        let settings = load_from_empty_args();
        assert_eq!(settings.sheet_id.as_deref(), Some("sheet-123"));
        assert_eq!(settings.api_key.as_deref(), Some("key-456"));
        assert_eq!(settings.sheet_name(), "Heroes");
        assert_eq!(settings.count(), 5);
        assert!(settings.no_titles);
    }

    #[rstest]
    fn sheet_config_carries_settings(mut settings: NameSettings) {
        settings.no_titles = true;

        let config = settings.to_sheet_config().expect("complete settings");

        assert_eq!(config.url(), DEFAULT_SHEETS_URL);
        assert_eq!(config.id(), "123foo");
        assert_eq!(config.api_key(), "456bar");
        assert_eq!(config.sheet_name(), DEFAULT_SHEET_NAME);
        assert_eq!(config.header(), "testing:\n");
        assert!(!config.titles_enabled());
        assert!(config.second_name_appends_enabled());
    }

    #[rstest]
    #[case::sheet_id("SHEET_NAMES_SHEET_ID")]
    #[case::api_key("SHEET_NAMES_API_KEY")]
    fn sheet_config_requires_credentials(
        mut settings: NameSettings,
        #[case] setting: &'static str,
    ) {
        if setting == "SHEET_NAMES_SHEET_ID" {
            settings.sheet_id = None;
        } else {
            settings.api_key = None;
        }

        let err = settings.to_sheet_config().expect_err("incomplete settings");

        assert_eq!(err, CliError::MissingSetting { setting });
    }

    #[rstest]
    fn run_returns_the_joined_block(settings: NameSettings, source: StaticNameSource) {
        let block = run(&settings, &source).expect("generated");

        let body = block.strip_prefix("testing:\n").expect("header first");
        assert_eq!(body.lines().count(), 2);
    }

    #[rstest]
    fn run_keeps_blocks_longer_than_the_limit(
        mut settings: NameSettings,
        source: StaticNameSource,
    ) {
        settings.msg_limit = Some(1);

        let block = run(&settings, &source).expect("generated");

        assert!(block.chars().count() > 1);
    }

    #[rstest]
    fn run_surfaces_generation_errors(mut settings: NameSettings, source: StaticNameSource) {
        settings.count = Some(3);

        let err = run(&settings, &source).expect_err("only two first names");

        assert_eq!(
            err,
            CliError::Generation {
                source: NameGenerationError::Exhausted {
                    column: NameColumn::FirstNames,
                    requested: 3,
                    available: 2,
                },
            }
        );
    }

    #[test]
    fn cli_error_wraps_fetch_failures() {
        let err = CliError::from(NameGenerationError::Fetch {
            column: NameColumn::FirstNames,
            source: FetchError::timeout("after 2s"),
        });

        assert_eq!(
            err.to_string(),
            "name generation failed: failed to fetch first names (A2:A): name list request timed out: after 2s"
        );
    }
}
