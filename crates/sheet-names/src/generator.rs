//! Random name assembly from fetched name lists.
//!
//! A generation run fetches the lists it needs once, then draws `count`
//! names. First names, last names and titles are drawn without repetition
//! inside a run; suffixes may repeat. The whole block is returned as the
//! single element of a vector.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::config::SheetConfig;
use crate::error::NameGenerationError;
use crate::source::{NameColumn, NameSource};

/// Rejection-sampling attempts before a fresh draw scans for unused indices.
const MAX_DRAW_ATTEMPTS: usize = 64;

/// Draws in `0..OPTIONAL_PART_RANGE` above this value add a suffix or title.
const OPTIONAL_PART_THRESHOLD: u32 = 3;

/// Exclusive upper bound of the draw deciding on a suffix or title (60%).
const OPTIONAL_PART_RANGE: u32 = 10;

/// Generates a block of `count` random names using a time-seeded generator.
///
/// The generator is reseeded from the current time on every call, so output
/// is neither reproducible nor suitable for anything security sensitive. Use
/// [`generate_names_with_rng`] to supply your own random source.
///
/// # Errors
///
/// Returns [`NameGenerationError`] if:
/// - A list cannot be fetched from `source`
/// - A list required by the enabled features is empty
/// - `count` needs more distinct first names, last names or titles than the
///   lists hold
///
/// # Example
///
/// ```
/// use sheet_names::{SheetConfig, StaticNameSource, generate_names};
///
/// let source = StaticNameSource::new(
///     vec!["Billy".to_owned(), "Joe".to_owned()],
///     vec!["Berube".to_owned(), "Smith".to_owned()],
///     vec!["Bard".to_owned(), "Knight".to_owned()],
///     vec!["foo".to_owned()],
/// );
/// let config = SheetConfig::new("https://test.url/", "id", "key", "NameList", 0, "names:\n");
///
/// let block = generate_names(2, &config, &source).expect("generated");
///
/// assert_eq!(block.len(), 1);
/// assert!(block[0].starts_with("names:\n"));
/// assert_eq!(block[0].lines().count(), 3);
/// ```
pub fn generate_names<S>(
    count: usize,
    config: &SheetConfig,
    source: &S,
) -> Result<Vec<String>, NameGenerationError>
where
    S: NameSource + ?Sized,
{
    let mut rng = ChaCha8Rng::seed_from_u64(time_seed());
    generate_names_with_rng(count, config, source, &mut rng)
}

/// Generates a block of `count` random names drawing from `rng`.
///
/// Identical lists and an identically seeded generator produce identical
/// blocks.
///
/// # Errors
///
/// Returns [`NameGenerationError`] under the same conditions as
/// [`generate_names`].
pub fn generate_names_with_rng<S, R>(
    count: usize,
    config: &SheetConfig,
    source: &S,
    rng: &mut R,
) -> Result<Vec<String>, NameGenerationError>
where
    S: NameSource + ?Sized,
    R: Rng + ?Sized,
{
    let lists = NameLists::fetch(config, source)?;
    lists.validate(count)?;

    let mut first_used = HashSet::with_capacity(count);
    let mut last_used = HashSet::with_capacity(count);
    let mut title_used = HashSet::new();
    let mut buffer = config.header().to_owned();

    for _ in 0..count {
        let first = fresh_draw(
            rng,
            &lists.first_names,
            &mut first_used,
            NameColumn::FirstNames,
        )?;
        let mut last = fresh_draw(rng, &lists.last_names, &mut last_used, NameColumn::LastNames)?
            .to_owned();

        if config.second_name_appends_enabled() && adds_optional_part(rng) {
            last.push_str(repeat_draw(rng, &lists.suffixes, NameColumn::Suffixes)?);
        }

        if config.titles_enabled() && adds_optional_part(rng) {
            let title = fresh_draw(rng, &lists.titles, &mut title_used, NameColumn::Titles)?;
            buffer.push_str(&format!("{first} {last} the {title}\n"));
        } else {
            buffer.push_str(&format!("{first} {last}\n"));
        }
    }

    debug!(count, titles = title_used.len(), "generated name block");
    Ok(vec![buffer])
}

/// Lists fetched for one generation run.
///
/// Lists for disabled features are never fetched and stay empty.
#[derive(Debug, Default)]
struct NameLists {
    first_names: Vec<String>,
    last_names: Vec<String>,
    titles: Vec<String>,
    suffixes: Vec<String>,
    titles_needed: bool,
    suffixes_needed: bool,
}

impl NameLists {
    fn fetch<S>(config: &SheetConfig, source: &S) -> Result<Self, NameGenerationError>
    where
        S: NameSource + ?Sized,
    {
        let mut lists = Self {
            first_names: fetch_column(config, source, NameColumn::FirstNames)?,
            last_names: fetch_column(config, source, NameColumn::LastNames)?,
            titles_needed: config.titles_enabled(),
            suffixes_needed: config.second_name_appends_enabled(),
            ..Self::default()
        };
        if lists.titles_needed {
            lists.titles = fetch_column(config, source, NameColumn::Titles)?;
        }
        if lists.suffixes_needed {
            lists.suffixes = fetch_column(config, source, NameColumn::Suffixes)?;
        }
        Ok(lists)
    }

    /// Fails fast on lists that cannot serve `count` names.
    ///
    /// Title exhaustion depends on the draws and is only detected while
    /// generating.
    fn validate(&self, count: usize) -> Result<(), NameGenerationError> {
        if count == 0 {
            return Ok(());
        }

        let required = [
            (NameColumn::FirstNames, &self.first_names, true),
            (NameColumn::LastNames, &self.last_names, true),
            (NameColumn::Titles, &self.titles, self.titles_needed),
            (NameColumn::Suffixes, &self.suffixes, self.suffixes_needed),
        ];
        if let Some((column, _, _)) = required
            .iter()
            .find(|(_, list, needed)| *needed && list.is_empty())
        {
            return Err(NameGenerationError::EmptyList { column: *column });
        }

        for (column, list) in [
            (NameColumn::FirstNames, &self.first_names),
            (NameColumn::LastNames, &self.last_names),
        ] {
            if count > list.len() {
                return Err(NameGenerationError::Exhausted {
                    column,
                    requested: count,
                    available: list.len(),
                });
            }
        }
        Ok(())
    }
}

fn fetch_column<S>(
    config: &SheetConfig,
    source: &S,
    column: NameColumn,
) -> Result<Vec<String>, NameGenerationError>
where
    S: NameSource + ?Sized,
{
    let list = source
        .fetch(column.range(), config)
        .map_err(|source_error| NameGenerationError::Fetch {
            column,
            source: source_error,
        })?;
    debug!(%column, len = list.len(), "fetched name list");
    Ok(list)
}

/// Draws a value whose index has not been used yet in this run.
///
/// Samples uniformly and retries on collisions. After
/// [`MAX_DRAW_ATTEMPTS`] collisions it picks uniformly among the indices
/// still unused, so the draw always terminates.
fn fresh_draw<'a, R>(
    rng: &mut R,
    list: &'a [String],
    used: &mut HashSet<usize>,
    column: NameColumn,
) -> Result<&'a str, NameGenerationError>
where
    R: Rng + ?Sized,
{
    if list.is_empty() {
        return Err(NameGenerationError::EmptyList { column });
    }
    if used.len() >= list.len() {
        return Err(NameGenerationError::Exhausted {
            column,
            requested: used.len() + 1,
            available: list.len(),
        });
    }

    for _ in 0..MAX_DRAW_ATTEMPTS {
        let index = rng.random_range(0..list.len());
        if let Some(value) = list.get(index).filter(|_| used.insert(index)) {
            return Ok(value.as_str());
        }
    }

    warn!(
        %column,
        used = used.len(),
        available = list.len(),
        "falling back to scan of unused values"
    );
    let remaining: Vec<(usize, &'a String)> = list
        .iter()
        .enumerate()
        .filter(|(index, _)| !used.contains(index))
        .collect();
    let (index, value) = remaining
        .choose(rng)
        .copied()
        .ok_or(NameGenerationError::Exhausted {
            column,
            requested: used.len() + 1,
            available: list.len(),
        })?;
    used.insert(index);
    Ok(value.as_str())
}

/// Draws any value from `list`; repeats are allowed.
fn repeat_draw<'a, R>(
    rng: &mut R,
    list: &'a [String],
    column: NameColumn,
) -> Result<&'a str, NameGenerationError>
where
    R: Rng + ?Sized,
{
    list.choose(rng)
        .map(String::as_str)
        .ok_or(NameGenerationError::EmptyList { column })
}

fn adds_optional_part<R>(rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    rng.random_range(0..OPTIONAL_PART_RANGE) > OPTIONAL_PART_THRESHOLD
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
