//! Random fictional name generation from spreadsheet-backed name lists.
//!
//! This crate combines first names, last names, optional titles and optional
//! last-name suffixes into a block of distinct-looking names, ready to post as
//! a single message. The lists live in four columns of a spreadsheet and are
//! fetched through the [`NameSource`] port on every run.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Fetching name lists from the Google Sheets v4 values API
//! - Drawing first names, last names and titles without repetition per run
//! - Optional titles and suffixes, each switched off independently
//! - Injecting a seeded random source for reproducible output
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use sheet_names::{SheetConfig, StaticNameSource, generate_names_with_rng};
//!
//! let source = StaticNameSource::new(
//!     vec!["Billy".to_owned(), "Joe".to_owned(), "Lenny".to_owned()],
//!     vec!["Berube".to_owned(), "Smith".to_owned(), "Anderson".to_owned()],
//!     vec!["Bard".to_owned(), "Knight".to_owned(), "Wizard".to_owned()],
//!     vec!["foo".to_owned(), "bar".to_owned()],
//! );
//! let config = SheetConfig::new("https://test.url/", "123foo", "456bar", "NameList", 1, "testing:\n");
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let block = generate_names_with_rng(3, &config, &source, &mut rng).expect("generation succeeds");
//!
//! assert_eq!(block.len(), 1);
//! assert_eq!(block[0].lines().count(), 4);
//! ```

pub mod cli;
mod config;
mod error;
mod generator;
mod sheets;
mod source;

pub use config::{DEFAULT_SHEETS_URL, SheetConfig};
pub use error::{FetchError, NameGenerationError};
pub use generator::{generate_names, generate_names_with_rng};
pub use sheets::{DEFAULT_FETCH_TIMEOUT, GoogleSheetsSource};
pub use source::{NameColumn, NameSource, StaticNameSource};
