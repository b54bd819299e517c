//! Google Sheets outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `NameSource` port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_FETCH_TIMEOUT, GoogleSheetsSource};
