//! Error types for the sheet-names crate.
//!
//! This module defines semantic error enums for list retrieval and name
//! generation, following the project's error handling conventions with
//! `thiserror`.

use thiserror::Error;

use crate::source::NameColumn;

/// Errors surfaced by a [`NameSource`](crate::NameSource) while fetching a
/// list.
///
/// Transport failures, timeouts, non-success responses and undecodable
/// payloads are all reported here so the caller can decide what to do;
/// nothing in the crate aborts the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network transport failed before a response was received.
    #[error("name list transport failed: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// The request exceeded the configured timeout.
    #[error("name list request timed out: {message}")]
    Timeout {
        /// Description of the timeout.
        message: String,
    },

    /// The data source answered with a non-success status.
    #[error("name list request rejected: {message}")]
    Status {
        /// HTTP status and a short preview of the response body.
        message: String,
    },

    /// The response payload could not be decoded into a table of strings.
    #[error("name list response decode failed: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },

    /// The request could not be built from the configuration.
    #[error("name list request invalid: {message}")]
    InvalidRequest {
        /// Description of the invalid input.
        message: String,
    },
}

impl FetchError {
    /// Build a [`FetchError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`FetchError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`FetchError::Status`].
    pub fn status(message: impl Into<String>) -> Self {
        Self::Status {
            message: message.into(),
        }
    }

    /// Build a [`FetchError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build a [`FetchError::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

/// Errors that can occur while generating a block of names.
///
/// Every variant ends the current generation run; no partial output is
/// returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameGenerationError {
    /// A list could not be fetched from the data source.
    #[error("failed to fetch {column}: {source}")]
    Fetch {
        /// Column that was being fetched.
        column: NameColumn,
        /// Underlying data source failure.
        #[source]
        source: FetchError,
    },

    /// A list required by the enabled features is empty.
    #[error("{column} list is empty")]
    EmptyList {
        /// Column whose list came back empty.
        column: NameColumn,
    },

    /// More distinct values were requested than the list holds.
    #[error("{column} exhausted: requested {requested} distinct values but only {available} exist")]
    Exhausted {
        /// Column whose values ran out.
        column: NameColumn,
        /// Number of distinct values needed at the point of failure.
        requested: usize,
        /// Number of values the list holds.
        available: usize,
    },
}
