//! DTOs for decoding Google Sheets value-range responses.

use serde::Deserialize;

/// Body of a `values/{range}` response.
///
/// Sheets omits `values` entirely when the range holds no data, so the field
/// defaults to an empty table. Other response fields are ignored.
#[derive(Debug, Deserialize)]
pub(super) struct ValueRangeDto {
    #[serde(default)]
    pub(super) values: Vec<Vec<String>>,
}

impl ValueRangeDto {
    /// Flattens the table row by row.
    pub(super) fn into_names(self) -> Vec<String> {
        self.values.into_iter().flatten().collect()
    }
}
