//! Wire types for the spreadsheet values API.

use serde::Deserialize;

/// One rectangular range of cells, as returned by
/// `GET /v4/spreadsheets/{id}/values/{range}`.
///
/// Cells arrive as JSON values; the sheet serves text, but numbers and bools
/// are possible and are stringified at formatting time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub range: Option<String>,
    pub major_dimension: Option<String>,
    /// Rows in order; absent entirely when the range is empty.
    pub values: Option<Vec<Vec<serde_json::Value>>>,
}

impl ValueRange {
    /// First cell of the given row, if the row exists.
    pub fn cell(&self, row: usize) -> Option<&serde_json::Value> {
        self.values.as_ref()?.get(row)?.first()
    }
}

/// Structured error payload the API can return alongside any status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Response envelope used to detect an error payload on a 200 response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<ApiErrorBody>,
}
