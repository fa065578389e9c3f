use crate::sheets::error::SheetsError;
use crate::sheets::types::ValueRange;

pub(crate) mod client;
pub use client::SheetsClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SheetsApi: Send + Sync {
    /// Reads one cell range from the given spreadsheet.
    async fn get_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        api_key: &str,
    ) -> Result<ValueRange, SheetsError>;
}
