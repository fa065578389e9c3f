//! Spreadsheet Values Client
//!
//! A thin client for the Google Sheets values API, reading fixed cell ranges
//! with an API-key credential.

use crate::consts::watch_consts::http;
use crate::environment::Environment;
use crate::sheets::SheetsApi;
use crate::sheets::error::SheetsError;
use crate::sheets::types::{ErrorEnvelope, ValueRange};
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with the client version
const USER_AGENT: &str = concat!("sheetwatch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    environment: Environment,
}

impl SheetsClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}?key={api_key}`. The range
    /// contains `!` and `:` and is percent-encoded into a single path segment.
    fn build_url(&self, spreadsheet_id: &str, range: &str, api_key: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}?key={}",
            self.environment.sheets_url().trim_end_matches('/'),
            spreadsheet_id,
            urlencoding::encode(range),
            urlencoding::encode(api_key),
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, SheetsError> {
        if !response.status().is_success() {
            return Err(SheetsError::from_response(response).await);
        }
        Ok(response)
    }

    /// A success status can still carry an `error` payload; surface it as the
    /// application-level error it is.
    fn reject_error_payload(body: &str) -> Result<(), SheetsError> {
        if let Ok(ErrorEnvelope { error: Some(error) }) = serde_json::from_str(body) {
            return Err(SheetsError::Api {
                code: error.code,
                status: error.status,
                message: error.message,
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SheetsApi for SheetsClient {
    async fn get_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        api_key: &str,
    ) -> Result<ValueRange, SheetsError> {
        let url = self.build_url(spreadsheet_id, range, api_key);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.text().await?;
        Self::reject_error_payload(&body)?;

        serde_json::from_str(&body).map_err(|e| SheetsError::Http {
            status: 200,
            message: format!("Malformed values payload: {}", e),
        })
    }
}
