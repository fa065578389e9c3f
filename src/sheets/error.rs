//! Error handling for the sheets module

use crate::sheets::types::ErrorEnvelope;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status whose body carried no structured error payload.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Structured error payload returned by the values API.
    #[error("API error {code} ({status}): {message}")]
    Api {
        code: u16,
        status: String,
        message: String,
    },
}

impl SheetsError {
    /// Builds the error for a non-success response, preferring the API's
    /// structured payload over the raw body text.
    pub async fn from_response(response: reqwest::Response) -> SheetsError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(ErrorEnvelope { error: Some(error) }) => SheetsError::Api {
                code: error.code,
                status: error.status,
                message: error.message,
            },
            _ => SheetsError::Http {
                status,
                message: body,
            },
        }
    }
}
