use crate::poller::PollError;
use crate::sheets::error::SheetsError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// User-visible failure banner, one variant per failure class. Classification
/// is by status code and API status token, never by message wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// Credential missing or left at the placeholder value.
    NotConfigured,
    /// The API rejected the key itself.
    InvalidApiKey,
    /// 403-class: the key is valid but the sheet is not shared.
    AccessDenied,
    /// 404-class: no such spreadsheet or range.
    NotFound,
    /// Anything else: transport failures, server errors, malformed bodies.
    Connection(String),
}

impl Banner {
    pub fn message(&self) -> String {
        match self {
            Banner::NotConfigured => "Please configure your Google API key.".to_string(),
            Banner::InvalidApiKey => {
                "Invalid API key. Please check your Google API configuration.".to_string()
            }
            Banner::AccessDenied => {
                "Access denied. Please check your Google Sheets permissions.".to_string()
            }
            Banner::NotFound => {
                "Spreadsheet not found. Please check the spreadsheet ID.".to_string()
            }
            Banner::Connection(detail) => format!("Connection error: {}", detail),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Maps a failed poll cycle to its banner.
    pub fn classify(&self, error: &PollError) -> Banner {
        match error {
            PollError::NotConfigured => Banner::NotConfigured,
            PollError::Sheets(e) => self.classify_sheets_error(e),
        }
    }

    fn classify_sheets_error(&self, error: &SheetsError) -> Banner {
        match error {
            SheetsError::Api { status, .. } if status.as_str() == "PERMISSION_DENIED" => {
                Banner::AccessDenied
            }
            SheetsError::Api { status, .. } if status.as_str() == "NOT_FOUND" => Banner::NotFound,
            // A rejected key comes back as 400 INVALID_ARGUMENT.
            SheetsError::Api { code, status, .. }
                if *code == 400 && status.as_str() == "INVALID_ARGUMENT" =>
            {
                Banner::InvalidApiKey
            }
            SheetsError::Api { code: 403, .. } => Banner::AccessDenied,
            SheetsError::Api { code: 404, .. } => Banner::NotFound,
            SheetsError::Http { status: 403, .. } => Banner::AccessDenied,
            SheetsError::Http { status: 404, .. } => Banner::NotFound,
            other => Banner::Connection(other.to_string()),
        }
    }

    /// Log level for a failed poll cycle.
    pub fn log_level(&self, error: &PollError) -> LogLevel {
        match error {
            // Critical: the operator must act before any poll can succeed
            PollError::NotConfigured => LogLevel::Error,
            PollError::Sheets(SheetsError::Api { code: 400, .. }) => LogLevel::Error,
            PollError::Sheets(SheetsError::Api { code: 403, .. }) => LogLevel::Error,
            PollError::Sheets(SheetsError::Http { status: 403, .. }) => LogLevel::Error,

            // Non-critical: temporary server issues retried on the next tick
            PollError::Sheets(SheetsError::Http { status, .. })
                if (500..=599).contains(status) =>
            {
                LogLevel::Warn
            }

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(code: u16, status: &str) -> PollError {
        PollError::Sheets(SheetsError::Api {
            code,
            status: status.to_string(),
            message: "details elided".to_string(),
        })
    }

    fn http(status: u16) -> PollError {
        PollError::Sheets(SheetsError::Http {
            status,
            message: "body".to_string(),
        })
    }

    #[test]
    fn missing_credential_maps_to_configuration_banner() {
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify(&PollError::NotConfigured),
            Banner::NotConfigured
        );
        assert_eq!(
            classifier.log_level(&PollError::NotConfigured),
            LogLevel::Error
        );
    }

    #[test]
    fn forbidden_maps_to_access_denied() {
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify(&api(403, "PERMISSION_DENIED")),
            Banner::AccessDenied
        );
        assert_eq!(classifier.classify(&http(403)), Banner::AccessDenied);
    }

    #[test]
    fn not_found_maps_to_missing_spreadsheet() {
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify(&api(404, "NOT_FOUND")),
            Banner::NotFound
        );
        assert_eq!(classifier.classify(&http(404)), Banner::NotFound);
    }

    #[test]
    fn rejected_key_maps_to_invalid_key() {
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify(&api(400, "INVALID_ARGUMENT")),
            Banner::InvalidApiKey
        );
    }

    #[test]
    fn server_errors_fall_back_to_connection_banner() {
        let classifier = ErrorClassifier::new();
        match classifier.classify(&http(503)) {
            Banner::Connection(detail) => assert!(detail.contains("503")),
            other => panic!("unexpected banner: {:?}", other),
        }
        assert_eq!(classifier.log_level(&http(503)), LogLevel::Warn);
    }

    #[test]
    fn banner_messages_are_stable() {
        assert_eq!(
            Banner::AccessDenied.message(),
            "Access denied. Please check your Google Sheets permissions."
        );
        assert_eq!(
            Banner::NotFound.message(),
            "Spreadsheet not found. Please check the spreadsheet ID."
        );
        assert_eq!(
            Banner::InvalidApiKey.message(),
            "Invalid API key. Please check your Google API configuration."
        );
        assert!(
            Banner::Connection("timed out".to_string())
                .message()
                .starts_with("Connection error:")
        );
    }
}
