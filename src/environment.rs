use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the spreadsheet API endpoints the client can poll.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The public Google Sheets API.
    #[default]
    Production,
    /// A custom base URL, used for local development and tests.
    Custom { sheets_url: String },
}

impl Environment {
    /// Returns the base URL of the values API for the environment.
    pub fn sheets_url(&self) -> String {
        match self {
            Environment::Production => "https://sheets.googleapis.com".to_string(),
            Environment::Custom { sheets_url } => sheets_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "production" => Ok(Environment::Production),
            custom if custom.starts_with("http://") || custom.starts_with("https://") => {
                Ok(Environment::Custom {
                    sheets_url: s.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.sheets_url())
    }
}
