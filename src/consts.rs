pub mod watch_consts {
    //! Sheetwatch Configuration Constants
    //!
    //! This module contains all configuration constants for the polling and
    //! display system, organized by functional area for clarity.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between the poller and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Capacity of the refresh-request channel. A refresh that arrives while a
    /// poll is in flight coalesces with any already-queued request.
    pub const REFRESH_QUEUE_SIZE: usize = 1;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    pub mod polling {
        /// Seconds between poll cycles.
        pub const DEFAULT_INTERVAL_SECS: u64 = 5;
    }

    // =============================================================================
    // DATA SOURCE CONFIGURATION
    // =============================================================================

    pub mod sheet {
        /// Spreadsheet polled when no other id is configured.
        pub const DEFAULT_SPREADSHEET_ID: &str = "1s4322CgyXo82YuT1BChDJX9lwV0ODcIOcUVpp0ew_5w";

        /// Sentinel API key value meaning "not configured".
        pub const PLACEHOLDER_API_KEY: &str = "YOUR_GOOGLE_API_KEY";

        /// Cell range holding the sensor column.
        pub const SENSOR_RANGE: &str = "Sheet1!A2:A5";

        /// Cell range holding the actuator column.
        pub const ACTUATOR_RANGE: &str = "Sheet1!B2:B5";
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Text shown for a slot whose cell is missing, empty, or null.
    pub const PLACEHOLDER_VALUE: &str = "--";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        /// Connect timeout for sheet requests.
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Overall request timeout for sheet requests.
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
