//! Console messaging for one-shot commands
//!
//! Labeled, color-coded output for configure, clear, and fetch. The dashboard
//! has its own event log; these helpers are only for plain-console commands.

const LABEL_INFO: &str = "\x1b[1;33m[INFO]\x1b[0m";
const LABEL_WARN: &str = "\x1b[1;91m[WARN]\x1b[0m";
const LABEL_ERROR: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const LABEL_SUCCESS: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

fn print_labeled(label: &str, title: &str, details: &str) {
    if details.is_empty() {
        println!("{} {}", label, title);
    } else {
        println!("{} {}\t {}", label, title, details);
    }
}

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    print_labeled(LABEL_INFO, title, details);
}

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    print_labeled(LABEL_WARN, title, details);
}

/// Print CLI command error
pub fn print_error(title: &str, details: Option<&str>) {
    println!("{} {}", LABEL_ERROR, title);
    if let Some(details) = details {
        println!("{} Details: {}", LABEL_ERROR, details);
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    print_labeled(LABEL_SUCCESS, title, details);
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
