//! Terminal messages for success and failure.
use colored::Colorize;

const TICK: &str = "✓";
const ERROR: &str = "Error:";

/// Print a success message.
pub fn success(msg: impl AsRef<str>) {
    println!("{}", success_line(msg.as_ref()));
}

/// Print an informational message.
pub fn info(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().cyan());
}

/// Print an error message for failure.
pub fn fail(msg: impl AsRef<str>) {
    println!("{}", fail_line(msg.as_ref()));
}

/// Formatted success line without a trailing newline.
pub fn success_line(msg: &str) -> String {
    format!("{} {}", msg.green(), TICK.green())
}

fn fail_line(msg: &str) -> String {
    format!("{} {}", ERROR.red(), msg)
}
