use colored::Colorize;

/// Print a warning message
pub fn warning_message(message: &str) {
    eprintln!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    eprintln!("{} {}", "ℹ️ ".blue(), message.blue());
}
