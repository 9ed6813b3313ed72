use std::time::Duration;

pub const TITLE: &str = "URL Shortener";
pub const INPUT_PLACEHOLDER: &str = "Enter URL";
pub const BUTTON_SHORTEN: &str = "[ Shorten ]";
pub const RESULT_LABEL: &str = "Shortened URL:";
pub const PENDING_LABEL: &str = "Shortening...";
pub const HELP_TEXT: &str = "Enter: Shorten | Ctrl+U: Clear | Esc: Quit";

/// How long the UI loop waits for terminal input before ticking.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);
