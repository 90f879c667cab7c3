/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

pub fn paint(color: &str, s: &str) -> String {
    format!("{color}{s}{RESET}")
}

/// Diff color:
/// favorable → green
/// otherwise → yellow
pub fn color_for_diff(favorable: bool) -> &'static str {
    if favorable { GREEN } else { YELLOW }
}
