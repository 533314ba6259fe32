use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// `NO_COLOR` (any value) turns styling off.
fn style(codes: &[&'static str]) -> (String, &'static str) {
    if std::env::var_os("NO_COLOR").is_some() {
        (String::new(), "")
    } else {
        (codes.concat(), RESET)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    let (on, off) = style(&[FG_BLUE, BOLD]);
    println!("{}{}{} {}", on, ICON_INFO, off, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    let (on, off) = style(&[FG_GREEN, BOLD]);
    println!("{}{}{} {}", on, ICON_OK, off, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    let (on, off) = style(&[FG_YELLOW, BOLD]);
    println!("{}{}{} {}", on, ICON_WARN, off, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    let (on, off) = style(&[FG_RED, BOLD]);
    eprintln!("{}{}{} {}", on, ICON_ERR, off, msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    let (on, off) = style(&[FG_BLUE, BOLD]);
    println!("{}====================== {}{}\n", on, msg, off);
}
