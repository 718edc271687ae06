//! Static screen text.

use super::quotes::QuoteBook;
use crate::config::{ShellConfig, APP_VERSION};
use crate::snapshot::format::format_duration;
use std::fmt::Write;
use std::time::Duration;

pub const WARNING: &str = "\
NOTICE: this is a joke program.
It does not touch your computer in any way.
Quitting puts everything back as it was.";

pub fn banner() -> String {
    format!("Yajuws OS {APP_VERSION}")
}

pub fn main_menu(uptime: Duration) -> String {
    format!(
        "\
[1] File manager
[2] System information
[3] Quote generator
[4] Error diagnosis
[5] Tools (clock / timer / mini game)
[6] Quote history and favourites
[7] Settings
[8] Task manager (top-like)
[9] Quit

Uptime: {}",
        format_duration(uptime)
    )
}

pub fn tools_menu() -> &'static str {
    "\
[1] Real-time clock
[2] Countdown timer
[3] Uptime checker
[4] Rock-paper-scissors
[5] Back"
}

pub const FILE_MANAGER: &str = "\
C:\\Yajuws\\yaju.exe              666 MB
C:\\Yajuws\\senpai.iso             24 GB
C:\\Yajuws\\quotes.txt            114514 KB
C:\\Yajuws\\legend.mp3            inf MB

Note: none of these files exist.";

/// Diagnosis results, picked at random.
pub const DIAGNOSES: [&str; 3] = [
    "OK: system healthy.",
    "Warning: running low on quotes. Refill with the quote generator (3).",
    "Error: something is seriously wrong. Try turning it off and on again.",
];

pub const HAND_MENU: &str = "[1] Rock  [2] Scissors  [3] Paper  [4] Back";

pub const QUOTE_KEYS: &str = "[Enter] next / [q] main menu / [f] toggle favourite";

pub const HISTORY_KEYS: &str =
    "[number] toggle favourite / [f] favourites / [c] clear history / [q] back";

pub fn history(book: &QuoteBook) -> String {
    if book.history_len() == 0 {
        return "No history yet. Spin the quote generator first.".to_string();
    }
    let mut text = String::from("Recent quotes (newest 10):");
    for (number, quote) in book.recent() {
        let mark = if book.is_favourite(quote) { " *" } else { "" };
        let _ = write!(text, "\n{number}) {quote}{mark}");
    }
    text
}

pub fn favourites(book: &QuoteBook) -> String {
    if book.favourites().is_empty() {
        return "No favourites yet.".to_string();
    }
    let mut lines = Vec::with_capacity(book.favourites().len());
    for (i, quote) in book.favourites().iter().enumerate() {
        lines.push(format!("{}) {quote}", i + 1));
    }
    lines.join("\n")
}

pub fn system_info(uptime: Duration, os_env: Option<&str>) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "OS: Yajuws OS {APP_VERSION}");
    let _ = writeln!(
        text,
        "Host OS: {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    if let Some(os) = os_env.filter(|os| !os.is_empty()) {
        let _ = writeln!(text, "OS environment variable: {os}");
    }
    let _ = write!(text, "Uptime: {}", format_duration(uptime));
    text
}

pub fn settings(config: &ShellConfig) -> String {
    format!(
        "\
Fast boot: {}
Colour: {}
Theme: {}

[1] Toggle fast boot
[2] Toggle colour
[3] Change theme (amber/green/cyan)
[4] Back",
        on_off(config.fast_boot),
        on_off(config.use_color),
        config.theme
    )
}

pub fn farewell(uptime: Duration) -> String {
    format!(
        "Shutting down Yajuws OS {APP_VERSION}. See you again!\nUptime: {}",
        format_duration(uptime)
    )
}

const fn on_off(value: bool) -> &'static str {
    if value {
        "ON"
    } else {
        "OFF"
    }
}
