//! Quote generator, history and favourites.

use rand::Rng;
use std::collections::VecDeque;

/// Oldest entries are dropped past this many.
pub const MAX_HISTORY: usize = 50;

/// How many recent entries the history screen lists.
pub const RECENT: usize = 10;

const QUOTES: &[&str] = &[
    "Nicely done!",
    "Twenty-four, and a student.",
    "Taking the royal road!",
    "Huh?!",
    "Ice cold, isn't it?",
    "Come on in, please.",
    "Make it catch on!",
    "Totally wrecked, I tell you.",
    "Well, I'll think about it.",
    "What on earth is this?",
    "Hungry at midnight?",
    "Let's go, let's go!",
];

/// One in twenty draws comes from here.
const LEGENDS: &[&str] = &[
    "[legend] Just take it easy for once.",
    "[legend] It's all falling apart...",
    "[legend] That sounds serious.",
];

pub fn random_quote(rng: &mut impl Rng) -> &'static str {
    let pool = if rng.random_range(0..20) == 0 {
        LEGENDS
    } else {
        QUOTES
    };
    pool[rng.random_range(0..pool.len())]
}

/// Quotes seen this session and the ones marked as favourites.
#[derive(Debug, Default)]
pub struct QuoteBook {
    /// Oldest first.
    history: VecDeque<String>,
    /// In the order they were marked.
    favourites: Vec<String>,
}

impl QuoteBook {
    pub fn record(&mut self, quote: &str) {
        if quote.is_empty() {
            return;
        }
        self.history.push_back(quote.to_string());
        while self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The last [`RECENT`] quotes, newest first, numbered from 1.
    pub fn recent(&self) -> impl Iterator<Item = (usize, &str)> {
        self.history
            .iter()
            .rev()
            .take(RECENT)
            .enumerate()
            .map(|(i, quote)| (i + 1, quote.as_str()))
    }

    /// Entry `number` of [`recent`](Self::recent).
    pub fn recent_entry(&self, number: usize) -> Option<&str> {
        if number == 0 || number > RECENT {
            return None;
        }
        let pos = self.history.len().checked_sub(number)?;
        self.history.get(pos).map(String::as_str)
    }

    /// Mark or unmark `quote`. Returns whether it is now a favourite.
    pub fn toggle_favourite(&mut self, quote: &str) -> bool {
        if quote.is_empty() {
            return false;
        }
        if let Some(pos) = self.favourites.iter().position(|f| f == quote) {
            self.favourites.remove(pos);
            false
        } else {
            self.favourites.push(quote.to_string());
            true
        }
    }

    pub fn is_favourite(&self, quote: &str) -> bool {
        self.favourites.iter().any(|f| f == quote)
    }

    pub fn favourites(&self) -> &[String] {
        &self.favourites
    }
}
