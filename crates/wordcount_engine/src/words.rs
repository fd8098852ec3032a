use std::sync::LazyLock;

use regex::Regex;

/// Letters, numbers, straight and curly apostrophes, hyphens.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}’'-]+").expect("word pattern compiles"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

pub trait WordCounter: Send + Sync {
    fn count(&self, text: &str) -> u64;
}

/// Regex heuristic over Unicode letter/number categories.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordCounter;

impl WordCounter for UnicodeWordCounter {
    fn count(&self, text: &str) -> u64 {
        let normalized = normalize_whitespace(text);
        WORD.find_iter(&normalized).count() as u64
    }
}

/// Collapses whitespace runs to single spaces and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

pub fn word_count(text: &str) -> u64 {
    UnicodeWordCounter.count(text)
}
