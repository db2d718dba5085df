//! Text tokenizer
//!
//! Splits a tweet into lowercase words for lexicon lookup

use regex::Regex;
use std::sync::LazyLock;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());
/// A word, optionally with one apostrophe suffix ("don't", "i'm")
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:'[\p{L}]+)?").unwrap());

/// Text tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum word length
    min_word_length: usize,
    /// Maximum word length
    max_word_length: usize,
    /// Drop URLs and @mentions before splitting
    strip_special: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            min_word_length: 1,
            max_word_length: 50,
            strip_special: true,
        }
    }

    /// Set minimum word length
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Set maximum word length
    pub fn with_max_length(mut self, len: usize) -> Self {
        self.max_word_length = len;
        self
    }

    /// Keep or drop URLs and @mentions
    pub fn strip_special(mut self, strip: bool) -> Self {
        self.strip_special = strip;
        self
    }

    /// Tokenize text into lowercase words. Hashtags keep their word.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut processed = text.replace('\u{2019}', "'").to_lowercase();

        if self.strip_special {
            processed = URL_REGEX.replace_all(&processed, " ").into_owned();
            processed = MENTION_REGEX.replace_all(&processed, " ").into_owned();
        }

        WORD_REGEX
            .find_iter(&processed)
            .map(|m| m.as_str())
            .filter(|w| {
                let len = w.chars().count();
                len >= self.min_word_length && len <= self.max_word_length
            })
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
