//! Sentiment lexicons

use std::collections::HashMap;

/// A word-level sentiment dictionary
pub trait SentimentLexicon {
    /// Score of a word (-1.0 to 1.0)
    fn get_score(&self, word: &str) -> Option<f64>;

    /// Whether the word carries sentiment
    fn contains(&self, word: &str) -> bool;

    /// All sentiment words
    fn words(&self) -> Vec<&str>;
}

/// General-purpose English sentiment lexicon
#[derive(Debug, Clone)]
pub struct EnglishLexicon {
    /// Positive words with scores
    positive: HashMap<String, f64>,
    /// Negative words with scores
    negative: HashMap<String, f64>,
    /// Intensifiers and dampeners
    modifiers: HashMap<String, f64>,
    /// Negations
    negations: Vec<String>,
}

impl EnglishLexicon {
    /// Create a lexicon with the built-in word lists
    pub fn new() -> Self {
        let mut positive = HashMap::new();
        let mut negative = HashMap::new();
        let mut modifiers = HashMap::new();

        // Strongly positive (0.7 - 1.0)
        let strong_positive = [
            ("love", 0.7),
            ("loved", 0.7),
            ("loving", 0.7),
            ("amazing", 0.8),
            ("awesome", 0.8),
            ("excellent", 0.9),
            ("fantastic", 0.8),
            ("wonderful", 0.9),
            ("incredible", 0.85),
            ("brilliant", 0.85),
            ("perfect", 1.0),
            ("best", 1.0),
            ("outstanding", 0.9),
            ("superb", 0.9),
            ("delightful", 0.85),
            ("great", 0.8),
            ("beautiful", 0.85),
            ("thrilled", 0.8),
            ("adore", 0.8),
        ];

        // Moderately positive (0.2 - 0.6)
        let moderate_positive = [
            ("good", 0.6),
            ("nice", 0.6),
            ("happy", 0.6),
            ("glad", 0.5),
            ("like", 0.3),
            ("enjoy", 0.5),
            ("enjoyed", 0.5),
            ("fun", 0.4),
            ("cool", 0.35),
            ("pleasant", 0.5),
            ("interesting", 0.5),
            ("exciting", 0.5),
            ("excited", 0.5),
            ("helpful", 0.4),
            ("useful", 0.3),
            ("easy", 0.4),
            ("fine", 0.4),
            ("better", 0.5),
            ("calm", 0.3),
            ("sunny", 0.3),
            ("fresh", 0.3),
            ("win", 0.5),
            ("success", 0.5),
            ("thanks", 0.4),
            ("thank", 0.4),
        ];

        // Strongly negative (-0.7 to -1.0)
        let strong_negative = [
            ("terrible", -1.0),
            ("horrible", -1.0),
            ("awful", -1.0),
            ("worst", -1.0),
            ("hate", -0.8),
            ("hated", -0.8),
            ("disgusting", -1.0),
            ("miserable", -0.9),
            ("furious", -0.9),
            ("disaster", -0.9),
            ("dreadful", -0.9),
            ("pathetic", -0.8),
            ("useless", -0.7),
            ("stressful", -0.6),
            ("stressed", -0.6),
            ("angry", -0.6),
        ];

        // Moderately negative (-0.2 to -0.6)
        let moderate_negative = [
            ("bad", -0.7),
            ("sad", -0.5),
            ("tired", -0.4),
            ("boring", -0.6),
            ("bored", -0.5),
            ("annoying", -0.6),
            ("annoyed", -0.5),
            ("upset", -0.5),
            ("worse", -0.6),
            ("poor", -0.4),
            ("hard", -0.3),
            ("difficult", -0.4),
            ("slow", -0.3),
            ("late", -0.3),
            ("wrong", -0.5),
            ("sick", -0.6),
            ("broken", -0.5),
            ("lost", -0.4),
            ("fail", -0.5),
            ("failed", -0.5),
            ("worried", -0.5),
            ("ugly", -0.7),
            ("cold", -0.3),
            ("rainy", -0.2),
        ];

        for (word, score) in strong_positive.iter().chain(moderate_positive.iter()) {
            positive.insert(word.to_string(), *score);
        }

        for (word, score) in strong_negative.iter().chain(moderate_negative.iter()) {
            negative.insert(word.to_string(), *score);
        }

        let modifier_words = [
            ("very", 1.5),
            ("really", 1.4),
            ("extremely", 1.8),
            ("incredibly", 1.7),
            ("super", 1.5),
            ("absolutely", 1.6),
            ("totally", 1.4),
            ("completely", 1.5),
            ("highly", 1.4),
            ("so", 1.3),
            ("too", 1.3),
            ("quite", 1.2),
            ("pretty", 1.1),
            ("somewhat", 0.8),
            ("slightly", 0.7),
            ("barely", 0.6),
            ("little", 0.7),
            ("kinda", 0.8),
        ];

        for (word, multiplier) in modifier_words {
            modifiers.insert(word.to_string(), multiplier);
        }

        let negations = [
            "not", "no", "never", "neither", "nor", "nobody", "nothing", "nowhere",
            "dont", "don't", "doesnt", "doesn't", "didnt", "didn't",
            "cant", "can't", "cannot", "couldnt", "couldn't", "wont", "won't",
            "wouldnt", "wouldn't", "shouldnt", "shouldn't", "isnt", "isn't",
            "arent", "aren't", "wasnt", "wasn't", "werent", "weren't",
            "havent", "haven't", "hasnt", "hasn't", "hadnt", "hadn't",
        ]
        .into_iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            positive,
            negative,
            modifiers,
            negations,
        }
    }

    /// Whether the word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Multiplier applied to the next sentiment word
    pub fn get_modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(&word.to_lowercase()).copied()
    }

    /// Add or replace a sentiment word. Scores are clamped to [-1.0, 1.0].
    pub fn add_word(&mut self, word: &str, score: f64) {
        let word_lower = word.to_lowercase();
        let score = score.clamp(-1.0, 1.0);

        self.positive.remove(&word_lower);
        self.negative.remove(&word_lower);

        if score >= 0.0 {
            self.positive.insert(word_lower, score);
        } else {
            self.negative.insert(word_lower, score);
        }
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            positive_count: self.positive.len(),
            negative_count: self.negative.len(),
            modifier_count: self.modifiers.len(),
            negation_count: self.negations.len(),
        }
    }
}

impl Default for EnglishLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon for EnglishLexicon {
    fn get_score(&self, word: &str) -> Option<f64> {
        let word_lower = word.to_lowercase();

        self.positive
            .get(&word_lower)
            .or_else(|| self.negative.get(&word_lower))
            .copied()
    }

    fn contains(&self, word: &str) -> bool {
        let word_lower = word.to_lowercase();
        self.positive.contains_key(&word_lower) || self.negative.contains_key(&word_lower)
    }

    fn words(&self) -> Vec<&str> {
        self.positive
            .keys()
            .chain(self.negative.keys())
            .map(|s| s.as_str())
            .collect()
    }
}

/// Lexicon size summary
#[derive(Debug, Clone)]
pub struct LexiconStats {
    pub positive_count: usize,
    pub negative_count: usize,
    pub modifier_count: usize,
    pub negation_count: usize,
}
