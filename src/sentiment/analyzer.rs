//! Polarity analyzers
//!
//! Turn a text into a polarity score in [-1.0, 1.0]

use crate::nlp::Tokenizer;
use crate::sentiment::lexicon::{EnglishLexicon, SentimentLexicon};

/// Source of polarity scores.
///
/// Implementations should return a value in [-1.0, 1.0]; the [`Scorer`]
/// clamps anything outside that range.
///
/// [`Scorer`]: crate::sentiment::Scorer
pub trait PolarityAnalyzer {
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityAnalyzer for F
where
    F: Fn(&str) -> f64,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// A sentiment word found in the text and its contribution
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: String,
    pub score: f64,
}

/// Detailed lexicon analysis of one text
#[derive(Debug, Clone)]
pub struct LexiconAnalysis {
    /// Mean contribution of the sentiment words, clamped to [-1.0, 1.0]
    pub score: f64,
    /// Words that contributed to the score
    pub key_words: Vec<ScoredWord>,
    /// Number of tokens in the text
    pub token_count: usize,
}

/// Lexicon-based polarity analyzer
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    tokenizer: Tokenizer,
    lexicon: EnglishLexicon,
    /// Tokens after a negation that get inverted
    negation_window: usize,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            lexicon: EnglishLexicon::new(),
            negation_window: 3,
        }
    }

    /// Use a custom lexicon
    pub fn with_lexicon(mut self, lexicon: EnglishLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Set the negation window
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Analyze text
    pub fn analyze(&self, text: &str) -> LexiconAnalysis {
        let tokens = self.tokenizer.tokenize(text);

        let mut total_score = 0.0;
        let mut word_count = 0;
        let mut key_words = Vec::new();
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0;

        for token in &tokens {
            if self.lexicon.is_negation(token) {
                negation_active = true;
                words_since_negation = 0;
                continue;
            }

            // Every token after a negation, modifiers included, uses up the window
            if negation_active {
                words_since_negation += 1;
                if words_since_negation > self.negation_window {
                    negation_active = false;
                }
            }

            if let Some(modifier) = self.lexicon.get_modifier(token) {
                current_modifier = modifier;
                continue;
            }

            if let Some(base_score) = self.lexicon.get_score(token) {
                let mut score = base_score * current_modifier;

                if negation_active {
                    // Invert with slight damping
                    score = -score * 0.8;
                    negation_active = false;
                }

                total_score += score;
                word_count += 1;

                key_words.push(ScoredWord {
                    word: token.clone(),
                    score,
                });

                current_modifier = 1.0;
            }
        }

        let score = if word_count > 0 {
            (total_score / word_count as f64).clamp(-1.0, 1.0)
        } else {
            0.0
        };

        LexiconAnalysis {
            score,
            key_words,
            token_count: tokens.len(),
        }
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        self.analyze(text).score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_sentiment() {
        let analyzer = LexiconAnalyzer::new();
        assert!(analyzer.polarity("I love programming!") > 0.0);
        assert!(analyzer.polarity("This coffee is fantastic!") > 0.0);
    }

    #[test]
    fn test_negative_sentiment() {
        let analyzer = LexiconAnalyzer::new();
        assert!(analyzer.polarity("The weather is terrible today.") < 0.0);
        assert!(analyzer.polarity("Exams are so stressful!") < 0.0);
    }

    #[test]
    fn test_no_sentiment_words_is_zero() {
        let analyzer = LexiconAnalyzer::new();
        assert_eq!(analyzer.polarity("Today is an average day."), 0.0);
        assert_eq!(analyzer.polarity(""), 0.0);
    }

    #[test]
    fn test_negation() {
        let analyzer = LexiconAnalyzer::new();
        assert!(analyzer.polarity("This is not good") < 0.0);
        assert!(analyzer.polarity("I don't hate it") > 0.0);
    }

    #[test]
    fn test_negation_window() {
        let analyzer = LexiconAnalyzer::new().with_negation_window(1);
        // "that" closes the window before "good" is reached
        assert!(analyzer.polarity("not really that good") > 0.0);
    }

    #[test]
    fn test_modifiers_count_toward_negation_window() {
        let narrow = LexiconAnalyzer::new().with_negation_window(1);
        assert!(narrow.polarity("not very good") > 0.0);

        let default = LexiconAnalyzer::new();
        assert!(default.polarity("not very good") < 0.0);
        assert!(default.polarity("not very very very very good") > 0.0);
    }

    #[test]
    fn test_modifier() {
        let analyzer = LexiconAnalyzer::new();

        let normal = analyzer.polarity("good");
        let intensified = analyzer.polarity("very good");
        let dampened = analyzer.polarity("slightly good");

        assert!(intensified > normal);
        assert!(dampened < normal);
    }

    #[test]
    fn test_score_is_clamped() {
        let analyzer = LexiconAnalyzer::new();
        assert_eq!(analyzer.polarity("extremely perfect"), 1.0);
        assert_eq!(analyzer.polarity("extremely terrible"), -1.0);
    }

    #[test]
    fn test_key_words() {
        let analyzer = LexiconAnalyzer::new();
        let analysis = analyzer.analyze("Good coffee, bad weather");

        let words: Vec<_> = analysis.key_words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["good", "bad"]);
        assert_eq!(analysis.token_count, 4);
    }

    #[test]
    fn test_custom_lexicon() {
        let mut lexicon = EnglishLexicon::new();
        lexicon.add_word("average", -0.15);

        let analyzer = LexiconAnalyzer::new().with_lexicon(lexicon);
        assert!(analyzer.polarity("Today is an average day.") < 0.0);
    }

    #[test]
    fn test_closure_analyzer() {
        let stub = |text: &str| if text.contains('!') { 0.5 } else { 0.0 };
        assert_eq!(stub.polarity("wow!"), 0.5);
    }
}
