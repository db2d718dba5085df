//! Scorer: text in, labelled record out

use tracing::debug;

use crate::models::{Sentiment, SentimentRecord};
use crate::sentiment::analyzer::{LexiconAnalyzer, PolarityAnalyzer};

/// Labels texts using a polarity source
#[derive(Debug, Clone)]
pub struct Scorer<A = LexiconAnalyzer> {
    analyzer: A,
}

impl Scorer<LexiconAnalyzer> {
    /// Scorer backed by the built-in lexicon analyzer
    pub fn new() -> Self {
        Self::with_analyzer(LexiconAnalyzer::new())
    }
}

impl Default for Scorer<LexiconAnalyzer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PolarityAnalyzer> Scorer<A> {
    pub fn with_analyzer(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// Label and polarity score of a text
    pub fn score(&self, text: &str) -> (Sentiment, f64) {
        let record = self.record(text);
        (record.sentiment(), record.score())
    }

    /// Score a text into an immutable record
    pub fn record(&self, text: &str) -> SentimentRecord {
        let raw = self.analyzer.polarity(text);
        let score = raw.clamp(-1.0, 1.0);
        debug!(score, "scored text");
        SentimentRecord::new(text, score)
    }

    /// Score texts in order without printing
    pub fn score_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SentimentRecord> {
        texts.iter().map(|t| self.record(t.as_ref())).collect()
    }
}
