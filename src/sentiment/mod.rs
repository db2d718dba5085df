//! Sentiment scoring
//!
//! Includes:
//! - Lexicon of sentiment words, modifiers and negations
//! - Lexicon-based polarity analyzer
//! - Scorer that turns polarity into labelled records

mod analyzer;
mod lexicon;
mod scorer;

pub use analyzer::{LexiconAnalysis, LexiconAnalyzer, PolarityAnalyzer, ScoredWord};
pub use lexicon::{EnglishLexicon, LexiconStats, SentimentLexicon};
pub use scorer::Scorer;
