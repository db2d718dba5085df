//! Data types for scored tweets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Score above zero
    Positive,
    /// Score below zero
    Negative,
    /// Score exactly zero
    Neutral,
}

impl Sentiment {
    /// All labels in display order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Label for a polarity score.
    ///
    /// The comparison is exact: only `0.0` is neutral. NaN is neither above
    /// nor below zero and therefore neutral too.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tweet together with its label and polarity score.
///
/// Fields are private so a record cannot be changed after scoring, and the
/// label is always derived from the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    text: String,
    sentiment: Sentiment,
    score: f64,
}

impl SentimentRecord {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        // -0.0 prints as "-0.0", keep neutral scores canonical
        let score = if score == 0.0 { 0.0 } else { score };
        Self {
            text: text.into(),
            sentiment: Sentiment::from_score(score),
            score,
        }
    }

    /// Original tweet text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    /// Polarity score in [-1.0, 1.0]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// "Sentiment: <label> (Score: <score>)"
    pub fn sentiment_line(&self) -> String {
        format!("Sentiment: {} (Score: {})", self.sentiment, format_score(self.score))
    }
}

impl fmt::Display for SentimentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tweet: {}\n{}", self.text, self.sentiment_line())
    }
}

/// Format a score like a float literal: integral values keep one decimal
/// ("1.0", "0.0"), everything else uses the shortest round-trip form.
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        format!("{}", score)
    }
}
