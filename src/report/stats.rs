//! Label statistics

use std::fmt;

use crate::console;
use crate::models::{Sentiment, SentimentRecord};

/// Number of records per label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn from_records(records: &[SentimentRecord]) -> Self {
        let mut counts = Self::default();
        for record in records {
            match record.sentiment() {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Negative => counts.negative += 1,
                Sentiment::Neutral => counts.neutral += 1,
            }
        }
        counts
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Counts and percentages of a result set
#[derive(Debug, Clone, PartialEq)]
pub enum Statistics {
    /// Nothing was analyzed, percentages are undefined
    NoData,
    Summary {
        counts: SentimentCounts,
        total: usize,
    },
}

impl Statistics {
    pub fn from_records(records: &[SentimentRecord]) -> Self {
        let counts = SentimentCounts::from_records(records);
        match counts.total() {
            0 => Statistics::NoData,
            total => Statistics::Summary { counts, total },
        }
    }

    /// Percentage of records with the given label; `None` without data
    pub fn percentage(&self, sentiment: Sentiment) -> Option<f64> {
        match self {
            Statistics::NoData => None,
            Statistics::Summary { counts, total } => {
                Some(counts.get(sentiment) as f64 / *total as f64 * 100.0)
            }
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nStatistical Overview:")?;
        writeln!(f, "{}", console::rule())?;

        match self {
            Statistics::NoData => write!(f, "No tweets analyzed."),
            Statistics::Summary { counts, total } => {
                write!(f, "Total Tweets Analyzed: {}", total)?;
                for sentiment in Sentiment::ALL {
                    let pct = self.percentage(sentiment).unwrap_or_default();
                    write!(f, "\n{} Tweets: {} ({:.2}%)", sentiment, counts.get(sentiment), pct)?;
                }
                Ok(())
            }
        }
    }
}
