//! Collection runners
//!
//! Score a sequence of tweets, printing each record as it is produced

use std::io::{BufRead, Write};

use tracing::info;

use crate::console;
use crate::error::Result;
use crate::models::SentimentRecord;
use crate::sentiment::{PolarityAnalyzer, Scorer};

/// Built-in tweets used by the predefined and filter flows
pub const PREDEFINED_TWEETS: [&str; 7] = [
    "I love programming!",
    "The weather is terrible today.",
    "Python is amazing for data science.",
    "I'm so tired of waiting in traffic.",
    "Today is an average day.",
    "Exams are so stressful!",
    "This coffee is fantastic!",
];

/// Token that ends interactive tweet entry (case-insensitive)
pub const EXIT_TOKEN: &str = "exit";

/// Runs a [`Scorer`] over a sequence of texts
pub struct CollectionRunner<'a, A> {
    scorer: &'a Scorer<A>,
}

impl<'a, A: PolarityAnalyzer> CollectionRunner<'a, A> {
    pub fn new(scorer: &'a Scorer<A>) -> Self {
        Self { scorer }
    }

    /// Score the built-in tweets
    pub fn run_predefined<W: Write>(&self, out: &mut W) -> Result<Vec<SentimentRecord>> {
        writeln!(out, "\nPredefined Tweets Analysis")?;
        self.run_texts(&PREDEFINED_TWEETS, out)
    }

    /// Score the given texts in order, printing a rule and then every record
    pub fn run_texts<S, W>(&self, texts: &[S], out: &mut W) -> Result<Vec<SentimentRecord>>
    where
        S: AsRef<str>,
        W: Write,
    {
        writeln!(out, "{}", console::rule())?;

        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            let record = self.scorer.record(text.as_ref());
            writeln!(out, "{}\n", record)?;
            results.push(record);
        }

        info!(count = results.len(), "scored tweets");
        Ok(results)
    }

    /// Read tweets until the exit token or end of input and score each one
    pub fn run_interactive<R, W>(&self, input: &mut R, out: &mut W) -> Result<Vec<SentimentRecord>>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(out, "\nEnter your tweets (type '{}' to finish):", EXIT_TOKEN)?;
        writeln!(out, "{}", console::rule())?;

        let mut results = Vec::new();
        while let Some(line) = console::prompt(input, out, "Tweet: ")? {
            if is_exit_token(&line) {
                break;
            }

            let record = self.scorer.record(&line);
            writeln!(out, "{}\n", record.sentiment_line())?;
            results.push(record);
        }

        info!(count = results.len(), "scored user tweets");
        Ok(results)
    }
}

fn is_exit_token(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_TOKEN)
}
