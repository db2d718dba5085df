//! Terminal charts of the label distribution
//!
//! Colors: Positive green, Negative red, Neutral blue.

use std::f64::consts::TAU;
use std::io::{BufRead, Write};

use colored::{ColoredString, Colorize};
use tracing::debug;

use crate::config::ChartSettings;
use crate::console;
use crate::error::Result;
use crate::models::{Sentiment, SentimentRecord};
use crate::report::stats::SentimentCounts;

const BAR_TITLE: &str = "Sentiment Distribution (Bar Chart)";
const PIE_TITLE: &str = "Sentiment Distribution (Pie Chart)";
const EMPTY_PIE_NOTICE: &str = "No data to display in pie chart.";
const CONTINUE_PROMPT: &str = "Press Enter to continue...";
const CELL: &str = "█";

/// Paint text in the color of a sentiment
pub fn colorize(text: &str, sentiment: Sentiment) -> ColoredString {
    match sentiment {
        Sentiment::Positive => text.green(),
        Sentiment::Negative => text.red(),
        Sentiment::Neutral => text.blue(),
    }
}

/// Draws the bar and pie charts
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    /// Cells in the longest bar
    width: usize,
    /// Pie radius in rows; columns are doubled to keep the pie round
    radius: usize,
    /// Block on Enter after each chart
    pause: bool,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::from_settings(&ChartSettings::default())
    }

    pub fn from_settings(settings: &ChartSettings) -> Self {
        Self {
            width: settings.width.max(1),
            radius: settings.radius.max(1),
            pause: settings.pause,
        }
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Show the bar chart, then the pie chart, waiting for Enter after each.
    ///
    /// With no records the bar chart has three empty bars and the pie chart
    /// is replaced by a notice.
    pub fn render<R, W>(&self, records: &[SentimentRecord], input: &mut R, out: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let counts = SentimentCounts::from_records(records);
        debug!(?counts, "rendering charts");

        write!(out, "{}", self.bar_chart(&counts))?;
        self.wait(input, out)?;

        match self.pie_chart(&counts) {
            Some(pie) => {
                write!(out, "{}", pie)?;
                self.wait(input, out)?;
            }
            None => writeln!(out, "\n{}", EMPTY_PIE_NOTICE)?,
        }

        Ok(())
    }

    /// Horizontal bar per label, scaled to the largest count
    pub fn bar_chart(&self, counts: &SentimentCounts) -> String {
        let max = Sentiment::ALL.iter().map(|s| counts.get(*s)).max().unwrap_or(0);
        let label_width = Sentiment::ALL.iter().map(|s| s.as_str().len()).max().unwrap_or(0);

        let mut chart = format!("\n{}\n{}\n", BAR_TITLE.bold(), "=".repeat(BAR_TITLE.len()));
        chart.push_str(&format!("{:>width$} | Count\n", "Sentiment", width = label_width));

        for sentiment in Sentiment::ALL {
            let count = counts.get(sentiment);
            let bar_len = if max == 0 { 0 } else { count * self.width / max };
            let bar = CELL.repeat(bar_len);

            chart.push_str(&format!(
                "{:>width$} | {} {}\n",
                sentiment.as_str(),
                colorize(&bar, sentiment),
                count,
                width = label_width
            ));
        }

        chart
    }

    /// Round pie with one slice per label, or `None` when there is nothing
    /// to divide
    pub fn pie_chart(&self, counts: &SentimentCounts) -> Option<String> {
        let total = counts.total();
        if total == 0 {
            return None;
        }

        // Slice boundaries as fractions of a full turn, counter-clockwise from
        // three o'clock
        let mut bounds = Vec::with_capacity(Sentiment::ALL.len());
        let mut cumulative = 0.0;
        for sentiment in Sentiment::ALL {
            cumulative += counts.get(sentiment) as f64 / total as f64;
            bounds.push((sentiment, cumulative));
        }

        let mut chart = format!("\n{}\n{}\n", PIE_TITLE.bold(), "=".repeat(PIE_TITLE.len()));

        let r = self.radius as i64;
        for y in -r..=r {
            let cells: Vec<Option<Sentiment>> = (-2 * r..=2 * r)
                .map(|x| {
                    let dx = x as f64 / 2.0;
                    let dy = y as f64;
                    if dx * dx + dy * dy > (r * r) as f64 {
                        return None;
                    }
                    let turn = (-dy).atan2(dx).rem_euclid(TAU) / TAU;
                    bounds
                        .iter()
                        .find(|(_, upper)| turn < *upper)
                        .or(bounds.last())
                        .map(|(sentiment, _)| *sentiment)
                })
                .collect();

            chart.push_str(&paint_row(&cells));
            chart.push('\n');
        }

        chart.push('\n');
        for sentiment in Sentiment::ALL {
            let pct = counts.get(sentiment) as f64 / total as f64 * 100.0;
            chart.push_str(&format!(
                "{} {:<8} {:.1}%\n",
                colorize(CELL, sentiment),
                sentiment.as_str(),
                pct
            ));
        }

        Some(chart)
    }

    fn wait<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        if self.pause {
            console::prompt(input, out, CONTINUE_PROMPT)?;
        }
        Ok(())
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a pie row, coloring runs of equal cells and dropping trailing blanks
fn paint_row(cells: &[Option<Sentiment>]) -> String {
    let used = cells.iter().rposition(Option::is_some).map_or(0, |i| i + 1);

    let mut row = String::new();
    let mut start = 0;
    while start < used {
        let current = cells[start];
        let len = cells[start..used].iter().take_while(|c| **c == current).count();

        match current {
            Some(sentiment) => row.push_str(&colorize(&CELL.repeat(len), sentiment).to_string()),
            None => row.push_str(&" ".repeat(len)),
        }
        start += len;
    }
    row
}
