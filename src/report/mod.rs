//! Reporting
//!
//! Includes:
//! - Export of results to a flat text file
//! - Count and percentage statistics
//! - Terminal bar and pie charts

mod chart;
mod export;
mod stats;

pub use chart::{colorize, ChartRenderer};
pub use export::export_results;
pub use stats::{SentimentCounts, Statistics};
