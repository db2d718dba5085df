//! # Tweet sentiment analysis
//!
//! Classifies short texts into Positive / Negative / Neutral, then exports,
//! filters, counts and charts the results from an interactive menu.
//!
//! ## Modules
//!
//! - `models` - Result records and sentiment labels
//! - `nlp` - Tokenization
//! - `sentiment` - Lexicon, polarity analyzer and scorer
//! - `pipeline` - Collection runners and keyword filter
//! - `report` - Export, statistics and terminal charts
//! - `menu` - Interactive menu loop
//! - `console` - Prompt and line-reading helpers
//! - `config` - Application configuration
//! - `error` - Error types

pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod sentiment;

pub use config::{load_config, AppConfig, ConfigError};
pub use error::{Error, Result};
pub use menu::{Menu, MenuChoice};
pub use models::{Sentiment, SentimentRecord};
pub use nlp::Tokenizer;
pub use pipeline::{filter_by_keyword, CollectionRunner, PREDEFINED_TWEETS};
pub use report::{export_results, ChartRenderer, Statistics};
pub use sentiment::{EnglishLexicon, LexiconAnalyzer, PolarityAnalyzer, Scorer, SentimentLexicon};
