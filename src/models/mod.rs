//! Data models

mod types;

pub use types::{format_score, Sentiment, SentimentRecord};
