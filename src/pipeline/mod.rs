//! Record pipeline
//!
//! Includes:
//! - Collection runners for built-in and user-entered tweets
//! - Keyword filter

mod filter;
mod runner;

pub use filter::{filter_by_keyword, matching_records};
pub use runner::{CollectionRunner, EXIT_TOKEN, PREDEFINED_TWEETS};
