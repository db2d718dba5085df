//! Text processing

mod tokenizer;

pub use tokenizer::Tokenizer;
