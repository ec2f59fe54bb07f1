//! Heuristic text insights for a publication
//!
//! Leading sentences become key findings and the first distinct long,
//! non-stopword terms become critical terms. No scoring model is involved.

mod extract;
mod stopwords;
mod tokenizer;

pub use extract::{
    InsightExtractor, Insights, TextHighlights, CRITICAL_TERM_COUNT, KEY_FINDING_COUNT,
};
pub use stopwords::is_stopword;
pub use tokenizer::{DefaultTokenizer, Tokenizer};
