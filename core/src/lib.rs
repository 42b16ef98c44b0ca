pub mod frequency;
pub mod ranking;
pub mod tokenizer;

pub use frequency::{build_frequency_table, build_frequency_table_with, FrequencyTable};
pub use ranking::{rank, rank_with, rank_with_table, score, score_with, weigh, RankedList, ScoredTitle};
pub use tokenizer::{tokenize, tokenize_with, CharPolicy};
