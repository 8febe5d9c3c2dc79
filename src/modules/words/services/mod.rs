pub mod amount_in_words;

pub use amount_in_words::{amount_in_words, convert_amount_to_words, MAX_AMOUNT_IN_WORDS};
