pub mod controllers;
pub mod services;

pub use services::{amount_in_words, convert_amount_to_words, MAX_AMOUNT_IN_WORDS};
