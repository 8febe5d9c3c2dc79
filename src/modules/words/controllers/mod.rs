pub mod words_controller;

pub use words_controller::configure_words_routes;
