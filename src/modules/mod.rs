pub mod companies;
pub mod health;
pub mod invoices;
pub mod words;
