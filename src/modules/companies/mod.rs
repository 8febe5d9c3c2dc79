pub mod controllers;
pub mod models;
pub mod services;

pub use models::CompanyDefaults;
pub use services::CompanyDefaultsRegistry;
