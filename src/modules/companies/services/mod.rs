pub mod defaults_registry;

pub use defaults_registry::CompanyDefaultsRegistry;
