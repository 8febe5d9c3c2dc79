mod company_defaults;

pub use company_defaults::CompanyDefaults;
