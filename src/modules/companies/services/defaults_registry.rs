use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{AppError, Result};
use crate::modules::companies::models::CompanyDefaults;

#[derive(Debug, Deserialize)]
struct DefaultsFile {
    #[serde(default)]
    companies: Vec<CompanyDefaults>,
}

/// Lookup of invoice defaults by company id, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct CompanyDefaultsRegistry {
    companies: HashMap<String, CompanyDefaults>,
}

impl CompanyDefaultsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from already parsed entries
    ///
    /// Rejects duplicate company ids and CGST/SGST rates that differ.
    pub fn from_entries(entries: Vec<CompanyDefaults>) -> Result<Self> {
        let mut companies = HashMap::with_capacity(entries.len());

        for entry in entries {
            if !entry.gst.is_mirrored() {
                return Err(AppError::configuration(format!(
                    "Company {} has CGST rate {} but SGST rate {}; they must match",
                    entry.company_id, entry.gst.cgst_rate, entry.gst.sgst_rate
                )));
            }

            let id = entry.company_id.clone();
            if companies.insert(id.clone(), entry).is_some() {
                return Err(AppError::configuration(format!(
                    "Duplicate company defaults for {}",
                    id
                )));
            }
        }

        Ok(Self { companies })
    }

    /// Parse the YAML defaults document (a top-level `companies` list)
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: DefaultsFile = serde_yaml::from_str(yaml)?;
        Self::from_entries(file.companies)
    }

    /// Read and parse a YAML defaults file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let registry = Self::from_yaml_str(&contents)?;

        tracing::info!(
            path = %path.display(),
            companies = registry.len(),
            "Loaded company invoice defaults"
        );

        Ok(registry)
    }

    pub fn get(&self, company_id: &str) -> Result<&CompanyDefaults> {
        self.companies
            .get(company_id)
            .ok_or_else(|| AppError::not_found(format!("Company defaults for {}", company_id)))
    }

    /// Company ids in sorted order
    pub fn company_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.companies.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}
