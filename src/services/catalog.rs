use crate::models::ProviderProfile;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the provider catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate provider id: {0}")]
    DuplicateId(String),

    #[error("Invalid provider {id}: {reason}")]
    InvalidProvider { id: String, reason: String },
}

/// Fixed, ordered pool of providers handed to the matcher on every request
#[derive(Debug, Clone, Default)]
pub struct ProviderCatalog {
    providers: Vec<ProviderProfile>,
}

impl ProviderCatalog {
    /// Build a catalog, rejecting duplicate ids and non-positive session rates
    pub fn new(providers: Vec<ProviderProfile>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(providers.len());

        for provider in &providers {
            if !seen.insert(provider.id.as_str()) {
                return Err(CatalogError::DuplicateId(provider.id.clone()));
            }

            if !(provider.session_rate.is_finite() && provider.session_rate > 0.0) {
                return Err(CatalogError::InvalidProvider {
                    id: provider.id.clone(),
                    reason: format!("session rate must be positive, got {}", provider.session_rate),
                });
            }
        }

        Ok(Self { providers })
    }

    /// Parse a JSON array of provider profiles
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let providers: Vec<ProviderProfile> = serde_json::from_str(json)?;
        Self::new(providers)
    }

    /// Load the catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        tracing::info!("Loaded {} providers from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    pub fn providers(&self) -> &[ProviderProfile] {
        &self.providers
    }

    pub fn get(&self, id: &str) -> Option<&ProviderProfile> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
