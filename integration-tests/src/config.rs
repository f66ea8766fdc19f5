use std::fs;
use std::path::Path;

use ckan_catalog_client::{ClientConfig, CkanError, Result};
use serde::Deserialize;

const SECRETS_FILE: &str = "secrets.json";

/// Live catalog settings plus the fixtures the smoke tests rely on.
///
/// `secrets.json` is a client config file with two extra members:
///
/// ```json
/// { "catalog_url": "https://demo.ckan.org", "api_key": "...",
///   "organization": "my-org", "sample_dataset": "some-dataset" }
/// ```
#[derive(Debug)]
pub struct Secrets {
    pub config: ClientConfig,
    pub fixtures: Fixtures,
}

/// Catalog objects the smoke tests expect to exist.
#[derive(Debug, Deserialize)]
pub struct Fixtures {
    /// Organization the smoke tests may create datasets in.
    pub organization: String,
    /// A dataset known to exist on the catalog.
    pub sample_dataset: String,
}

/// Reads `secrets.json` from the working directory.
pub fn load_secrets() -> Result<Secrets> {
    let dir = std::env::current_dir()
        .map_err(|e| CkanError::InvalidArgument(format!("No working directory: {e}")))?;
    read_secrets(&dir.join(SECRETS_FILE))
}

fn read_secrets(path: &Path) -> Result<Secrets> {
    let config = ClientConfig::from_file(path)?;
    let contents = fs::read_to_string(path).map_err(|e| {
        CkanError::InvalidArgument(format!("Failed to read {}: {e}", path.display()))
    })?;
    let fixtures = serde_json::from_str(&contents)
        .map_err(|e| CkanError::decode(format!("Invalid {}: {e}", path.display())))?;
    Ok(Secrets { config, fixtures })
}
