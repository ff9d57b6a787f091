//! # Konfiguration
//!
//! The `konfig.json` document describing one deployment environment:
//! environment metadata, chart deployments and external resources.
//!
//! ## Loading
//!
//! The document is always read from `konfig.json` in the current working
//! directory. Decoding is lenient about shape (unknown fields are ignored,
//! missing fields take their zero value) but malformed JSON is an error.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! let konfig = config::read_konfig()?;
//! println!("{}", konfig);
//! ```

mod deployment;
mod environment;

pub use deployment::{Deployment, ExternalResources};
pub use environment::Environment;

use crate::error::KonfigError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// File name of the konfiguration, resolved against the working directory
pub const KONFIG_FILE_NAME: &str = "konfig.json";

/// Environment name every decoded konfiguration is pinned to
pub const ENVIRONMENT_NAME: &str = "dev";

/// Root konfiguration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Konfiguration {
    /// Schema version of the document
    #[serde(deserialize_with = "null_as_default")]
    pub api_version: String,

    /// Deployment target
    #[serde(deserialize_with = "null_as_default")]
    pub environment: Environment,

    /// Chart deployments keyed by name
    #[serde(deserialize_with = "null_as_default")]
    pub deployments: BTreeMap<String, Deployment>,

    /// External resources and secret presets
    #[serde(deserialize_with = "null_as_default")]
    pub external_resources: ExternalResources,
}

/// Decode an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Konfiguration {
    /// Decode a konfiguration from raw JSON bytes
    ///
    /// `environment.name` is always overwritten with [`ENVIRONMENT_NAME`],
    /// whatever the document contains.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let mut konfig: Konfiguration = serde_json::from_slice(bytes)?;
        konfig.environment.name = ENVIRONMENT_NAME.to_string();
        Ok(konfig)
    }

    /// Number of deployments that take part in a run
    pub fn enabled_deployments(&self, cd: bool) -> usize {
        self.deployments
            .values()
            .filter(|dep| dep.is_enabled(cd))
            .count()
    }
}

/// Read the full content of a konfig file
///
/// The file handle is closed when this returns, on success and on error.
pub fn read_konfig_bytes(path: &Path) -> Result<Vec<u8>, KonfigError> {
    let file_access = |source| KonfigError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(file_access)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(file_access)?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Load and decode `konfig.json` from a directory
pub fn read_konfig_in(dir: &Path) -> Result<Konfiguration, KonfigError> {
    let path = dir.join(KONFIG_FILE_NAME);
    let bytes = read_konfig_bytes(&path)?;
    Konfiguration::from_slice(&bytes).map_err(|source| KonfigError::Decode { path, source })
}

/// Load and decode `konfig.json` from the current working directory
pub fn read_konfig() -> Result<Konfiguration, KonfigError> {
    info!("Reading konfiguration...");

    let cwd = std::env::current_dir().map_err(|source| KonfigError::PathResolution { source })?;
    read_konfig_in(&cwd)
}
