//! Centralized error types for konfigure
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading or decoding the konfiguration
///
/// Messages leave the underlying cause to `source()`, which anyhow prints
/// as the `Caused by:` chain.
#[derive(Error, Debug)]
pub enum KonfigError {
    #[error("Unable to determine the current working directory")]
    PathResolution { source: std::io::Error },

    #[error("Unable to read konfig file {}", path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to parse JSON file {}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}
