//! Chart deployments and external resources.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Arbitrary Helm-style override values, kept as raw JSON so they round-trip losslessly
pub type ValuesMap = BTreeMap<String, Value>;

/// Reference to a packaged chart plus override values and enable/disable flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Deployment {
    /// Chart name (or local chart path)
    #[serde(deserialize_with = "super::null_as_default")]
    pub chart: String,

    /// Chart version
    #[serde(deserialize_with = "super::null_as_default")]
    pub version: String,

    /// Chart source (e.g., repository URL)
    #[serde(deserialize_with = "super::null_as_default")]
    pub source: String,

    /// Value overrides passed to the chart
    #[serde(deserialize_with = "super::null_as_default")]
    pub values: ValuesMap,

    /// Skip this deployment entirely
    #[serde(deserialize_with = "super::null_as_default")]
    pub disabled: bool,

    /// Skip this deployment when running from continuous delivery
    #[serde(deserialize_with = "super::null_as_default")]
    pub cd_disabled: bool,
}

impl Deployment {
    /// Whether this deployment takes part in a run
    ///
    /// `cd` marks a continuous-delivery run, where `cdDisabled` also applies.
    pub fn is_enabled(&self, cd: bool) -> bool {
        !self.disabled && !(cd && self.cd_disabled)
    }
}

/// External resource definitions and the secret presets they can reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalResources {
    /// Named, reusable bundles of secret defaults
    #[serde(deserialize_with = "super::null_as_default")]
    pub secret_presets: ValuesMap,

    /// External resources keyed by name
    #[serde(deserialize_with = "super::null_as_default")]
    pub deployments: BTreeMap<String, ExternalResource>,
}

/// Deployment-like entry that also carries service and external-secret bindings
///
/// Serializes flat: the chart fields sit next to `service`, `externalSecrets`
/// and `$secretPreset` rather than under a nested key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalResource {
    #[serde(flatten)]
    pub deployment: Deployment,

    /// Service port/selector mapping
    #[serde(deserialize_with = "super::null_as_default")]
    pub service: ValuesMap,

    /// External secret names
    #[serde(deserialize_with = "super::null_as_default")]
    pub external_secrets: ValuesMap,

    /// Name of a secret preset; not checked against `secretPresets`
    #[serde(rename = "$secretPreset", deserialize_with = "super::null_as_default")]
    pub secret_preset: String,
}
