//! Text rendering of a konfiguration
//!
//! The summary (via `Display`) lists the environment coordinates in a fixed
//! order. [`details`] appends every deployment and external resource as
//! indented JSON, with entries that are switched off marked next to their name.

use crate::config::{Deployment, Konfiguration};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fmt;

const JSON_INDENT: &[u8] = b"    ";

impl fmt::Display for Konfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let env = &self.environment;

        writeln!(f, "Initializing DP environment '{}'...", env.name)?;
        writeln!(f, "Terraform environment: '{}'", env.tf_env)?;
        writeln!(f, "AWS account: '{}'", env.aws_account)?;
        writeln!(f, "AWS region: '{}'", env.aws_region)?;
        writeln!(f, "K8s context: '{}'", env.k8s_context)?;
        writeln!(f, "K8s namespace: '{}'", env.k8s_namespace)
    }
}

/// Render all deployments and external resources, ordered by name
pub fn details(konfig: &Konfiguration) -> serde_json::Result<String> {
    let mut out = String::new();

    out.push_str("\nDeployments:\n");
    for (name, deployment) in &konfig.deployments {
        push_entry(&mut out, name, deployment, deployment)?;
    }

    out.push_str("\nExternal Resources:\n");
    for (name, resource) in &konfig.external_resources.deployments {
        push_entry(&mut out, name, &resource.deployment, resource)?;
    }

    Ok(out)
}

/// Marker for deployments that are skipped always, or only on CD runs
fn status_marker(deployment: &Deployment) -> &'static str {
    if !deployment.is_enabled(false) {
        " (disabled)"
    } else if !deployment.is_enabled(true) {
        " (cd disabled)"
    } else {
        ""
    }
}

fn push_entry<T: Serialize>(
    out: &mut String,
    name: &str,
    deployment: &Deployment,
    entry: &T,
) -> serde_json::Result<()> {
    out.push_str(&format!(
        "{}{}: {}\n",
        name,
        status_marker(deployment),
        to_indented_json(entry)?
    ));
    Ok(())
}

fn to_indented_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: &str = r#"{"apiVersion":"v1","environment":{"tfEnv":"dataeng-prod","awsAccount":"acct-1","awsRegion":"eu-central-1","k8sContext":"ctx-1","k8sNamespace":"ns-1"},"deployments":{},"externalResources":{"secretPresets":{},"deployments":{}}}"#;

    #[test]
    fn test_summary_matches_expected_output() {
        let konfig = Konfiguration::from_slice(SAMPLE.as_bytes()).unwrap();
        let expected = "Initializing DP environment 'dev'...\n\
                        Terraform environment: 'dataeng-prod'\n\
                        AWS account: 'acct-1'\n\
                        AWS region: 'eu-central-1'\n\
                        K8s context: 'ctx-1'\n\
                        K8s namespace: 'ns-1'\n";
        assert_eq!(konfig.to_string(), expected);
    }

    #[test]
    fn test_summary_with_empty_fields() {
        let konfig = Konfiguration::default();
        let summary = konfig.to_string();
        assert!(summary.starts_with("Initializing DP environment ''...\n"));
        assert!(summary.contains("AWS region: ''\n"));
        assert_eq!(summary.lines().count(), 6);
    }

    #[test]
    fn test_summary_is_deterministic() {
        let first = Konfiguration::from_slice(SAMPLE.as_bytes()).unwrap().to_string();
        let second = Konfiguration::from_slice(SAMPLE.as_bytes()).unwrap().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_details_empty() {
        let konfig = Konfiguration::default();
        assert_eq!(
            details(&konfig).unwrap(),
            "\nDeployments:\n\nExternal Resources:\n"
        );
    }

    #[test]
    fn test_details_lists_entries_in_name_order() {
        let mut konfig = Konfiguration::default();
        for name in ["zookeeper", "airflow"] {
            konfig.deployments.insert(
                name.to_string(),
                Deployment {
                    chart: name.to_string(),
                    ..Default::default()
                },
            );
        }
        konfig.external_resources = serde_json::from_value(json!({
            "deployments": { "warehouse": { "$secretPreset": "redshift" } }
        }))
        .unwrap();

        let out = details(&konfig).unwrap();
        let airflow = out.find("airflow: {").unwrap();
        let zookeeper = out.find("zookeeper: {").unwrap();
        let warehouse = out.find("warehouse: {").unwrap();
        assert!(airflow < zookeeper);
        assert!(zookeeper < warehouse);

        assert!(out.contains("\n    \"chart\": \"airflow\",\n"));
        assert!(out.contains("\n    \"$secretPreset\": \"redshift\"\n"));
        assert!(!out.contains("\"deployment\""));
    }

    #[test]
    fn test_details_marks_switched_off_entries() {
        let konfig = Konfiguration::from_slice(
            br#"{
                "deployments": {
                    "airflow": { "chart": "airflow" },
                    "legacy": { "chart": "legacy", "disabled": true },
                    "spark": { "chart": "spark", "cdDisabled": true }
                },
                "externalResources": {
                    "deployments": { "warehouse": { "disabled": true } }
                }
            }"#,
        )
        .unwrap();

        let out = details(&konfig).unwrap();
        assert!(out.contains("\nairflow: {\n"));
        assert!(out.contains("\nlegacy (disabled): {\n"));
        assert!(out.contains("\nspark (cd disabled): {\n"));
        assert!(out.contains("\nwarehouse (disabled): {\n"));
    }
}
