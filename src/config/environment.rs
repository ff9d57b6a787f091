//! Deployment target descriptor: Terraform, AWS and Kubernetes coordinates.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Node selector label EKS attaches to every node of a managed nodegroup
const NODEGROUP_LABEL: &str = "eks.amazonaws.com/nodegroup";

/// Environment the workloads are deployed into
///
/// All fields are plain strings; allowed values are not validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Environment {
    /// Environment name (overwritten after decode, see [`super::ENVIRONMENT_NAME`])
    #[serde(alias = "Name", deserialize_with = "super::null_as_default")]
    pub name: String,

    /// Terraform environment id (e.g., "dataeng-prod")
    #[serde(deserialize_with = "super::null_as_default")]
    pub tf_env: String,

    /// Terraform module name
    #[serde(deserialize_with = "super::null_as_default")]
    pub tf_module: String,

    /// AWS account id or alias
    #[serde(deserialize_with = "super::null_as_default")]
    pub aws_account: String,

    /// AWS region (e.g., "eu-central-1")
    #[serde(deserialize_with = "super::null_as_default")]
    pub aws_region: String,

    /// Kubernetes context
    #[serde(deserialize_with = "super::null_as_default")]
    pub k8s_context: String,

    /// Kubernetes namespace
    #[serde(deserialize_with = "super::null_as_default")]
    pub k8s_namespace: String,

    /// EKS nodegroup the workloads are scheduled onto
    #[serde(deserialize_with = "super::null_as_default")]
    pub eks_nodegroup: String,
}

impl Environment {
    /// Values injected into every chart deployed into this environment
    pub fn chart_values(&self) -> Value {
        json!({
            "region": self.aws_region,
            "nodegroup": self.eks_nodegroup,
            "nodeSelector": {
                NODEGROUP_LABEL: self.eks_nodegroup,
            },
        })
    }
}
