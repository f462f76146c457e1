//! CustomResourceDefinition object model
//!
//! These types mirror the `apiextensions.k8s.io/v1beta1` layout, where a CRD
//! carries a single `version` and a top-level `validation` block. The
//! validation itself is the upstream `CustomResourceValidation` and is never
//! inspected here.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceValidation;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::TypeMeta;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Kind of every generated CRD
pub const CRD_KIND: &str = "CustomResourceDefinition";

/// API version of every generated CRD
pub const CRD_API_VERSION: &str = "apiextensions.k8s.io/v1beta1";

/// A CustomResourceDefinition ready for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomResourceDefinition {
    /// apiVersion and kind, always serialized
    #[serde(flatten)]
    pub types: TypeMeta,
    /// Object metadata (only the name is set)
    pub metadata: ObjectMeta,
    /// Definition body
    pub spec: CustomResourceDefinitionSpec,
}

impl CustomResourceDefinition {
    /// The CRD name (`<plural>.<group>`)
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// Serialize as a YAML document
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Group, version, scope, names and validation of a CRD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomResourceDefinitionSpec {
    /// API group (empty for the core group)
    pub group: String,
    /// Served version
    pub version: String,
    /// Resource scope
    pub scope: CrdScope,
    /// Resource names
    pub names: CustomResourceDefinitionNames,
    /// Validation schema, attached as given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<CustomResourceValidation>,
}

/// Names under which the custom resource is served
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomResourceDefinitionNames {
    /// Plural name (e.g., "widgets")
    pub plural: String,
    /// Kind (e.g., "Widget")
    pub kind: String,
}

/// CRD scope - whether resources are namespaced or cluster-wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CrdScope {
    #[default]
    Namespaced,
    Cluster,
}

impl CrdScope {
    /// Scope matching a resource's namespaced flag
    pub fn from_namespaced(namespaced: bool) -> Self {
        if namespaced {
            Self::Namespaced
        } else {
            Self::Cluster
        }
    }
}

impl std::fmt::Display for CrdScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Namespaced => write!(f, "Namespaced"),
            Self::Cluster => write!(f, "Cluster"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crd_scope_display() {
        assert_eq!(CrdScope::Namespaced.to_string(), "Namespaced");
        assert_eq!(CrdScope::Cluster.to_string(), "Cluster");
    }

    #[test]
    fn test_crd_scope_from_namespaced() {
        assert_eq!(CrdScope::from_namespaced(true), CrdScope::Namespaced);
        assert_eq!(CrdScope::from_namespaced(false), CrdScope::Cluster);
    }

    #[test]
    fn test_crd_scope_serde() {
        assert_eq!(
            serde_json::to_value(CrdScope::Cluster).unwrap(),
            serde_json::json!("Cluster")
        );
        let scope: CrdScope = serde_json::from_str("\"Namespaced\"").unwrap();
        assert_eq!(scope, CrdScope::Namespaced);
    }
}
