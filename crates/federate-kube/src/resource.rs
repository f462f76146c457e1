//! Resolved API resource descriptors
//!
//! Discovery returns `APIResource` entries without their group and version;
//! those live on the enclosing `APIResourceList`. A [`ResolvedResource`] is
//! the descriptor with both re-attached, so it can be handed around without
//! remembering which list it came from.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResource;
use serde::{Deserialize, Serialize};

use crate::gv::GroupVersion;

/// An API resource type together with the group and version serving it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedResource {
    /// Plural resource name (e.g., "deployments")
    pub plural: String,
    /// Singular resource name (e.g., "deployment")
    #[serde(default)]
    pub singular_name: String,
    /// Kind (e.g., "Deployment")
    pub kind: String,
    /// Whether instances live in a namespace
    pub namespaced: bool,
    /// Short aliases (e.g., ["deploy"])
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub short_names: Vec<String>,
    /// API group, empty for the core group
    pub group: String,
    /// API version
    pub version: String,
}

impl ResolvedResource {
    /// Attach a group version to a discovered resource
    ///
    /// Any group/version already present on `resource` is ignored: the
    /// owning list is authoritative.
    pub fn from_api_resource(resource: &APIResource, gv: GroupVersion) -> Self {
        Self {
            plural: resource.name.clone(),
            singular_name: resource.singular_name.clone(),
            kind: resource.kind.clone(),
            namespaced: resource.namespaced,
            short_names: resource.short_names.clone().unwrap_or_default(),
            group: gv.group,
            version: gv.version,
        }
    }

    /// The group version serving this resource
    pub fn group_version(&self) -> GroupVersion {
        GroupVersion::new(self.group.clone(), self.version.clone())
    }

    /// The `apiVersion` used by manifests of this resource
    pub fn api_version(&self) -> String {
        self.group_version().api_version()
    }

    /// Whether this resource belongs to the core ("") group
    pub fn is_core_group(&self) -> bool {
        self.group.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_group_version_wins() {
        let api_resource = APIResource {
            name: "deployments".to_string(),
            singular_name: "deployment".to_string(),
            kind: "Deployment".to_string(),
            namespaced: true,
            short_names: Some(vec!["deploy".to_string()]),
            group: Some("stale".to_string()),
            version: Some("v0".to_string()),
            ..Default::default()
        };

        let resolved =
            ResolvedResource::from_api_resource(&api_resource, GroupVersion::new("apps", "v1"));

        assert_eq!(resolved.group, "apps");
        assert_eq!(resolved.version, "v1");
        assert_eq!(resolved.short_names, vec!["deploy".to_string()]);
        assert_eq!(resolved.api_version(), "apps/v1");
        assert!(!resolved.is_core_group());
    }

    #[test]
    fn test_core_group_kept_empty() {
        let api_resource = APIResource {
            name: "pods".to_string(),
            kind: "Pod".to_string(),
            ..Default::default()
        };

        let resolved =
            ResolvedResource::from_api_resource(&api_resource, GroupVersion::new("", "v1"));

        assert!(resolved.is_core_group());
        assert_eq!(resolved.group, "");
        assert_eq!(resolved.api_version(), "v1");
        assert!(resolved.short_names.is_empty());
    }
}
