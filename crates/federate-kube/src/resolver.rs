//! Resolve a user-supplied resource name to an API resource
//!
//! A key may be a plural name ("deployments"), a singular name
//! ("deployment"), a kind ("Deployment") or a short name ("deploy"), matched
//! case-insensitively. Within one resource the fields are tried in that
//! order; across resources the server-preferred order decides.
//!
//! # Collisions across groups
//!
//! When the same key names resources in several API groups (a `Certificate`
//! kind in two different groups, say) the first one in discovery order is
//! returned and the search stops there. Which one that is depends on the
//! order the server lists its groups, so callers that care must pass a key
//! that is unique on the cluster, such as a plural name that only one group
//! serves.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIResource, APIResourceList};
use tracing::debug;

use crate::discovery::{ClusterDiscovery, DiscoveryClient};
use crate::error::{FederateError, Result};
use crate::gv::GroupVersion;
use crate::keys::resource_key;
use crate::resource::ResolvedResource;

/// Which field of a resource satisfied the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedField {
    Plural,
    Singular,
    Kind,
    ShortName,
}

impl std::fmt::Display for MatchedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plural => write!(f, "plural name"),
            Self::Singular => write!(f, "singular name"),
            Self::Kind => write!(f, "kind"),
            Self::ShortName => write!(f, "short name"),
        }
    }
}

/// Resolves keys against one discovery source
///
/// Each call to [`ResourceResolver::resolve`] performs a fresh discovery
/// query; results are never cached.
pub struct ResourceResolver<D> {
    discovery: D,
}

impl<D: DiscoveryClient> ResourceResolver<D> {
    /// Create a resolver over a discovery source
    pub fn new(discovery: D) -> Self {
        Self { discovery }
    }

    /// Get the discovery source
    pub fn discovery(&self) -> &D {
        &self.discovery
    }

    /// Find the resource named by `key`
    ///
    /// The returned resource always carries the group and version of the
    /// list it was found in.
    pub async fn resolve(&self, key: &str) -> Result<ResolvedResource> {
        let lists = self.discovery.server_preferred_resources().await?;
        find_api_resource(&lists, key)
    }
}

impl ResourceResolver<ClusterDiscovery> {
    /// Create a resolver talking to the cluster described by `config`
    pub fn from_config(config: &kube::Config) -> Result<Self> {
        Ok(Self::new(ClusterDiscovery::from_config(config)?))
    }
}

/// Resolve `key` against the cluster described by `config`
///
/// Builds a client, runs one discovery query and searches it.
pub async fn lookup_api_resource(config: &kube::Config, key: &str) -> Result<ResolvedResource> {
    ResourceResolver::from_config(config)?.resolve(key).await
}

/// Search already-discovered lists for `key`
///
/// Returns on the first matching resource. The owning list's group version
/// is parsed only for that resource; a malformed one is a discovery error.
pub fn find_api_resource(lists: &[APIResourceList], key: &str) -> Result<ResolvedResource> {
    for list in lists {
        for resource in &list.resources {
            let Some(field) = match_key(resource, key) else {
                continue;
            };

            let gv: GroupVersion = list.group_version.parse()?;
            let resolved = ResolvedResource::from_api_resource(resource, gv);
            debug!(
                key,
                matched_by = %field,
                resource = %resource_key(&resolved),
                "resolved api resource"
            );
            return Ok(resolved);
        }
    }

    debug!(key, lists = lists.len(), "no api resource matched");
    Err(FederateError::ResourceNotFound {
        key: key.to_string(),
    })
}

/// Match `key` against one resource, returning the first field that fits
///
/// Case folding is ASCII-only, which covers the names API servers advertise.
/// Empty fields never match.
pub fn match_key(resource: &APIResource, key: &str) -> Option<MatchedField> {
    fn eq(field: &str, key: &str) -> bool {
        !field.is_empty() && field.eq_ignore_ascii_case(key)
    }

    if eq(&resource.name, key) {
        Some(MatchedField::Plural)
    } else if eq(&resource.singular_name, key) {
        Some(MatchedField::Singular)
    } else if eq(&resource.kind, key) {
        Some(MatchedField::Kind)
    } else if resource.short_names.iter().flatten().any(|s| eq(s, key)) {
        Some(MatchedField::ShortName)
    } else {
        None
    }
}
