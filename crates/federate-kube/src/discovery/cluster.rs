//! Discovery against a live API server

use async_trait::async_trait;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIGroup, APIResourceList};
use kube::{Client, Config};
use std::collections::HashSet;
use tracing::{debug, warn};

use super::{DiscoveryClient, is_subresource};
use crate::error::{DiscoveryError, Result};

/// Discovery backed by a Kubernetes client
///
/// Every call to [`DiscoveryClient::server_preferred_resources`] goes to the
/// server; nothing is cached between calls.
#[derive(Clone)]
pub struct ClusterDiscovery {
    client: Client,
}

impl ClusterDiscovery {
    /// Create discovery over an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from a connection config
    ///
    /// The config is cloned; the caller's copy is left untouched.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::try_from(config.clone()).map_err(DiscoveryError::ClientBuild)?;
        Ok(Self::new(client))
    }

    /// Resources of the legacy core group, across every advertised version
    ///
    /// The first version `/api` reports is the preferred one.
    async fn core_resources(&self) -> Result<Vec<APIResourceList>> {
        let versions = self
            .client
            .list_core_api_versions()
            .await
            .map_err(DiscoveryError::ListResources)?;

        let Some(preferred) = versions.versions.first() else {
            warn!("server advertises no core API versions");
            return Ok(Vec::new());
        };

        let mut lists = Vec::with_capacity(versions.versions.len());
        for version in &versions.versions {
            let list = self
                .client
                .list_core_api_resources(version)
                .await
                .map_err(DiscoveryError::ListResources)?;
            lists.push(list);
        }
        Ok(merge_versions(lists, preferred))
    }

    /// Resources of every named group, across every version it serves
    async fn group_resources(&self) -> Result<Vec<APIResourceList>> {
        let groups = self
            .client
            .list_api_groups()
            .await
            .map_err(DiscoveryError::ListResources)?;

        let mut lists = Vec::with_capacity(groups.groups.len());
        for group in &groups.groups {
            let Some(preferred) = preferred_group_version(group) else {
                warn!(group = %group.name, "API group advertises no versions, skipping");
                continue;
            };

            let mut versions = Vec::with_capacity(group.versions.len());
            for version in &group.versions {
                let list = self
                    .client
                    .list_api_group_resources(&version.group_version)
                    .await
                    .map_err(DiscoveryError::ListResources)?;
                versions.push(list);
            }
            lists.extend(merge_versions(versions, preferred));
        }
        Ok(lists)
    }
}

#[async_trait]
impl DiscoveryClient for ClusterDiscovery {
    async fn server_preferred_resources(&self) -> Result<Vec<APIResourceList>> {
        let mut lists = self.core_resources().await?;
        lists.extend(self.group_resources().await?);

        debug!(lists = lists.len(), "discovered server-preferred resources");
        Ok(lists)
    }
}

/// The group version to prefer for a group: preferred, else the first listed
fn preferred_group_version(group: &APIGroup) -> Option<&str> {
    group
        .preferred_version
        .as_ref()
        .or_else(|| group.versions.first())
        .map(|v| v.group_version.as_str())
}

/// Keep each resource of one group at a single version
///
/// `lists` holds one list per version, in the order the group advertises
/// them. A resource stays at `preferred` when that version serves it, else at
/// the first version that does. One list per version comes back, in the same
/// order, with subresources removed.
fn merge_versions(lists: Vec<APIResourceList>, preferred: &str) -> Vec<APIResourceList> {
    let at_preferred: HashSet<String> = lists
        .iter()
        .filter(|list| list.group_version == preferred)
        .flat_map(|list| list.resources.iter().map(|r| r.name.clone()))
        .collect();

    let mut claimed = HashSet::new();
    lists
        .into_iter()
        .map(|mut list| {
            list.resources.retain(|r| !is_subresource(&r.name));
            if list.group_version != preferred {
                list.resources
                    .retain(|r| !at_preferred.contains(&r.name) && claimed.insert(r.name.clone()));
            }
            list
        })
        .collect()
}
