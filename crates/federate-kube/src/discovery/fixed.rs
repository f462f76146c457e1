//! In-memory discovery
//!
//! Serves a fixed set of resource lists, useful for unit tests and for
//! resolving against a saved discovery dump without a cluster.

use async_trait::async_trait;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIResource, APIResourceList};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::DiscoveryClient;
use crate::error::{DiscoveryError, Result};

/// Discovery source answering from a fixed set of lists
#[derive(Clone, Debug, Default)]
pub struct StaticDiscovery {
    lists: Vec<APIResourceList>,
    /// When set, every query fails with this message
    failure: Option<String>,
    /// Number of queries served, for assertions
    queries: Arc<AtomicUsize>,
}

impl StaticDiscovery {
    /// Create a source serving the given lists in order
    pub fn new(lists: Vec<APIResourceList>) -> Self {
        Self {
            lists,
            ..Default::default()
        }
    }

    /// Create a source whose queries always fail, as an unreachable server would
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Default::default()
        }
    }

    /// Load lists from a YAML or JSON discovery dump (a sequence of `APIResourceList`)
    pub fn from_yaml(data: &str) -> Result<Self> {
        let lists: Vec<APIResourceList> = serde_yaml::from_str(data)?;
        Ok(Self::new(lists))
    }

    /// Append a list built from a group version and its resources
    pub fn with_list(mut self, group_version: &str, resources: Vec<APIResource>) -> Self {
        self.lists.push(APIResourceList {
            group_version: group_version.to_string(),
            resources,
        });
        self
    }

    /// Number of discovery queries answered so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiscoveryClient for StaticDiscovery {
    async fn server_preferred_resources(&self) -> Result<Vec<APIResourceList>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(DiscoveryError::ListResources(kube::Error::Service(message.clone().into())).into());
        }
        Ok(self.lists.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FederateError;

    #[tokio::test]
    async fn test_static_lists_in_order() {
        let discovery = StaticDiscovery::default()
            .with_list("v1", vec![])
            .with_list("apps/v1", vec![]);

        let lists = discovery.server_preferred_resources().await.unwrap();
        let gvs: Vec<_> = lists.iter().map(|l| l.group_version.as_str()).collect();
        assert_eq!(gvs, vec!["v1", "apps/v1"]);
        assert_eq!(discovery.query_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_source() {
        let discovery = StaticDiscovery::failing("connection refused");

        let result = discovery.server_preferred_resources().await;
        assert!(matches!(
            result,
            Err(FederateError::Discovery(DiscoveryError::ListResources(_)))
        ));
        assert_eq!(discovery.query_count(), 1);
    }

    #[test]
    fn test_from_yaml_dump() {
        let dump = r#"
- groupVersion: apps/v1
  resources:
    - name: deployments
      singularName: deployment
      namespaced: true
      kind: Deployment
      verbs: [get, list]
      shortNames: [deploy]
"#;
        let discovery = StaticDiscovery::from_yaml(dump).unwrap();
        assert_eq!(discovery.lists.len(), 1);
        assert_eq!(discovery.lists[0].resources[0].kind, "Deployment");
    }

    #[test]
    fn test_from_yaml_rejects_garbage() {
        let result = StaticDiscovery::from_yaml("groupVersion: [");
        assert!(matches!(result, Err(FederateError::Serialization(_))));
    }
}
