//! CLI commands

pub mod crd;
pub mod resolve;

use federate_kube::{ResolvedResource, ResourceResolver};

use crate::config::{DiscoverySource, load_discovery_dump, load_kube_config};
use crate::error::Result;

/// Resolve `key` against a discovery dump when one is given, else the cluster
pub(crate) async fn resolve_key(key: &str, source: DiscoverySource<'_>) -> Result<ResolvedResource> {
    let resource = match source.dump {
        Some(path) => {
            ResourceResolver::new(load_discovery_dump(path)?)
                .resolve(key)
                .await?
        }
        None => {
            let config = load_kube_config(source.kubeconfig, source.context).await?;
            ResourceResolver::from_config(&config)?.resolve(key).await?
        }
    };
    Ok(resource)
}
