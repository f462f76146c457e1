//! Discovery of the resource types a cluster serves
//!
//! Resolution only needs one thing from a cluster: the server-preferred
//! resource lists, each pairing a group version with the resources served
//! at it. Two sources implement [`DiscoveryClient`]:
//! - **Cluster** ([`ClusterDiscovery`]): asks a live API server via `kube::Client`
//! - **Static** ([`StaticDiscovery`]): serves fixed lists from memory (for tests and offline use)

mod cluster;
mod fixed;

pub use cluster::ClusterDiscovery;
pub use fixed::StaticDiscovery;

use async_trait::async_trait;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;

use crate::error::Result;

/// Source of server-preferred API resource lists
///
/// Implementations must be Send + Sync for use across async tasks.
#[async_trait]
pub trait DiscoveryClient: Send + Sync {
    /// List the resources a server serves, one version per resource
    ///
    /// Each resource appears once: at its group's preferred version when that
    /// version serves it, otherwise at the first version that does. Lists are
    /// returned in server order: the core group first, then named groups in
    /// the order `/apis` reports them, each group's versions in advertised
    /// order.
    async fn server_preferred_resources(&self) -> Result<Vec<APIResourceList>>;
}

/// Whether a discovered resource name refers to a subresource (e.g., "pods/log")
pub(crate) fn is_subresource(name: &str) -> bool {
    name.contains('/')
}
