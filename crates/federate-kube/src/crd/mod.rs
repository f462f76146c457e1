//! CRD (CustomResourceDefinition) derivation
//!
//! Turns a [`ResolvedResource`](crate::ResolvedResource) into a CRD that
//! would register the same type, so an existing API (built-in or custom) can
//! be re-exposed under a federation layer.
//!
//! - **Object model** (`schema`): `CustomResourceDefinition` and its spec
//! - **Builder** (`builder`): [`crd_for_api_resource`]
//!
//! # Example
//!
//! ```ignore
//! use federate_kube::{ResourceResolver, StaticDiscovery, crd::crd_for_api_resource};
//!
//! let resolver = ResourceResolver::new(discovery);
//! let resource = resolver.resolve("deploy").await?;
//! let crd = crd_for_api_resource(&resource, None);
//! println!("{}", crd.to_yaml()?);
//! ```

mod builder;
mod schema;

pub use builder::crd_for_api_resource;
pub use schema::{
    CRD_API_VERSION, CRD_KIND, CrdScope, CustomResourceDefinition, CustomResourceDefinitionNames,
    CustomResourceDefinitionSpec,
};
