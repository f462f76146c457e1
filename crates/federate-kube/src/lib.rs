//! Federate Kube - API resource lookup and CRD derivation
//!
//! This crate provides:
//! - **Discovery**: Server-preferred resource lists from a cluster or from memory
//! - **Resolution**: Find the resource a short key (plural, singular, kind, short name) refers to
//! - **CRD Derivation**: Build a CustomResourceDefinition mirroring a resolved resource
//! - **Keys**: Stable identity strings for naming and display
//!
//! # Example
//!
//! ```ignore
//! use federate_kube::{crd::crd_for_api_resource, lookup_api_resource};
//!
//! let config = kube::Config::infer().await?;
//! let resource = lookup_api_resource(&config, "deploy").await?;
//! assert_eq!(resource.group, "apps");
//!
//! let crd = crd_for_api_resource(&resource, None);
//! assert_eq!(crd.name(), "deployments.apps");
//! ```

pub mod crd;
pub mod discovery;
pub mod error;
pub mod gv;
pub mod keys;
pub mod resolver;
pub mod resource;

pub use crd::{CrdScope, CustomResourceDefinition, crd_for_api_resource};
pub use discovery::{ClusterDiscovery, DiscoveryClient, StaticDiscovery};
pub use error::{DiscoveryError, FederateError, ParseGroupVersionError, Result};
pub use gv::GroupVersion;
pub use keys::{group_qualified_name, resource_key};
pub use resolver::{
    MatchedField, ResourceResolver, find_api_resource, lookup_api_resource, match_key,
};
pub use resource::ResolvedResource;

/// Re-exported so callers can build validation schemas without naming k8s-openapi
pub use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceValidation;
