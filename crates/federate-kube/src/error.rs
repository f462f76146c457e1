//! Error types for federate-kube

use thiserror::Error;

/// Result type for federate-kube operations
pub type Result<T> = std::result::Result<T, FederateError>;

/// Errors that can occur while resolving API resources
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FederateError {
    /// Discovery against the cluster failed or returned malformed data
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// No advertised resource matched the requested key
    #[error("unable to find api resource named \"{key}\"")]
    ResourceNotFound { key: String },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Failures talking to, or interpreting answers from, the discovery endpoints
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The Kubernetes client could not be built from the given config
    #[error("error creating discovery client: {0}")]
    ClientBuild(#[source] kube::Error),

    /// A discovery request failed
    #[error("error listing api resources: {0}")]
    ListResources(#[source] kube::Error),

    /// The server advertised a group version that cannot be parsed
    #[error("error parsing GroupVersion: {0}")]
    InvalidGroupVersion(#[from] ParseGroupVersionError),
}

/// A group version string with more than one `/`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected GroupVersion string: {0:?}")]
pub struct ParseGroupVersionError(pub String);

impl From<serde_json::Error> for FederateError {
    fn from(e: serde_json::Error) -> Self {
        FederateError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for FederateError {
    fn from(e: serde_yaml::Error) -> Self {
        FederateError::Serialization(e.to_string())
    }
}

impl From<ParseGroupVersionError> for FederateError {
    fn from(e: ParseGroupVersionError) -> Self {
        FederateError::Discovery(DiscoveryError::InvalidGroupVersion(e))
    }
}

impl FederateError {
    /// Check if no resource matched the requested key
    pub fn is_not_found(&self) -> bool {
        matches!(self, FederateError::ResourceNotFound { .. })
    }

    /// Check if this came from the discovery layer (transport or malformed response)
    pub fn is_discovery(&self) -> bool {
        matches!(self, FederateError::Discovery(_))
    }
}
