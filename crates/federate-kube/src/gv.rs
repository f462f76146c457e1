//! Group/version coordinates as advertised by discovery

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseGroupVersionError;

/// A parsed `group/version` pair
///
/// The core group is represented by an empty `group`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GroupVersion {
    /// API group (empty for the core group)
    pub group: String,
    /// API version (e.g., "v1", "v1beta1")
    pub version: String,
}

impl GroupVersion {
    /// Create a group version from its parts
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }

    /// Render the `apiVersion` string used in manifests
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl FromStr for GroupVersion {
    type Err = ParseGroupVersionError;

    fn from_str(gv: &str) -> Result<Self, Self::Err> {
        if gv.is_empty() || gv == "/" {
            return Ok(Self::default());
        }

        match gv.split_once('/') {
            None => Ok(Self::new("", gv)),
            Some((_, version)) if version.contains('/') => {
                Err(ParseGroupVersionError(gv.to_string()))
            }
            Some((group, version)) => Ok(Self::new(group, version)),
        }
    }
}

impl std::fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.api_version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_group() {
        let gv: GroupVersion = "apps/v1".parse().unwrap();
        assert_eq!(gv, GroupVersion::new("apps", "v1"));
    }

    #[test]
    fn test_parse_core_group() {
        assert_eq!("v1".parse::<GroupVersion>().unwrap(), GroupVersion::new("", "v1"));
        assert_eq!("/v1".parse::<GroupVersion>().unwrap(), GroupVersion::new("", "v1"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("".parse::<GroupVersion>().unwrap(), GroupVersion::default());
        assert_eq!("/".parse::<GroupVersion>().unwrap(), GroupVersion::default());
    }

    #[test]
    fn test_parse_too_many_slashes() {
        let err = "example.com/v1/extra".parse::<GroupVersion>().unwrap_err();
        assert_eq!(err, ParseGroupVersionError("example.com/v1/extra".to_string()));
    }

    #[test]
    fn test_api_version() {
        assert_eq!(GroupVersion::new("", "v1").api_version(), "v1");
        assert_eq!(
            GroupVersion::new("example.com", "v1alpha1").to_string(),
            "example.com/v1alpha1"
        );
    }
}
