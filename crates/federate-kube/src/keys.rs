//! Identity strings for resolved resources
//!
//! These are for naming and display, never for lookup.

use crate::resource::ResolvedResource;

/// Label shown for the core ("") group
pub const CORE_GROUP_LABEL: &str = "core";

/// Label shown when a resource carries no version
pub const DEFAULT_VERSION_LABEL: &str = "v1";

/// `<plural>.<group>`, or the bare plural for the core group
///
/// This is also the name of the CRD derived from the resource.
#[must_use]
pub fn group_qualified_name(resource: &ResolvedResource) -> String {
    if resource.group.is_empty() {
        resource.plural.clone()
    } else {
        format!("{}.{}", resource.plural, resource.group)
    }
}

/// `<plural>.<group>/<version>` with "core" and "v1" standing in for empty values
#[must_use]
pub fn resource_key(resource: &ResolvedResource) -> String {
    let group = if resource.group.is_empty() {
        CORE_GROUP_LABEL
    } else {
        &resource.group
    };
    let version = if resource.version.is_empty() {
        DEFAULT_VERSION_LABEL
    } else {
        &resource.version
    };
    format!("{}.{}/{}", resource.plural, group, version)
}
