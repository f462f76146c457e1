//! Derive a CRD from a resolved resource

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceValidation;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::TypeMeta;

use super::schema::{
    CRD_API_VERSION, CRD_KIND, CrdScope, CustomResourceDefinition, CustomResourceDefinitionNames,
    CustomResourceDefinitionSpec,
};
use crate::keys::group_qualified_name;
use crate::resource::ResolvedResource;

/// Build a CRD that registers `resource` under its own group and version
///
/// The validation is attached verbatim, including when it is `None`.
pub fn crd_for_api_resource(
    resource: &ResolvedResource,
    validation: Option<CustomResourceValidation>,
) -> CustomResourceDefinition {
    CustomResourceDefinition {
        types: TypeMeta {
            api_version: CRD_API_VERSION.to_string(),
            kind: CRD_KIND.to_string(),
        },
        metadata: ObjectMeta {
            name: Some(group_qualified_name(resource)),
            ..Default::default()
        },
        spec: CustomResourceDefinitionSpec {
            group: resource.group.clone(),
            version: resource.version.clone(),
            scope: CrdScope::from_namespaced(resource.namespaced),
            names: CustomResourceDefinitionNames {
                plural: resource.plural.clone(),
                kind: resource.kind.clone(),
            },
            validation,
        },
    }
}
