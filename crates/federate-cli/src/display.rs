//! Display formatting for CLI output
//!
//! Documents go to stdout in the requested format so they can be piped;
//! human-oriented summaries go to stderr.

use clap::ValueEnum;
use console::style;
use federate_kube::{ResolvedResource, group_qualified_name, resource_key};
use serde::Serialize;

use crate::error::Result;

/// Serialization format for documents written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Serialize a document in the requested format
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// A resolved resource together with its identity strings
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedView<'a> {
    #[serde(flatten)]
    pub resource: &'a ResolvedResource,
    pub qualified_name: String,
    pub resource_key: String,
}

impl<'a> ResolvedView<'a> {
    pub fn new(resource: &'a ResolvedResource) -> Self {
        Self {
            resource,
            qualified_name: group_qualified_name(resource),
            resource_key: resource_key(resource),
        }
    }
}

/// One-line summary of a resolution, written to stderr
pub fn print_resolved(key: &str, resource: &ResolvedResource) {
    eprintln!(
        "{} {} {} {}",
        style("Resolved").green().bold(),
        style(key).cyan(),
        style("->").dim(),
        style(resource_key(resource)).yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn deployments() -> ResolvedResource {
        ResolvedResource {
            plural: "deployments".to_string(),
            singular_name: "deployment".to_string(),
            kind: "Deployment".to_string(),
            namespaced: true,
            short_names: vec!["deploy".to_string()],
            group: "apps".to_string(),
            version: "v1".to_string(),
        }
    }

    #[test]
    fn test_resolved_view_fields() {
        let resource = deployments();
        let value = serde_json::to_value(ResolvedView::new(&resource)).unwrap();
        assert_eq!(
            value,
            json!({
                "plural": "deployments",
                "singularName": "deployment",
                "kind": "Deployment",
                "namespaced": true,
                "shortNames": ["deploy"],
                "group": "apps",
                "version": "v1",
                "qualifiedName": "deployments.apps",
                "resourceKey": "deployments.apps/v1"
            })
        );
    }

    #[test]
    fn test_render_formats() {
        let resource = deployments();

        let yaml = render(&resource, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("plural: deployments\n"));

        let json = render(&resource, OutputFormat::Json).unwrap();
        assert!(json.ends_with("}\n"));
        let parsed: ResolvedResource = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, resource);
    }
}
