//! CRD command - derive a CustomResourceDefinition from a resolved resource

use federate_kube::{CustomResourceDefinition, crd_for_api_resource};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use super::resolve_key;
use crate::config::{DiscoverySource, load_validation};
use crate::display::{OutputFormat, print_resolved};
use crate::error::Result;

/// Run the crd command
pub async fn run(
    key: &str,
    validation: Option<&Path>,
    source: DiscoverySource<'_>,
    output: OutputFormat,
) -> Result<()> {
    // Read local input before touching the cluster
    let validation = validation.map(load_validation).transpose()?;

    let resource = resolve_key(key, source).await?;
    print_resolved(key, &resource);

    let crd = crd_for_api_resource(&resource, validation);
    debug!(name = crd.name(), scope = %crd.spec.scope, "built CRD");

    let document = render_crd(&crd, output)?;
    std::io::stdout().write_all(document.as_bytes())?;
    Ok(())
}

/// Serialize a CRD with its own serializers, newline-terminated
fn render_crd(crd: &CustomResourceDefinition, output: OutputFormat) -> Result<String> {
    let document = match output {
        OutputFormat::Yaml => crd.to_yaml()?,
        OutputFormat::Json => crd.to_json()? + "\n",
    };
    Ok(document)
}
