//! Connection config and input file loading

use federate_kube::{CustomResourceValidation, StaticDiscovery};
use kube::Config;
use kube::config::{KubeConfigOptions, Kubeconfig};
use std::path::Path;
use tracing::debug;

use crate::error::{CliError, Result};

/// Where the resource lists to search come from
///
/// A discovery dump, when given, replaces the cluster entirely and the
/// kubeconfig settings are not read.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoverySource<'a> {
    pub dump: Option<&'a Path>,
    pub kubeconfig: Option<&'a Path>,
    pub context: Option<&'a str>,
}

/// Build the cluster connection config
///
/// An explicit kubeconfig path wins; otherwise a named context is looked up
/// in the default kubeconfig; otherwise the environment is inferred
/// (`KUBECONFIG`, `~/.kube/config`, then in-cluster service account).
pub async fn load_kube_config(kubeconfig: Option<&Path>, context: Option<&str>) -> Result<Config> {
    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    match kubeconfig {
        Some(path) => {
            debug!(path = %path.display(), ?context, "loading kubeconfig");
            let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                CliError::config(format!("failed to read kubeconfig {}: {}", path.display(), e))
            })?;
            Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(|e| context_error(context, e))
        }
        None if context.is_some() => {
            debug!(?context, "loading default kubeconfig");
            Config::from_kubeconfig(&options)
                .await
                .map_err(|e| context_error(context, e))
        }
        None => Config::infer().await.map_err(|e| {
            CliError::config_with_help(
                format!("failed to infer cluster config: {}", e),
                "pass --kubeconfig or set KUBECONFIG",
            )
        }),
    }
}

fn context_error(context: Option<&str>, e: impl std::fmt::Display) -> CliError {
    match context {
        Some(name) => CliError::config_with_help(
            format!("failed to load kubeconfig context '{}': {}", name, e),
            "run `kubectl config get-contexts` to list available contexts",
        ),
        None => CliError::config(format!("failed to load kubeconfig: {}", e)),
    }
}

/// Read a validation schema (YAML or JSON) to attach to a generated CRD
///
/// The content is only parsed, not checked.
pub fn load_validation(path: &Path) -> Result<CustomResourceValidation> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        message: format!("{}: {}", path.display(), e),
    })?;

    serde_yaml::from_str(&content).map_err(|e| {
        CliError::input(format!(
            "{} is not a CustomResourceValidation: {}",
            path.display(),
            e
        ))
    })
}

/// Read a saved discovery dump: a YAML or JSON sequence of `APIResourceList`
///
/// `kubectl get --raw /apis/apps/v1` output, wrapped in a list, is one.
pub fn load_discovery_dump(path: &Path) -> Result<StaticDiscovery> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        message: format!("{}: {}", path.display(), e),
    })?;

    let discovery = StaticDiscovery::from_yaml(&content).map_err(|e| {
        CliError::input(format!("{} is not a discovery dump: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "loaded discovery dump");
    Ok(discovery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_validation_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "openAPIV3Schema:\n  type: object\n  properties:\n    spec:\n      type: object"
        )
        .unwrap();

        let validation = load_validation(file.path()).unwrap();
        let schema = validation.open_api_v3_schema.unwrap();
        assert_eq!(schema.type_.as_deref(), Some("object"));
        assert!(schema.properties.unwrap().contains_key("spec"));
    }

    #[test]
    fn test_load_validation_missing_file() {
        let err = load_validation(Path::new("/nonexistent/validation.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_load_validation_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "openAPIV3Schema: [not, a, schema]").unwrap();

        let err = load_validation(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
    }

    #[tokio::test]
    async fn test_load_discovery_dump() {
        use federate_kube::DiscoveryClient;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"groupVersion": "apps/v1", "resources": [{{"name": "deployments", "singularName": "deployment", "namespaced": true, "kind": "Deployment", "verbs": ["get"]}}]}}]"#
        )
        .unwrap();

        let discovery = load_discovery_dump(file.path()).unwrap();
        let lists = discovery.server_preferred_resources().await.unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].group_version, "apps/v1");
    }

    #[test]
    fn test_load_discovery_dump_errors() {
        let err = load_discovery_dump(Path::new("/nonexistent/discovery.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "groupVersion: [").unwrap();
        let err = load_discovery_dump(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
    }

    #[tokio::test]
    async fn test_load_missing_kubeconfig() {
        let err = load_kube_config(Some(Path::new("/nonexistent/kubeconfig")), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[tokio::test]
    async fn test_load_unknown_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"apiVersion: v1
kind: Config
clusters:
- name: local
  cluster:
    server: https://127.0.0.1:6443
contexts:
- name: local
  context:
    cluster: local
    user: local
current-context: local
users:
- name: local
  user: {{}}
"#
        )
        .unwrap();

        let config = load_kube_config(Some(file.path()), None).await.unwrap();
        assert_eq!(config.cluster_url.host(), Some("127.0.0.1"));
        assert_eq!(config.cluster_url.port_u16(), Some(6443));

        let err = load_kube_config(Some(file.path()), Some("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Config { help: Some(_), .. }));
    }
}
