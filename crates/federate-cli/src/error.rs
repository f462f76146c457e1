//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

use federate_kube::FederateError;
use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// No API resource matched the key
    #[error("Resource not found: {key}")]
    #[diagnostic(
        code(federate::cli::not_found),
        help("run `kubectl api-resources` to list the names this cluster serves")
    )]
    NotFound { key: String },

    /// Discovery against the cluster failed
    #[error("Discovery failed: {message}")]
    #[diagnostic(
        code(federate::cli::discovery),
        help("check that the cluster is reachable with the selected kubeconfig and context")
    )]
    Discovery { message: String },

    /// Connection config could not be loaded
    #[error("Config error: {message}")]
    #[diagnostic(code(federate::cli::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(federate::cli::io))]
    Io { message: String },

    /// Input file could not be parsed
    #[error("Invalid input: {message}")]
    #[diagnostic(code(federate::cli::input))]
    Input { message: String },

    /// Internal error (serialization, unexpected failure)
    #[error("Internal error: {message}")]
    #[diagnostic(code(federate::cli::internal))]
    Internal { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::Discovery { .. } => exit_codes::DISCOVERY_ERROR,
            CliError::Config { .. } => exit_codes::CONFIG_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
            CliError::Input { .. } => exit_codes::ERROR,
            CliError::Internal { .. } => exit_codes::ERROR,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }

    /// Create a config error with help text
    pub fn config_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Create an input error (user provided a file we cannot use)
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

impl From<FederateError> for CliError {
    fn from(err: FederateError) -> Self {
        match err {
            FederateError::ResourceNotFound { key } => CliError::NotFound { key },
            FederateError::Discovery(e) => CliError::Discovery {
                message: e.to_string(),
            },
            other => CliError::internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::internal(err.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::internal(err.to_string())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_exit_code() {
        let err: CliError = FederateError::ResourceNotFound {
            key: "widgets".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::NotFound { ref key } if key == "widgets"));
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_discovery_exit_code() {
        let err: CliError =
            FederateError::from(federate_kube::ParseGroupVersionError("a/b/c".to_string())).into();
        assert_eq!(err.exit_code(), exit_codes::DISCOVERY_ERROR);
        assert!(err.to_string().contains("error parsing GroupVersion"));
    }

    #[test]
    fn test_serialization_is_internal() {
        let err: CliError = FederateError::Serialization("bad".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::ERROR);
    }

    #[test]
    fn test_io_exit_code() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.exit_code(), exit_codes::IO_ERROR);
    }

    #[test]
    fn test_config_help() {
        let err = CliError::config_with_help("no context", "pass --context");
        assert!(matches!(err, CliError::Config { help: Some(ref h), .. } if h == "pass --context"));
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }
}
