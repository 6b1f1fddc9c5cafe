//! Error types for loading configuration and the build-tool license report.
//!
//! [`ConfigError`] is always recoverable: the offending file or property contributes
//! nothing and the run continues. [`ReportError`] aborts the run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read license config {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse license config {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("property `{property}` is missing or null in {}", path.display())]
    MissingProperty { path: PathBuf, property: &'static str },

    #[error("property `{property}` in {} is invalid: {source}", path.display())]
    InvalidProperty {
        path: PathBuf,
        property: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot read dependency license report {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse dependency license report {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
