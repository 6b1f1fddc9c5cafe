use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;
use crate::models::{LicensePolicy, WarningLicense};

/// One license configuration file, either repository-wide or project-specific.
///
/// ```yaml
/// permitted:
///   - MIT
/// permitted-with-warning:
///   - name: LGPL-2.1
///     warning: dynamic linking only
/// ignored-artifacts:
///   - com.example.internal
/// ```
///
/// Properties are read independently: a missing, `null` or ill-typed
/// property contributes nothing and is recorded in `problems`, while the
/// other properties of the file still apply.
#[derive(Debug, Default)]
pub struct LicenseConfig {
    pub permitted: Option<Vec<String>>,
    pub permitted_with_warning: Option<Vec<WarningLicense>>,
    pub ignored_artifacts: Option<Vec<String>>,
    pub problems: Vec<ConfigError>,
}

/// Read and parse a single configuration file.
///
/// Only an unreadable file or a document that is not a YAML mapping fails as
/// a whole. An empty document is a config with every property missing.
pub fn load_config_file(path: &Path) -> Result<LicenseConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let malformed = |source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    };

    let document: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(&content).map_err(malformed)?
    };

    let mapping: Mapping = match document {
        Value::Null => Mapping::new(),
        other => serde_yaml::from_value(other).map_err(malformed)?,
    };

    let mut config = LicenseConfig::default();
    config.permitted = property(&mapping, path, "permitted", &mut config.problems);
    config.permitted_with_warning =
        property(&mapping, path, "permitted-with-warning", &mut config.problems);
    config.ignored_artifacts =
        property(&mapping, path, "ignored-artifacts", &mut config.problems);

    Ok(config)
}

/// Convert one top-level property, recording why it contributes nothing.
fn property<T: DeserializeOwned>(
    mapping: &Mapping,
    path: &Path,
    name: &'static str,
    problems: &mut Vec<ConfigError>,
) -> Option<T> {
    let value = match mapping.get(name) {
        Some(value) if !value.is_null() => value.clone(),
        _ => {
            problems.push(ConfigError::MissingProperty {
                path: path.to_path_buf(),
                property: name,
            });
            return None;
        }
    };

    match serde_yaml::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(source) => {
            problems.push(ConfigError::InvalidProperty {
                path: path.to_path_buf(),
                property: name,
                source,
            });
            None
        }
    }
}

/// Build the effective policy from every configuration source, in order.
///
/// Unreadable or malformed sources are logged and skipped, as are individual
/// missing or invalid properties. Permitted and ignored lists are unioned;
/// warning licenses are keyed by name and a later source replaces the message
/// of an earlier one.
pub fn load_policy(sources: &[&Path]) -> LicensePolicy {
    let mut policy = LicensePolicy::default();

    for path in sources {
        match load_config_file(path) {
            Ok(config) => {
                for problem in &config.problems {
                    match problem {
                        ConfigError::MissingProperty { .. } => {
                            tracing::info!("{problem}; treating it as empty")
                        }
                        _ => tracing::warn!("{problem}; it contributes nothing"),
                    }
                }
                merge(&mut policy, config);
                tracing::debug!(config = %path.display(), "loaded license config");
            }
            Err(err) => {
                tracing::warn!("{err}; it contributes no licenses");
            }
        }
    }

    tracing::debug!(
        permitted = policy.permitted.len(),
        warnings = policy.warnings.len(),
        ignored = policy.ignored.len(),
        "effective license policy"
    );

    policy
}

/// Fold one config source into `policy`.
pub fn merge(policy: &mut LicensePolicy, config: LicenseConfig) {
    policy
        .permitted
        .extend(config.permitted.unwrap_or_default());

    for entry in config.permitted_with_warning.unwrap_or_default() {
        policy.warnings.insert(entry.name, entry.warning);
    }

    policy
        .ignored
        .extend(config.ignored_artifacts.unwrap_or_default());
}
