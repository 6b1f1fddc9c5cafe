use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ReportError;
use crate::models::ArtifactLicenses;

/// Licenses as the build tool writes them: usually a list, sometimes a bare
/// string for a single license.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseEntry {
    Many(Vec<String>),
    One(String),
}

/// Load the dependency → licenses report produced by the build tool.
///
/// The report is a YAML (or JSON) mapping of artifact name to license names.
/// A `null` entry is read as an artifact with no licenses. Any failure here is
/// fatal for the run.
pub fn load_license_report(path: &Path) -> Result<ArtifactLicenses, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(ArtifactLicenses::new());
    }

    let raw: Option<IndexMap<String, Option<LicenseEntry>>> = serde_yaml::from_str(&content)
        .map_err(|source| ReportError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let artifacts: ArtifactLicenses = raw
        .unwrap_or_default()
        .into_iter()
        .map(|(artifact, entry)| {
            let licenses = match entry {
                Some(LicenseEntry::Many(licenses)) => licenses,
                Some(LicenseEntry::One(license)) => vec![license],
                None => Vec::new(),
            };
            (artifact, licenses)
        })
        .collect();

    tracing::debug!(
        report = %path.display(),
        artifacts = artifacts.len(),
        "loaded dependency license report"
    );

    Ok(artifacts)
}
