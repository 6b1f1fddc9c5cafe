use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{ArtifactLicenses, Classification, Verdict};

/// On-disk layout of the result file. Field order is the key order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct ResultFile<'a> {
    all_artifacts: &'a ArtifactLicenses,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<&'a str>,
    result: [Verdict; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    restricted_artifacts: Option<&'a ArtifactLicenses>,
}

/// Render the result file as YAML.
///
/// `warnings` and `restricted-artifacts` are omitted when empty.
pub fn render(classification: &Classification) -> Result<String> {
    let file = ResultFile {
        all_artifacts: &classification.all_artifacts,
        warnings: Some(classification.warnings.as_str()).filter(|w| !w.is_empty()),
        result: [classification.verdict],
        restricted_artifacts: Some(&classification.restricted).filter(|r| !r.is_empty()),
    };

    serde_yaml::to_string(&file).context("failed to serialize license check result")
}

/// Write the result file to `path`.
pub fn write(classification: &Classification, path: &Path) -> Result<()> {
    let content = render(classification)?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write result file {}", path.display()))?;

    tracing::info!(output = %path.display(), "wrote license check result");
    Ok(())
}
