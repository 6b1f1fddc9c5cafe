use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Artifact name → licenses declared for it, in report order.
pub type ArtifactLicenses = IndexMap<String, Vec<String>>;

/// A license that is accepted, but only with an explanatory warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningLicense {
    pub name: String,
    pub warning: String,
}

/// The merged view of every configuration source.
///
/// All collections keep insertion order so that reports are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicensePolicy {
    /// Licenses accepted unconditionally.
    pub permitted: IndexSet<String>,
    /// License name → warning message.
    pub warnings: IndexMap<String, String>,
    /// Substrings; matching artifacts are skipped entirely.
    pub ignored: IndexSet<String>,
}

impl LicensePolicy {
    pub fn is_ignored(&self, artifact: &str) -> bool {
        self.ignored.iter().any(|pattern| artifact.contains(pattern.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Invalid => write!(f, "invalid"),
        }
    }
}

/// Result of a single classification pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Every artifact that survived the ignore filter.
    pub all_artifacts: ArtifactLicenses,
    /// Warning lines, each terminated by a newline.
    pub warnings: String,
    pub restricted: ArtifactLicenses,
    /// Artifacts that produced at least one warning line.
    pub warned: IndexSet<String>,
    pub verdict: Verdict,
}

impl Classification {
    pub fn accepted_count(&self) -> usize {
        self.all_artifacts.len() - self.restricted.len()
    }

    pub fn warning_lines(&self) -> impl Iterator<Item = &str> {
        self.warnings.lines()
    }
}
