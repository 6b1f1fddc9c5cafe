use std::fmt::Write;

use indexmap::IndexSet;

use crate::models::{ArtifactLicenses, Classification, LicensePolicy, Verdict};

/// Classify every artifact against `policy`.
///
/// Ignored artifacts are dropped first and show up nowhere. For the rest:
/// - a license is valid when it is permitted, or when it is a warning license
///   (which also records a warning line for the artifact);
/// - an artifact with several licenses may pick any one of them, so it is
///   restricted only when none is valid, and gets a combined warning when
///   some but not all are valid;
/// - an artifact without licenses is restricted.
///
/// The run is [`Verdict::Invalid`] iff at least one artifact is restricted.
pub fn classify(policy: &LicensePolicy, artifacts: &ArtifactLicenses) -> Classification {
    let all_artifacts: ArtifactLicenses = artifacts
        .iter()
        .filter(|(name, _)| {
            let ignored = policy.is_ignored(name);
            if ignored {
                tracing::debug!(artifact = %name, "ignored by config");
            }
            !ignored
        })
        .map(|(name, licenses)| (name.clone(), licenses.clone()))
        .collect();

    let mut warnings = String::new();
    let mut warned = IndexSet::new();
    let mut restricted = ArtifactLicenses::new();

    for (artifact, licenses) in &all_artifacts {
        let before = warnings.len();
        let valid = licenses
            .iter()
            .filter(|license| is_valid(policy, artifact, license, &mut warnings))
            .count();

        if valid == 0 {
            tracing::debug!(%artifact, ?licenses, "restricted");
            restricted.insert(artifact.clone(), licenses.clone());
        } else if valid < licenses.len() {
            let _ = writeln!(
                warnings,
                "{artifact}: has multiple licenses, not all permitted, but at least one is: {}",
                licenses.join(", ")
            );
        }

        if warnings.len() > before {
            warned.insert(artifact.clone());
        }
    }

    let verdict = if restricted.is_empty() {
        Verdict::Valid
    } else {
        Verdict::Invalid
    };

    Classification {
        all_artifacts,
        warnings,
        restricted,
        warned,
        verdict,
    }
}

/// Check a single license, appending a warning line when the license is only
/// permitted with a warning.
fn is_valid(policy: &LicensePolicy, artifact: &str, license: &str, warnings: &mut String) -> bool {
    if policy.permitted.contains(license) {
        return true;
    }

    match policy.warnings.get(license) {
        Some(message) => {
            let _ = writeln!(
                warnings,
                "{artifact}: license '{license}' is permitted with warning: {message}"
            );
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> LicensePolicy {
        let mut policy = LicensePolicy::default();
        policy.permitted.extend(["MIT".to_string(), "Apache-2.0".to_string()]);
        policy
            .warnings
            .insert("LGPL-2.1".to_string(), "dynamic linking only".to_string());
        policy
            .warnings
            .insert("MPL-2.0".to_string(), "file-level copyleft".to_string());
        policy.ignored.insert("com.example.internal".to_string());
        policy
    }

    fn artifacts(entries: &[(&str, &[&str])]) -> ArtifactLicenses {
        entries
            .iter()
            .map(|(name, licenses)| {
                (
                    name.to_string(),
                    licenses.iter().map(|l| l.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_single_permitted() {
        let result = classify(&policy(), &artifacts(&[("a:b:1", &["MIT"])]));
        assert_eq!(result.verdict, Verdict::Valid);
        assert!(result.warnings.is_empty());
        assert!(result.restricted.is_empty());
        assert!(result.warned.is_empty());
    }

    #[test]
    fn test_single_warning_license() {
        let result = classify(&policy(), &artifacts(&[("a:b:1", &["LGPL-2.1"])]));
        assert_eq!(result.verdict, Verdict::Valid);
        assert!(result.restricted.is_empty());
        assert_eq!(result.warning_lines().count(), 1);
        assert_eq!(
            result.warnings,
            "a:b:1: license 'LGPL-2.1' is permitted with warning: dynamic linking only\n"
        );
        assert!(result.warned.contains("a:b:1"));
    }

    #[test]
    fn test_single_unknown_is_restricted() {
        let result = classify(&policy(), &artifacts(&[("a:b:1", &["GPL-3.0"])]));
        assert_eq!(result.verdict, Verdict::Invalid);
        assert_eq!(result.restricted["a:b:1"], vec!["GPL-3.0"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_no_licenses_is_restricted() {
        let result = classify(&policy(), &artifacts(&[("a:b:1", &[])]));
        assert_eq!(result.verdict, Verdict::Invalid);
        assert!(result.restricted.contains_key("a:b:1"));
    }

    #[test]
    fn test_multiple_partially_permitted() {
        let result = classify(
            &policy(),
            &artifacts(&[("a:b:1", &["Apache-2.0", "GPL-3.0"])]),
        );
        assert_eq!(result.verdict, Verdict::Valid);
        assert!(result.restricted.is_empty());
        assert_eq!(
            result.warnings,
            "a:b:1: has multiple licenses, not all permitted, but at least one is: Apache-2.0, GPL-3.0\n"
        );
    }

    #[test]
    fn test_multiple_none_permitted() {
        let result = classify(
            &policy(),
            &artifacts(&[("a:b:1", &["GPL-2.0", "GPL-3.0"])]),
        );
        assert_eq!(result.verdict, Verdict::Invalid);
        assert_eq!(result.restricted.len(), 1);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_multiple_all_permitted_is_silent() {
        let result = classify(&policy(), &artifacts(&[("a:b:1", &["MIT", "Apache-2.0"])]));
        assert_eq!(result.verdict, Verdict::Valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_multiple_all_warning_licenses() {
        // every alternative is valid, so there is no combined line, but each
        // warning license still reports itself
        let result = classify(
            &policy(),
            &artifacts(&[("a:b:1", &["LGPL-2.1", "MPL-2.0"])]),
        );
        assert_eq!(result.verdict, Verdict::Valid);
        let lines: Vec<_> = result.warning_lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("dynamic linking only"));
        assert!(lines[1].contains("file-level copyleft"));
        assert!(!result.warnings.contains("multiple licenses"));
    }

    #[test]
    fn test_multiple_warning_and_unknown() {
        let result = classify(
            &policy(),
            &artifacts(&[("a:b:1", &["MPL-2.0", "GPL-3.0"])]),
        );
        assert_eq!(result.verdict, Verdict::Valid);
        let lines: Vec<_> = result.warning_lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("'MPL-2.0'"));
        assert!(lines[1].contains("multiple licenses"));
    }

    #[test]
    fn test_permitted_takes_precedence_over_warning() {
        let mut policy = policy();
        policy.permitted.insert("LGPL-2.1".to_string());
        let result = classify(&policy, &artifacts(&[("a:b:1", &["LGPL-2.1"])]));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_ignored_artifacts_only_in_all_artifacts() {
        let input = artifacts(&[
            ("com.example.internal:core:1.0", &["Proprietary"]),
            ("com.example.internal:ui:1.0", &["LGPL-2.1"]),
            ("org.other:lib:2.0", &["MIT"]),
        ]);
        let result = classify(&policy(), &input);
        assert_eq!(result.verdict, Verdict::Valid);
        assert!(result.warnings.is_empty());
        assert!(result.restricted.is_empty());
        assert_eq!(result.all_artifacts.len(), 1);
        assert!(result.all_artifacts.contains_key("org.other:lib:2.0"));
    }

    #[test]
    fn test_warnings_follow_report_order() {
        let input = artifacts(&[
            ("z:z:1", &["MPL-2.0"]),
            ("a:a:1", &["LGPL-2.1"]),
        ]);
        let result = classify(&policy(), &input);
        let lines: Vec<_> = result.warning_lines().collect();
        assert!(lines[0].starts_with("z:z:1"));
        assert!(lines[1].starts_with("a:a:1"));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let input = artifacts(&[
            ("a:b:1", &["MIT"]),
            ("c:d:2", &["Apache-2.0", "GPL-3.0"]),
            ("e:f:3", &["LGPL-2.1"]),
            ("g:h:4", &["SSPL-1.0"]),
        ]);
        let first = classify(&policy(), &input);
        let second = classify(&policy(), &input);
        assert_eq!(first, second);
        assert_eq!(first.accepted_count(), 3);
    }
}
