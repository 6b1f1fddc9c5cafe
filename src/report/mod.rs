//! Outputs of a license check.
//!
//! - [`file`] — the YAML result file consumed by CI.
//! - [`terminal`] — colored summary with warning and restricted sections;
//!   respects `--verbose` / `--quiet`.

pub mod file;
pub mod terminal;
