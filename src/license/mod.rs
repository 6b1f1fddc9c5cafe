//! License policy evaluation.
//!
//! - [`classifier`] — sorts artifacts into accepted, warned and restricted
//!   against a merged [`LicensePolicy`](crate::models::LicensePolicy).

pub mod classifier;
