//! Shared DTOs (schemas-as-code) for the fencecalc workspace.
//!
//! # Design constraints
//! - These types are intended to be serialized to disk and exchanged with the job form.
//! - Wire names are camelCase to match the field names the job form already uses.
//! - Quantities that are not needed are `None`, never `Some(0)`.

pub mod estimate;
pub mod job;
pub mod materials;
pub mod pricing;

/// Schema identifiers.
pub mod schema {
    pub const FENCECALC_ESTIMATE_V1: &str = "fencecalc.estimate.v1";
    pub const FENCECALC_PRICE_CHANGES_V1: &str = "fencecalc.price_changes.v1";
}
