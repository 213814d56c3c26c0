use serde::{Deserialize, Serialize};

/// One straight fence segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FenceRun {
    pub length: f64,
}

impl FenceRun {
    pub fn new(length: f64) -> Self {
        Self { length }
    }
}

/// Fence style. Selects the pipe gauge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FenceType {
    #[default]
    Residential,
    Commercial,
}

impl FenceType {
    pub fn is_residential(self) -> bool {
        matches!(self, FenceType::Residential)
    }
}

/// A fence job as submitted by the job form.
///
/// `fence_height` stays a string here: the form sends it that way and parsing
/// happens once, at validation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationInput {
    #[serde(default)]
    pub runs: Vec<FenceRun>,

    pub fence_height: String,

    #[serde(default)]
    pub fence_type: FenceType,

    #[serde(default)]
    pub fence_color: String,

    #[serde(default)]
    pub ends: u32,

    #[serde(default)]
    pub corners: u32,

    #[serde(default)]
    pub single_gates: u32,

    #[serde(default)]
    pub double_gates: u32,

    #[serde(default)]
    pub pedestrian_gates: u32,

    #[serde(default)]
    pub include_privacy_slats: bool,

    #[serde(default)]
    pub include_barbed_wire: bool,

    #[serde(default)]
    pub include_bottom_rail: bool,

    #[serde(default)]
    pub include_rail_ends: bool,
}

impl EstimationInput {
    /// Sum of all run lengths, unvalidated.
    pub fn total_length(&self) -> f64 {
        self.runs.iter().map(|r| r.length).sum()
    }

    pub fn total_gates(&self) -> u64 {
        [self.single_gates, self.double_gates, self.pedestrian_gates]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}
