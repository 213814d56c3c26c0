use crate::pricing::MaterialKind;
use serde::{Deserialize, Serialize};

/// Fabric description carried on every bill of materials.
pub const FABRIC_TYPE: &str = "9-gauge wire";

/// Pipe weight class for residential fences.
pub const PIPE_WEIGHT_RESIDENTIAL: &str = "SS20 WT";

/// Pipe weight class for commercial fences.
pub const PIPE_WEIGHT_COMMERCIAL: &str = "SS40 WT";

/// Geometry derived from a job before any material is counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FenceLayout {
    pub total_length: f64,
    pub sections: u64,
    pub post_spots: u64,
    pub terminal_posts: u64,
    pub interior_line_posts: u64,
}

/// Sparse bill of materials.
///
/// The four descriptive fields are always present. Every quantity is `None` when
/// the job does not need that item; a `None` is never billed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub fabric_type: String,
    pub fabric_footage: f64,
    pub pipe_weight: String,
    pub color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corners: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interior_line_posts: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_rail_sticks: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie_wires: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_caps: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brace_bands: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension_bars: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension_bands: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuts_and_bolts: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_caps: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_posts: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_hardware_sets: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_latches: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_hinges: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_slats: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barbed_wire: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_rail_sticks: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rail_ends: Option<u64>,
}

impl EstimationResult {
    /// A bill with only the always-present fields filled in.
    pub fn new(
        fabric_footage: f64,
        pipe_weight: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            fabric_type: FABRIC_TYPE.to_string(),
            fabric_footage,
            pipe_weight: pipe_weight.into(),
            color: color.into(),
            ends: None,
            corners: None,
            interior_line_posts: None,
            top_rail_sticks: None,
            tie_wires: None,
            loop_caps: None,
            brace_bands: None,
            tension_bars: None,
            tension_bands: None,
            nuts_and_bolts: None,
            post_caps: None,
            gate_posts: None,
            gate_hardware_sets: None,
            gate_latches: None,
            gate_hinges: None,
            privacy_slats: None,
            barbed_wire: None,
            bottom_rail_sticks: None,
            rail_ends: None,
        }
    }

    /// Present items with their quantities, fabric first.
    ///
    /// The `ends` and `corners` echoes are not materials and are left out.
    pub fn items(&self) -> Vec<(MaterialKind, f64)> {
        let counted = [
            (MaterialKind::LinePost, self.interior_line_posts),
            (MaterialKind::TopRail, self.top_rail_sticks),
            (MaterialKind::TieWire, self.tie_wires),
            (MaterialKind::LoopCap, self.loop_caps),
            (MaterialKind::PostCap, self.post_caps),
            (MaterialKind::BraceBand, self.brace_bands),
            (MaterialKind::TensionBar, self.tension_bars),
            (MaterialKind::TensionBand, self.tension_bands),
            (MaterialKind::NutAndBolt, self.nuts_and_bolts),
            (MaterialKind::GatePost, self.gate_posts),
            (MaterialKind::GateHardwareSet, self.gate_hardware_sets),
            (MaterialKind::GateLatch, self.gate_latches),
            (MaterialKind::GateHinge, self.gate_hinges),
            (MaterialKind::PrivacySlat, self.privacy_slats),
            (MaterialKind::BarbedWire, self.barbed_wire),
            (MaterialKind::BottomRail, self.bottom_rail_sticks),
            (MaterialKind::RailEnd, self.rail_ends),
        ];

        std::iter::once((MaterialKind::Fabric, self.fabric_footage))
            .chain(
                counted
                    .into_iter()
                    .filter_map(|(kind, count)| count.map(|c| (kind, c as f64))),
            )
            .collect()
    }
}
