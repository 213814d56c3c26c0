use crate::job::EstimationInput;
use crate::materials::{EstimationResult, FenceLayout};
use crate::pricing::LineItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// The estimate artifact: a job, its geometry, its bill of materials and,
/// when a price list was supplied, the priced breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub schema: String,

    /// Deterministic: identical inputs produce identical ids.
    pub id: Uuid,

    pub tool: ToolInfo,
    pub input: EstimationInput,
    pub layout: FenceLayout,
    pub materials: EstimationResult,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
}

impl Estimate {
    pub fn new(
        id: Uuid,
        tool: ToolInfo,
        input: EstimationInput,
        layout: FenceLayout,
        materials: EstimationResult,
    ) -> Self {
        Self {
            schema: crate::schema::FENCECALC_ESTIMATE_V1.to_string(),
            id,
            tool,
            input,
            layout,
            materials,
            pricing: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub total: f64,
}
