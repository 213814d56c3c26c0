use crate::calculator::{compute_materials, layout};
use crate::cost::cost_breakdown;
use crate::error::InputResult;
use crate::validate::{ValidatedJob, validate_prices};
use fencecalc_types::estimate::{Estimate, Pricing, ToolInfo};
use fencecalc_types::job::EstimationInput;
use fencecalc_types::pricing::PriceList;
use tracing::debug;
use uuid::Uuid;

/// Validates a job, counts its materials and, optionally, prices them.
#[derive(Debug, Clone)]
pub struct Estimator {
    tool: ToolInfo,
}

impl Estimator {
    pub fn new(tool: ToolInfo) -> Self {
        Self { tool }
    }

    pub fn estimate(
        &self,
        input: &EstimationInput,
        prices: Option<&PriceList>,
    ) -> InputResult<Estimate> {
        let job = ValidatedJob::try_from(input.clone())?;
        let geometry = layout(&job);
        let materials = compute_materials(&job);
        debug!(
            total_length = geometry.total_length,
            sections = geometry.sections,
            terminal_posts = geometry.terminal_posts,
            "computed materials"
        );

        let mut estimate = Estimate::new(
            estimate_id(input),
            self.tool.clone(),
            job.into_input(),
            geometry,
            materials,
        );

        if let Some(prices) = prices {
            validate_prices(prices)?;
            let line_items = cost_breakdown(&estimate.materials, prices);
            let total: f64 = line_items.iter().map(|item| item.extended).sum();
            debug!(items = line_items.len(), total, "priced estimate");
            estimate.pricing = Some(Pricing { line_items, total });
        }

        Ok(estimate)
    }
}

/// Deterministic id for a job: identical inputs always map to the same id.
pub fn estimate_id(input: &EstimationInput) -> Uuid {
    // Deterministic ID: v5(namespace, job_json)
    const NAMESPACE: Uuid = Uuid::from_bytes([
        0x7a, 0x1c, 0x52, 0x0e, 0x93, 0x4f, 0x4e, 0x2b, 0xa6, 0x0d, 0x5f, 0x31, 0xc8, 0x17, 0xe4,
        0x60,
    ]);

    // A struct of strings, numbers and bools always serializes; non-finite
    // floats become `null` rather than an error.
    let stable_key = serde_json::to_vec(input).unwrap_or_default();
    Uuid::new_v5(&NAMESPACE, &stable_key)
}
