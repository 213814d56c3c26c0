//! Cost calculator.
//!
//! Only the ten core fence items are priced here. Gate hardware and the optional
//! add-ons are quoted separately and must not leak into this total.

use fencecalc_types::materials::EstimationResult;
use fencecalc_types::pricing::{LineItem, MaterialKind, PriceList};

/// Kinds included in [`compute_cost`], in breakdown order.
pub const PRICED_KINDS: [MaterialKind; 10] = [
    MaterialKind::LinePost,
    MaterialKind::Fabric,
    MaterialKind::TopRail,
    MaterialKind::TieWire,
    MaterialKind::LoopCap,
    MaterialKind::PostCap,
    MaterialKind::BraceBand,
    MaterialKind::TensionBar,
    MaterialKind::TensionBand,
    MaterialKind::NutAndBolt,
];

fn priced_quantity(result: &EstimationResult, kind: MaterialKind) -> Option<f64> {
    let count = match kind {
        MaterialKind::Fabric => return Some(result.fabric_footage),
        MaterialKind::LinePost => result.interior_line_posts,
        MaterialKind::TopRail => result.top_rail_sticks,
        MaterialKind::TieWire => result.tie_wires,
        MaterialKind::LoopCap => result.loop_caps,
        MaterialKind::PostCap => result.post_caps,
        MaterialKind::BraceBand => result.brace_bands,
        MaterialKind::TensionBar => result.tension_bars,
        MaterialKind::TensionBand => result.tension_bands,
        MaterialKind::NutAndBolt => result.nuts_and_bolts,
        _ => None,
    };
    count.map(|c| c as f64)
}

/// Priced rows for the items present on the bill. Absent items produce no row.
pub fn cost_breakdown(result: &EstimationResult, prices: &PriceList) -> Vec<LineItem> {
    PRICED_KINDS
        .into_iter()
        .filter_map(|kind| {
            let quantity = priced_quantity(result, kind)?;
            let unit_price = prices.price(kind);
            Some(LineItem {
                kind,
                quantity,
                unit_price,
                extended: quantity * unit_price,
            })
        })
        .collect()
}

/// Total price of the bill: sum of quantity times unit price over present items.
pub fn compute_cost(result: &EstimationResult, prices: &PriceList) -> f64 {
    cost_breakdown(result, prices)
        .iter()
        .map(|item| item.extended)
        .sum()
}
