//! Domain logic: turn a fence job into a bill of materials and a price.
//!
//! Everything here is pure. Validation happens once, at the boundary, and yields a
//! [`ValidatedJob`]; the calculators only accept that type and never fail.

mod calculator;
mod cost;
mod error;
mod estimator;
mod history;
mod validate;

pub use calculator::{BAY_SPACING, RAIL_STICK_LENGTH, TIES_PER_UNIT, compute_materials, layout};
pub use cost::{PRICED_KINDS, compute_cost, cost_breakdown};
pub use error::{InputError, InputResult};
pub use estimator::{Estimator, estimate_id};
pub use history::{PriceHistory, diff_price_lists};
pub use validate::{
    FenceHeight, MAX_COUNT, MAX_FENCE_HEIGHT, MAX_TOTAL_LENGTH, ValidatedJob, parse_height,
    validate_prices,
};
