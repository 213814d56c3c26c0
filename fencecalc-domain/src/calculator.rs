//! Material quantity calculator.
//!
//! Every count derived from a continuous length is rounded up. Under-ordering is
//! the failure to avoid; a spare tie wire costs nothing.

use crate::validate::ValidatedJob;
use fencecalc_types::job::FenceType;
use fencecalc_types::materials::{
    EstimationResult, FenceLayout, PIPE_WEIGHT_COMMERCIAL, PIPE_WEIGHT_RESIDENTIAL,
};

/// Standard distance between adjacent posts.
pub const BAY_SPACING: f64 = 10.0;

/// Length of one top-rail or bottom-rail stick.
pub const RAIL_STICK_LENGTH: f64 = 21.0;

/// Tie wires per unit of fence length.
pub const TIES_PER_UNIT: f64 = 1.5;

/// Geometry of the job: bays, post spots, terminal and interior posts.
pub fn layout(job: &ValidatedJob) -> FenceLayout {
    let input = job.input();
    let total_length = job.total_length();
    let sections = ceil_count(total_length / BAY_SPACING);
    let post_spots = sections.saturating_add(1);
    let terminal_posts = u64::from(input.ends) + u64::from(input.corners);

    FenceLayout {
        total_length,
        sections,
        post_spots,
        terminal_posts,
        interior_line_posts: interior_line_posts(
            i64::from(input.ends),
            i64::from(input.corners),
            to_signed(sections),
            to_signed(post_spots),
        ),
    }
}

/// Interior line posts for the given terminal points, clamped at zero.
///
/// The third arm can never match: any `ends == 0` job is taken by the second.
/// It is kept as written so the historical output for `ends == 0, corners == 0`
/// (`post_spots - corners`, not `sections - 1`) stays pinned until someone decides
/// which of the two was meant.
fn interior_line_posts(ends: i64, corners: i64, sections: i64, post_spots: i64) -> u64 {
    let count = match (ends, corners) {
        (1, 0) => post_spots - 1 - corners,
        (0, c) if c >= 0 => post_spots - corners,
        (0, 0) => sections - 1,
        // Two ends assumed.
        _ => post_spots - 2 - corners,
    };
    u64::try_from(count.max(0)).unwrap_or(0)
}

/// Bill of materials for a validated job.
pub fn compute_materials(job: &ValidatedJob) -> EstimationResult {
    let input = job.input();
    let geometry = layout(job);
    let total_length = geometry.total_length;
    let terminal_posts = geometry.terminal_posts;

    let mut bill = EstimationResult::new(
        total_length,
        pipe_weight(input.fence_type),
        &input.fence_color,
    );

    bill.ends = positive(u64::from(input.ends));
    bill.corners = positive(u64::from(input.corners));

    bill.interior_line_posts = positive(geometry.interior_line_posts);
    bill.top_rail_sticks = positive(ceil_count(total_length / RAIL_STICK_LENGTH));
    bill.tie_wires = positive(ceil_count(total_length * TIES_PER_UNIT));
    bill.loop_caps = positive(geometry.interior_line_posts);

    if terminal_posts > 0 {
        let braces = u64::from(input.ends) + 2 * u64::from(input.corners);
        let tension_bands = u64::from(job.height().get()) * terminal_posts;
        bill.brace_bands = Some(braces);
        bill.tension_bars = Some(braces);
        bill.tension_bands = Some(tension_bands);
        bill.nuts_and_bolts = Some(tension_bands + braces);
        bill.post_caps = Some(terminal_posts);
    }

    let single = u64::from(input.single_gates);
    let double = u64::from(input.double_gates);
    let pedestrian = u64::from(input.pedestrian_gates);
    let total_gates = input.total_gates();
    bill.gate_posts = positive(total_gates * 2);
    bill.gate_hardware_sets = positive(total_gates);
    bill.gate_latches = positive(total_gates);
    // Double gates hang two leaves.
    bill.gate_hinges = positive(single * 2 + double * 4 + pedestrian * 2);

    if input.include_privacy_slats {
        bill.privacy_slats = positive(ceil_count(total_length));
    }
    if input.include_barbed_wire {
        bill.barbed_wire = positive(ceil_count(total_length));
    }
    if input.include_bottom_rail {
        bill.bottom_rail_sticks = positive(ceil_count(total_length / RAIL_STICK_LENGTH));
    }
    if input.include_rail_ends {
        let rails = if input.include_bottom_rail { 2 } else { 1 };
        bill.rail_ends = positive(terminal_posts * 2 * rails);
    }

    bill
}

fn pipe_weight(fence_type: FenceType) -> &'static str {
    if fence_type.is_residential() {
        PIPE_WEIGHT_RESIDENTIAL
    } else {
        PIPE_WEIGHT_COMMERCIAL
    }
}

// Inputs are finite, non-negative and bounded after validation.
fn ceil_count(value: f64) -> u64 {
    value.ceil() as u64
}

fn positive(count: u64) -> Option<u64> {
    (count > 0).then_some(count)
}

fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
