//! Worked examples for the estimator, pinned field by field.

use fencecalc_domain::{ValidatedJob, compute_cost, compute_materials, cost_breakdown, layout};
use fencecalc_types::job::{EstimationInput, FenceRun, FenceType};
use fencecalc_types::materials::{EstimationResult, FABRIC_TYPE, PIPE_WEIGHT_RESIDENTIAL};
use fencecalc_types::pricing::{MaterialKind, PriceList};
use pretty_assertions::assert_eq;

fn hundred_foot_job() -> EstimationInput {
    EstimationInput {
        runs: vec![FenceRun::new(100.0)],
        fence_height: "4".to_string(),
        fence_type: FenceType::Residential,
        fence_color: "galvanized".to_string(),
        ends: 2,
        corners: 0,
        ..EstimationInput::default()
    }
}

fn materials(input: EstimationInput) -> EstimationResult {
    compute_materials(&ValidatedJob::try_from(input).expect("valid job"))
}

#[test]
fn hundred_feet_two_ends() {
    let job = ValidatedJob::try_from(hundred_foot_job()).expect("valid job");
    let geometry = layout(&job);
    assert_eq!(geometry.total_length, 100.0);
    assert_eq!(geometry.sections, 10);
    assert_eq!(geometry.post_spots, 11);
    assert_eq!(geometry.terminal_posts, 2);

    let mut expected = EstimationResult::new(100.0, PIPE_WEIGHT_RESIDENTIAL, "galvanized");
    expected.ends = Some(2);
    expected.interior_line_posts = Some(9);
    expected.top_rail_sticks = Some(5);
    expected.tie_wires = Some(150);
    expected.loop_caps = Some(9);
    expected.brace_bands = Some(2);
    expected.tension_bars = Some(2);
    expected.tension_bands = Some(8);
    expected.nuts_and_bolts = Some(10);
    expected.post_caps = Some(2);

    let bill = compute_materials(&job);
    assert_eq!(bill, expected);
    assert_eq!(bill.fabric_type, FABRIC_TYPE);
    assert_eq!(bill.pipe_weight, "SS20 WT");
}

#[test]
fn one_single_gate_adds_gate_hardware() {
    let bill = materials(EstimationInput {
        single_gates: 1,
        ..hundred_foot_job()
    });
    assert_eq!(bill.gate_posts, Some(2));
    assert_eq!(bill.gate_hardware_sets, Some(1));
    assert_eq!(bill.gate_latches, Some(1));
    assert_eq!(bill.gate_hinges, Some(2));
}

#[test]
fn double_gate_needs_four_hinges() {
    let bill = materials(EstimationInput {
        double_gates: 1,
        pedestrian_gates: 1,
        ..hundred_foot_job()
    });
    assert_eq!(bill.gate_posts, Some(4));
    assert_eq!(bill.gate_hinges, Some(6));
}

#[test]
fn no_gates_means_no_gate_fields() {
    let bill = materials(hundred_foot_job());
    assert_eq!(bill.gate_posts, None);
    assert_eq!(bill.gate_hardware_sets, None);
    assert_eq!(bill.gate_latches, None);
    assert_eq!(bill.gate_hinges, None);
}

#[test]
fn barbed_wire_follows_its_flag() {
    let with = materials(EstimationInput {
        include_barbed_wire: true,
        ..hundred_foot_job()
    });
    assert_eq!(with.barbed_wire, Some(100));

    let without = materials(hundred_foot_job());
    assert_eq!(without.barbed_wire, None);
}

#[test]
fn privacy_slats_round_up_fractional_length() {
    let bill = materials(EstimationInput {
        runs: vec![FenceRun::new(50.25), FenceRun::new(20.0)],
        include_privacy_slats: true,
        ..hundred_foot_job()
    });
    assert_eq!(bill.fabric_footage, 70.25);
    assert_eq!(bill.privacy_slats, Some(71));
    assert_eq!(bill.tie_wires, Some(106));
}

#[test]
fn no_terminal_points_drops_terminal_hardware() {
    let bill = materials(EstimationInput {
        ends: 0,
        corners: 0,
        ..hundred_foot_job()
    });
    assert_eq!(bill.brace_bands, None);
    assert_eq!(bill.tension_bars, None);
    assert_eq!(bill.tension_bands, None);
    assert_eq!(bill.nuts_and_bolts, None);
    assert_eq!(bill.post_caps, None);
    assert_eq!(bill.ends, None);
    assert_eq!(bill.corners, None);
}

#[test]
fn no_terminal_points_interior_posts_regression() {
    // ends == 0 && corners == 0 resolves to post_spots - corners.
    let bill = materials(EstimationInput {
        ends: 0,
        corners: 0,
        ..hundred_foot_job()
    });
    assert_eq!(bill.interior_line_posts, Some(11));
    assert_eq!(bill.loop_caps, Some(11));
}

#[test]
fn corners_count_twice_for_bands_and_bars() {
    let bill = materials(EstimationInput {
        ends: 2,
        corners: 2,
        fence_height: "6".to_string(),
        ..hundred_foot_job()
    });
    assert_eq!(bill.corners, Some(2));
    assert_eq!(bill.interior_line_posts, Some(7));
    assert_eq!(bill.brace_bands, Some(6));
    assert_eq!(bill.tension_bars, Some(6));
    assert_eq!(bill.tension_bands, Some(24));
    assert_eq!(bill.nuts_and_bolts, Some(30));
    assert_eq!(bill.post_caps, Some(4));
}

#[test]
fn fractional_height_truncates() {
    let bill = materials(EstimationInput {
        fence_height: "5.75".to_string(),
        ..hundred_foot_job()
    });
    assert_eq!(bill.tension_bands, Some(10));
}

#[test]
fn empty_job_has_only_fixed_fields_and_posts() {
    let bill = materials(EstimationInput {
        runs: vec![],
        ends: 0,
        ..hundred_foot_job()
    });
    assert_eq!(bill.fabric_footage, 0.0);
    assert_eq!(bill.top_rail_sticks, None);
    assert_eq!(bill.tie_wires, None);
    assert_eq!(bill.interior_line_posts, Some(1));
}

#[test]
fn unit_prices_of_one_cost_297() {
    let bill = materials(hundred_foot_job());
    assert_eq!(compute_cost(&bill, &PriceList::uniform(1.0)), 297.0);
}

#[test]
fn cost_ignores_gates_and_add_ons() {
    let plain = materials(hundred_foot_job());
    let loaded = materials(EstimationInput {
        single_gates: 2,
        double_gates: 1,
        include_barbed_wire: true,
        include_privacy_slats: true,
        include_bottom_rail: true,
        include_rail_ends: true,
        ..hundred_foot_job()
    });
    let prices = PriceList::uniform(3.5);
    assert_eq!(compute_cost(&plain, &prices), compute_cost(&loaded, &prices));
}

#[test]
fn breakdown_matches_total() {
    let bill = materials(hundred_foot_job());
    let prices = PriceList::new()
        .with_price(MaterialKind::LinePost, 24.0)
        .with_price(MaterialKind::Fabric, 1.25)
        .with_price(MaterialKind::TopRail, 31.0)
        .with_price(MaterialKind::TieWire, 0.08)
        .with_price(MaterialKind::TensionBand, 0.9);

    let items = cost_breakdown(&bill, &prices);
    let kinds: Vec<_> = items.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
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
        ]
    );

    let total: f64 = items.iter().map(|i| i.extended).sum();
    assert_eq!(total, compute_cost(&bill, &prices));
    // 9*24 + 100*1.25 + 5*31 + 150*0.08 + 8*0.9
    assert!((total - 515.2).abs() < 1e-9);
}
