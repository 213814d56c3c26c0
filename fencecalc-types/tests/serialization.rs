use fencecalc_types::estimate::{Estimate, ToolInfo};
use fencecalc_types::job::{EstimationInput, FenceRun, FenceType};
use fencecalc_types::materials::{EstimationResult, FABRIC_TYPE, FenceLayout};
use fencecalc_types::pricing::{MaterialKind, PriceList};
use pretty_assertions::assert_eq;
use uuid::Uuid;

#[test]
fn job_form_payload_parses_with_defaults() {
    let raw = r#"{
        "runs": [{ "length": 60 }, { "length": 40.5 }],
        "fenceHeight": "4",
        "fenceColor": "black",
        "ends": 2
    }"#;

    let job: EstimationInput = serde_json::from_str(raw).expect("parse job");
    assert_eq!(job.runs, vec![FenceRun::new(60.0), FenceRun::new(40.5)]);
    assert_eq!(job.fence_height, "4");
    assert_eq!(job.fence_type, FenceType::Residential);
    assert_eq!(job.ends, 2);
    assert_eq!(job.corners, 0);
    assert_eq!(job.total_gates(), 0);
    assert!(!job.include_barbed_wire);
    assert_eq!(job.total_length(), 100.5);
}

#[test]
fn negative_count_is_rejected_at_parse_time() {
    let raw = r#"{ "runs": [], "fenceHeight": "4", "corners": -1 }"#;
    assert!(serde_json::from_str::<EstimationInput>(raw).is_err());
}

#[test]
fn total_gates_does_not_wrap() {
    let job = EstimationInput {
        single_gates: u32::MAX,
        double_gates: u32::MAX,
        pedestrian_gates: 1,
        ..EstimationInput::default()
    };
    assert_eq!(job.total_gates(), 2 * u64::from(u32::MAX) + 1);
}

#[test]
fn fence_type_uses_snake_case() {
    let v = serde_json::to_value(FenceType::Commercial).expect("serialize");
    assert_eq!(v, serde_json::json!("commercial"));
}

#[test]
fn absent_quantities_are_not_serialized() {
    let mut bill = EstimationResult::new(100.0, "SS20 WT", "green");
    bill.tie_wires = Some(150);

    let v = serde_json::to_value(&bill).expect("serialize");
    let obj = v.as_object().expect("object");
    assert_eq!(obj["fabricType"], FABRIC_TYPE);
    assert_eq!(obj["fabricFootage"], 100.0);
    assert_eq!(obj["tieWires"], 150);
    assert!(!obj.contains_key("barbedWire"));
    assert!(!obj.contains_key("ends"));
    assert_eq!(obj.len(), 5);
}

#[test]
fn price_list_reads_from_toml_table() {
    let raw = r#"
line_post = 18.75
fabric = 1.1
tension_band = 0.45
"#;
    let prices: PriceList = toml::from_str(raw).expect("parse prices");
    assert_eq!(prices.price(MaterialKind::LinePost), 18.75);
    assert_eq!(prices.price(MaterialKind::Fabric), 1.1);
    assert_eq!(prices.price(MaterialKind::TensionBand), 0.45);
    assert_eq!(prices.price(MaterialKind::GateLatch), 0.0);
}

#[test]
fn price_list_rejects_unknown_kind() {
    let raw = r#"{ "line_post": 1.0, "razor_wire": 2.0 }"#;
    let err = serde_json::from_str::<PriceList>(raw).expect_err("unknown kind");
    assert!(err.to_string().contains("razor_wire"));
}

#[test]
fn price_list_serializes_with_stable_keys() {
    let prices = PriceList::new()
        .with_price(MaterialKind::TieWire, 0.1)
        .with_price(MaterialKind::GateHinge, 7.0);
    let v = serde_json::to_value(&prices).expect("serialize");
    assert_eq!(v, serde_json::json!({ "gate_hinge": 7.0, "tie_wire": 0.1 }));
}

#[test]
fn material_kind_keys_round_trip() {
    for kind in MaterialKind::ALL {
        assert_eq!(MaterialKind::from_key(kind.key()), Some(kind));
        let v = serde_json::to_value(kind).expect("serialize");
        assert_eq!(v, serde_json::json!(kind.key()));
    }
}

#[test]
fn estimate_new_sets_schema_and_no_pricing() {
    let layout = FenceLayout {
        total_length: 0.0,
        sections: 0,
        post_spots: 1,
        terminal_posts: 0,
        interior_line_posts: 1,
    };
    let est = Estimate::new(
        Uuid::nil(),
        ToolInfo {
            name: "fencecalc".to_string(),
            version: None,
        },
        EstimationInput::default(),
        layout,
        EstimationResult::new(0.0, "SS20 WT", ""),
    );

    assert_eq!(est.schema, fencecalc_types::schema::FENCECALC_ESTIMATE_V1);
    assert!(est.pricing.is_none());
    let v = serde_json::to_value(&est).expect("serialize");
    assert!(v.get("pricing").is_none());
    assert_eq!(v["layout"]["postSpots"], 1);
}

#[test]
fn items_lists_fabric_then_present_quantities() {
    let mut bill = EstimationResult::new(55.5, "SS20 WT", "black");
    bill.ends = Some(2);
    bill.post_caps = Some(2);
    bill.gate_latches = Some(1);

    assert_eq!(
        bill.items(),
        vec![
            (MaterialKind::Fabric, 55.5),
            (MaterialKind::PostCap, 2.0),
            (MaterialKind::GateLatch, 1.0),
        ]
    );
}
