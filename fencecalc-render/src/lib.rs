//! Rendering helpers (markdown) for human-readable estimates.

use fencecalc_types::estimate::Estimate;
use fencecalc_types::pricing::PriceChange;

pub fn render_estimate_md(est: &Estimate) -> String {
    let mut out = String::new();
    out.push_str("# fencecalc estimate\n\n");
    out.push_str(&format!("- Id: `{}`\n", est.id));
    out.push_str(&format!(
        "- Fence: {} ft, height {}, {} ({})\n",
        fmt_qty(est.layout.total_length),
        est.input.fence_height.trim(),
        color_label(&est.materials.color),
        est.materials.pipe_weight
    ));
    out.push_str(&format!(
        "- Sections: {} (post spots {})\n",
        est.layout.sections, est.layout.post_spots
    ));
    out.push_str(&format!(
        "- Terminal posts: {} ({} ends, {} corners)\n",
        est.layout.terminal_posts, est.input.ends, est.input.corners
    ));
    out.push_str(&format!("- Gates: {}\n\n", est.input.total_gates()));

    out.push_str("## Materials\n\n");
    out.push_str(&format!("Fabric: {}\n\n", est.materials.fabric_type));
    out.push_str("| Item | Quantity | Unit |\n");
    out.push_str("|---|---:|---|\n");
    for (kind, qty) in est.materials.items() {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            kind.label(),
            fmt_qty(qty),
            kind.unit()
        ));
    }
    out.push('\n');

    let Some(pricing) = &est.pricing else {
        out.push_str("_No price list supplied._\n");
        return out;
    };

    out.push_str("## Pricing\n\n");
    out.push_str("| Item | Quantity | Unit price | Amount |\n");
    out.push_str("|---|---:|---:|---:|\n");
    for item in &pricing.line_items {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            item.kind.label(),
            fmt_qty(item.quantity),
            fmt_money(item.unit_price),
            fmt_money(item.extended)
        ));
    }
    out.push_str(&format!("\n**Total: {}**\n\n", fmt_money(pricing.total)));
    out.push_str("Gate hardware and add-ons are quoted separately.\n");

    out
}

pub fn render_price_changes_md(changes: &[PriceChange]) -> String {
    let mut out = String::new();
    out.push_str("# fencecalc price changes\n\n");
    if changes.is_empty() {
        out.push_str("_No price changes._\n");
        return out;
    }

    out.push_str("| Item | Old | New | Change | When |\n");
    out.push_str("|---|---:|---:|---:|---|\n");
    for c in changes {
        out.push_str(&format!(
            "| {} | {} | {} | {:+.2} | {} |\n",
            c.kind.label(),
            c.old_price.map(fmt_money).unwrap_or_else(|| "-".to_string()),
            c.new_price.map(fmt_money).unwrap_or_else(|| "-".to_string()),
            c.delta,
            c.changed_at.to_rfc3339()
        ));
    }

    out
}

fn color_label(color: &str) -> &str {
    if color.trim().is_empty() {
        "no color"
    } else {
        color
    }
}

fn fmt_qty(q: f64) -> String {
    if q.fract() == 0.0 {
        format!("{}", q as u64)
    } else {
        format!("{:.2}", q)
    }
}

fn fmt_money(v: f64) -> String {
    format!("${:.2}", v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fencecalc_types::estimate::{Pricing, ToolInfo};
    use fencecalc_types::job::{EstimationInput, FenceRun};
    use fencecalc_types::materials::{EstimationResult, FenceLayout};
    use fencecalc_types::pricing::{LineItem, MaterialKind};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn estimate() -> Estimate {
        let mut materials = EstimationResult::new(42.5, "SS20 WT", "black");
        materials.tie_wires = Some(64);
        materials.gate_latches = Some(1);
        Estimate::new(
            Uuid::nil(),
            ToolInfo {
                name: "fencecalc".to_string(),
                version: None,
            },
            EstimationInput {
                runs: vec![FenceRun::new(42.5)],
                fence_height: "5".to_string(),
                single_gates: 1,
                ..EstimationInput::default()
            },
            FenceLayout {
                total_length: 42.5,
                sections: 5,
                post_spots: 6,
                terminal_posts: 0,
                interior_line_posts: 6,
            },
            materials,
        )
    }

    #[test]
    fn unpriced_estimate_lists_materials() {
        let md = render_estimate_md(&estimate());
        assert!(md.contains("- Fence: 42.50 ft, height 5, black (SS20 WT)"));
        assert!(md.contains("| Chainlink fabric | 42.50 | ft |"));
        assert!(md.contains("| Tie wires | 64 | each |"));
        assert!(md.contains("| Gate latches | 1 | each |"));
        assert!(md.contains("- Gates: 1"));
        assert!(md.contains("_No price list supplied._"));
        assert!(!md.contains("## Pricing"));
    }

    #[test]
    fn priced_estimate_shows_total() {
        let mut est = estimate();
        est.pricing = Some(Pricing {
            line_items: vec![LineItem {
                kind: MaterialKind::Fabric,
                quantity: 42.5,
                unit_price: 2.0,
                extended: 85.0,
            }],
            total: 85.0,
        });
        let md = render_estimate_md(&est);
        assert!(md.contains("| Chainlink fabric | 42.50 | $2.00 | $85.00 |"));
        assert!(md.contains("**Total: $85.00**"));
    }

    #[test]
    fn empty_change_list() {
        assert_eq!(
            render_price_changes_md(&[]),
            "# fencecalc price changes\n\n_No price changes._\n"
        );
    }

    #[test]
    fn change_rows_show_old_new_and_delta() {
        let at = Utc
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .expect("valid date");
        let md = render_price_changes_md(&[
            PriceChange {
                kind: MaterialKind::TopRail,
                old_price: Some(30.0),
                new_price: Some(27.5),
                delta: -2.5,
                changed_at: at,
            },
            PriceChange {
                kind: MaterialKind::GateLatch,
                old_price: None,
                new_price: Some(9.0),
                delta: 9.0,
                changed_at: at,
            },
        ]);
        assert!(md.contains("| Top rail | $30.00 | $27.50 | -2.50 | 2024-06-01T12:00:00+00:00 |"));
        assert!(md.contains("| Gate latches | - | $9.00 | +9.00 |"));
    }
}
