use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every item that can appear on a bill of materials and carry a unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    LinePost,
    Fabric,
    TopRail,
    TieWire,
    LoopCap,
    PostCap,
    BraceBand,
    TensionBar,
    TensionBand,
    NutAndBolt,
    GatePost,
    GateHardwareSet,
    GateLatch,
    GateHinge,
    PrivacySlat,
    BarbedWire,
    BottomRail,
    RailEnd,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 18] = [
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
        MaterialKind::GatePost,
        MaterialKind::GateHardwareSet,
        MaterialKind::GateLatch,
        MaterialKind::GateHinge,
        MaterialKind::PrivacySlat,
        MaterialKind::BarbedWire,
        MaterialKind::BottomRail,
        MaterialKind::RailEnd,
    ];

    /// Stable key, identical to the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            MaterialKind::LinePost => "line_post",
            MaterialKind::Fabric => "fabric",
            MaterialKind::TopRail => "top_rail",
            MaterialKind::TieWire => "tie_wire",
            MaterialKind::LoopCap => "loop_cap",
            MaterialKind::PostCap => "post_cap",
            MaterialKind::BraceBand => "brace_band",
            MaterialKind::TensionBar => "tension_bar",
            MaterialKind::TensionBand => "tension_band",
            MaterialKind::NutAndBolt => "nut_and_bolt",
            MaterialKind::GatePost => "gate_post",
            MaterialKind::GateHardwareSet => "gate_hardware_set",
            MaterialKind::GateLatch => "gate_latch",
            MaterialKind::GateHinge => "gate_hinge",
            MaterialKind::PrivacySlat => "privacy_slat",
            MaterialKind::BarbedWire => "barbed_wire",
            MaterialKind::BottomRail => "bottom_rail",
            MaterialKind::RailEnd => "rail_end",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaterialKind::LinePost => "Interior line posts",
            MaterialKind::Fabric => "Chainlink fabric",
            MaterialKind::TopRail => "Top rail",
            MaterialKind::TieWire => "Tie wires",
            MaterialKind::LoopCap => "Loop caps",
            MaterialKind::PostCap => "Post caps",
            MaterialKind::BraceBand => "Brace bands",
            MaterialKind::TensionBar => "Tension bars",
            MaterialKind::TensionBand => "Tension bands",
            MaterialKind::NutAndBolt => "Nuts and bolts",
            MaterialKind::GatePost => "Gate posts",
            MaterialKind::GateHardwareSet => "Gate hardware sets",
            MaterialKind::GateLatch => "Gate latches",
            MaterialKind::GateHinge => "Gate hinges",
            MaterialKind::PrivacySlat => "Privacy slats",
            MaterialKind::BarbedWire => "Barbed wire",
            MaterialKind::BottomRail => "Bottom rail",
            MaterialKind::RailEnd => "Rail ends",
        }
    }

    /// What one unit of this item is.
    pub fn unit(self) -> &'static str {
        match self {
            MaterialKind::Fabric | MaterialKind::BarbedWire => "ft",
            MaterialKind::TopRail | MaterialKind::BottomRail => "stick",
            MaterialKind::GateHardwareSet => "set",
            _ => "each",
        }
    }

    pub fn from_key(key: &str) -> Option<MaterialKind> {
        MaterialKind::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// Unit price per material kind. Kinds without an entry price at zero.
///
/// Serialized as a flat table keyed by [`MaterialKind::key`], which keeps the
/// same shape in TOML config files and JSON artifacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct PriceList {
    prices: BTreeMap<MaterialKind, f64>,
}

impl PriceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every kind priced at `price`.
    pub fn uniform(price: f64) -> Self {
        Self {
            prices: MaterialKind::ALL.into_iter().map(|k| (k, price)).collect(),
        }
    }

    pub fn with_price(mut self, kind: MaterialKind, price: f64) -> Self {
        self.set(kind, price);
        self
    }

    pub fn price(&self, kind: MaterialKind) -> f64 {
        self.get(kind).unwrap_or(0.0)
    }

    /// The listed price, distinguishing "unlisted" from an explicit zero.
    pub fn get(&self, kind: MaterialKind) -> Option<f64> {
        self.prices.get(&kind).copied()
    }

    /// Sets a price and returns the one it replaced, if any.
    pub fn set(&mut self, kind: MaterialKind, price: f64) -> Option<f64> {
        self.prices.insert(kind, price)
    }

    pub fn remove(&mut self, kind: MaterialKind) -> Option<f64> {
        self.prices.remove(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaterialKind, f64)> + '_ {
        self.prices.iter().map(|(k, v)| (*k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for PriceList {
    type Error = String;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut prices = BTreeMap::new();
        for (key, price) in raw {
            let kind = MaterialKind::from_key(&key)
                .ok_or_else(|| format!("unknown material kind `{key}`"))?;
            prices.insert(kind, price);
        }
        Ok(Self { prices })
    }
}

impl From<PriceList> for BTreeMap<String, f64> {
    fn from(list: PriceList) -> Self {
        list.prices
            .into_iter()
            .map(|(k, v)| (k.key().to_string(), v))
            .collect()
    }
}

/// One priced row of an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub kind: MaterialKind,
    pub quantity: f64,
    pub unit_price: f64,
    pub extended: f64,
}

/// One entry of the price audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChange {
    pub kind: MaterialKind,

    /// `None` when the kind had no price before.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,

    /// `None` when the price was removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_price: Option<f64>,

    pub delta: f64,
    pub changed_at: DateTime<Utc>,
}
