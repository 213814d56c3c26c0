//! Price audit trail.
//!
//! Every edit to the price list is recorded as one [`PriceChange`] per material
//! kind whose price moved, so any past quote can be re-priced as it stood.

use chrono::{DateTime, Utc};
use fencecalc_types::pricing::{MaterialKind, PriceChange, PriceList};
use tracing::debug;

/// Changes between two price lists, in [`MaterialKind::ALL`] order.
pub fn diff_price_lists(
    old: &PriceList,
    new: &PriceList,
    changed_at: DateTime<Utc>,
) -> Vec<PriceChange> {
    MaterialKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let old_price = old.get(kind);
            let new_price = new.get(kind);
            if old_price == new_price {
                return None;
            }
            Some(PriceChange {
                kind,
                old_price,
                new_price,
                delta: new_price.unwrap_or(0.0) - old_price.unwrap_or(0.0),
                changed_at,
            })
        })
        .collect()
}

/// A price list plus every change applied to it, ordered by time.
#[derive(Debug, Clone, Default)]
pub struct PriceHistory {
    baseline: PriceList,
    entries: Vec<PriceChange>,
}

impl PriceHistory {
    /// Starts a history whose earliest known prices are `baseline`.
    pub fn new(baseline: PriceList) -> Self {
        Self {
            baseline,
            entries: Vec::new(),
        }
    }

    /// Makes `new` the list in effect from `changed_at`, recording what changed
    /// against the list as it stood at that moment.
    ///
    /// A back-dated update does not undo later entries: they still apply from
    /// their own timestamps, so `current()` only equals `new` when no entry is
    /// newer than `changed_at`.
    ///
    /// Returns the recorded entries; an identical list records nothing.
    pub fn update(&mut self, new: &PriceList, changed_at: DateTime<Utc>) -> Vec<PriceChange> {
        let changes = diff_price_lists(&self.list_at(changed_at), new, changed_at);
        for change in &changes {
            self.record(change.clone());
        }
        debug!(count = changes.len(), at = %changed_at, "recorded price changes");
        changes
    }

    /// Inserts one entry, keeping entries ordered by `changed_at`.
    /// Entries with equal timestamps keep insertion order.
    pub fn record(&mut self, change: PriceChange) {
        let pos = self
            .entries
            .partition_point(|e| e.changed_at <= change.changed_at);
        self.entries.insert(pos, change);
    }

    pub fn entries(&self) -> &[PriceChange] {
        &self.entries
    }

    pub fn changes_for(&self, kind: MaterialKind) -> impl Iterator<Item = &PriceChange> + '_ {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// The price of `kind` in effect at `at`. `None` when it was unlisted then.
    pub fn price_at(&self, kind: MaterialKind, at: DateTime<Utc>) -> Option<f64> {
        self.changes_for(kind)
            .take_while(|e| e.changed_at <= at)
            .fold(self.baseline.get(kind), |_, e| e.new_price)
    }

    /// The whole list as it stood at `at`.
    pub fn list_at(&self, at: DateTime<Utc>) -> PriceList {
        let mut list = self.baseline.clone();
        for e in self.entries.iter().take_while(|e| e.changed_at <= at) {
            apply(&mut list, e);
        }
        list
    }

    /// The list with every recorded change applied.
    pub fn current(&self) -> PriceList {
        let mut list = self.baseline.clone();
        for e in &self.entries {
            apply(&mut list, e);
        }
        list
    }
}

fn apply(list: &mut PriceList, change: &PriceChange) {
    match change.new_price {
        Some(price) => {
            list.set(change.kind, price);
        }
        None => {
            list.remove(change.kind);
        }
    }
}
