use std::collections::BTreeMap;

use foundation::ParcelId;

use crate::store::ParcelStore;

/// Bucket for parcels with no zoning label.
pub const UNKNOWN_ZONING: &str = "Unknown";

/// Aggregate statistics over a set of selected parcels.
///
/// Only ids present in the store contribute; zoning counts use sorted keys so
/// the panel lists them in a stable order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SelectionSummary {
    pub count: usize,
    /// Square meters; missing areas count as zero.
    pub total_area: f64,
    pub zoning_counts: BTreeMap<String, usize>,
}

impl SelectionSummary {
    pub fn collect<'a>(ids: impl IntoIterator<Item = &'a ParcelId>, store: &ParcelStore) -> Self {
        let mut out = Self::default();
        for id in ids {
            let Some(parcel) = store.get(*id) else {
                continue;
            };
            out.count += 1;
            out.total_area += parcel.area_or_zero();
            let label = parcel
                .zoning_type
                .as_ref()
                .map(|z| z.as_str())
                .unwrap_or(UNKNOWN_ZONING);
            *out.zoning_counts.entry(label.to_string()).or_insert(0) += 1;
        }
        out
    }

    /// The panel only shows aggregates for multi-parcel selections.
    pub fn is_multi(&self) -> bool {
        self.count > 1
    }

    pub fn count_for(&self, label: &str) -> usize {
        self.zoning_counts.get(label).copied().unwrap_or(0)
    }
}
