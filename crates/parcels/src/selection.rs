use foundation::ParcelId;
use tracing::warn;

use crate::focus::FocusRecord;
use crate::store::ParcelStore;
use crate::summary::SelectionSummary;
use crate::zoning::ZoningType;

/// A toggle referenced a parcel the store does not know about.
///
/// This means the caller rendered from a stale snapshot; the toggle is a no-op.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UnknownParcelReference(pub ParcelId);

impl std::fmt::Display for UnknownParcelReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parcel {} is not in the current snapshot", self.0)
    }
}

impl std::error::Error for UnknownParcelReference {}

/// What a successful [`SelectionModel::toggle`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Toggled {
    /// Appended; `first` is set when the selection was empty before.
    Added { first: bool },
    /// Removed; `now_empty` is set when nothing is left selected.
    Removed { now_empty: bool },
}

/// Ordered selection of parcels plus the panel state derived from it.
///
/// Ordering contract:
/// - `selected_ids` holds no duplicates and keeps insertion order.
/// - `focus` is derived from the last element after every mutation and is
///   `None` exactly when nothing is selected.
/// - `pending_zoning` is seeded from the first selected parcel and reset
///   whenever the selection becomes empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionModel {
    selected_ids: Vec<ParcelId>,
    focus: Option<FocusRecord>,
    pending_zoning: Option<ZoningType>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id` if absent, deselects it otherwise.
    ///
    /// Deselecting never consults the store for the removed id, so stale ids
    /// can always be dropped. Selecting an id the store does not hold fails
    /// without changing anything.
    pub fn toggle(
        &mut self,
        id: ParcelId,
        store: &ParcelStore,
    ) -> Result<Toggled, UnknownParcelReference> {
        if let Some(pos) = self.selected_ids.iter().position(|&s| s == id) {
            self.selected_ids.remove(pos);
            self.refresh_focus(store);
            return Ok(Toggled::Removed {
                now_empty: self.selected_ids.is_empty(),
            });
        }

        let focus = store
            .get(id)
            .and_then(FocusRecord::from_parcel)
            .ok_or(UnknownParcelReference(id))?;

        let first = self.selected_ids.is_empty();
        if first {
            self.pending_zoning = focus
                .zoning_type
                .as_ref()
                .and_then(|z| ZoningType::parse(z.as_str()));
        }
        self.selected_ids.push(id);
        self.focus = Some(focus);
        Ok(Toggled::Added { first })
    }

    /// Empties the selection and resets the focus and pending zoning choice.
    pub fn clear(&mut self) {
        self.selected_ids.clear();
        self.focus = None;
        self.pending_zoning = None;
    }

    /// Sets the zoning the user intends to apply to the whole selection.
    ///
    /// A blank label clears the choice.
    pub fn choose_zoning(&mut self, zoning: ZoningType) {
        self.pending_zoning = ZoningType::parse(zoning.as_str());
    }

    /// Drops ids missing from `store` and re-derives the focus.
    ///
    /// Returns how many ids were dropped.
    pub fn retain_known(&mut self, store: &ParcelStore) -> usize {
        let before = self.selected_ids.len();
        self.selected_ids.retain(|id| store.contains(*id));
        let dropped = before - self.selected_ids.len();
        if dropped > 0 {
            self.refresh_focus(store);
        }
        dropped
    }

    pub fn selected_ids(&self) -> &[ParcelId] {
        &self.selected_ids
    }

    pub fn contains(&self, id: ParcelId) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    pub fn focus(&self) -> Option<&FocusRecord> {
        self.focus.as_ref()
    }

    pub fn pending_zoning(&self) -> Option<&ZoningType> {
        self.pending_zoning.as_ref()
    }

    pub fn summary(&self, store: &ParcelStore) -> SelectionSummary {
        SelectionSummary::collect(&self.selected_ids, store)
    }

    fn refresh_focus(&mut self, store: &ParcelStore) {
        let Some(&last) = self.selected_ids.last() else {
            self.focus = None;
            self.pending_zoning = None;
            return;
        };
        self.focus = store.get(last).and_then(FocusRecord::from_parcel);
        if self.focus.is_none() {
            warn!(parcel = %last, "focus parcel missing from snapshot");
        }
    }
}
