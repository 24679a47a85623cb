use std::collections::HashMap;

use foundation::ParcelId;
use tracing::{debug, warn};

use crate::parcel::Parcel;

/// In-memory snapshot of every parcel the backend serves.
///
/// The collection is only ever replaced wholesale. Starting a reload clears it
/// immediately; a failed reload leaves it empty. Overlapping reloads are not
/// cancelled: whichever completes last wins.
#[derive(Debug, Default)]
pub struct ParcelStore {
    parcels: Vec<Parcel>,
    index: HashMap<ParcelId, usize>,
    outstanding: u32,
}

impl ParcelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parcels(parcels: Vec<Parcel>) -> Self {
        let mut store = Self::new();
        store.replace(parcels);
        store
    }

    /// Marks a reload as in flight and drops the current snapshot.
    pub fn begin_reload(&mut self) {
        self.outstanding += 1;
        self.clear_snapshot();
        debug!(outstanding = self.outstanding, "parcel reload started");
    }

    /// Completes one outstanding reload with a fresh listing.
    pub fn complete_reload(&mut self, parcels: Vec<Parcel>) {
        self.outstanding = self.outstanding.saturating_sub(1);
        self.replace(parcels);
    }

    /// Completes one outstanding reload that failed. The store stays empty.
    pub fn fail_reload(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
        self.clear_snapshot();
    }

    /// While loading, consumers show a blocking indicator and reject selection.
    pub fn is_loading(&self) -> bool {
        self.outstanding > 0
    }

    /// Replaces the snapshot.
    ///
    /// Parcels without vertices are dropped, as are repeated ids (first wins).
    pub fn replace(&mut self, parcels: Vec<Parcel>) {
        self.clear_snapshot();
        for parcel in parcels {
            if parcel.coordinates.is_empty() {
                warn!(parcel = %parcel.id, "dropping parcel without coordinates");
                continue;
            }
            if self.index.contains_key(&parcel.id) {
                warn!(parcel = %parcel.id, "dropping duplicate parcel id");
                continue;
            }
            self.index.insert(parcel.id, self.parcels.len());
            self.parcels.push(parcel);
        }
        debug!(count = self.parcels.len(), "parcel snapshot replaced");
    }

    pub fn get(&self, id: ParcelId) -> Option<&Parcel> {
        self.index.get(&id).and_then(|&i| self.parcels.get(i))
    }

    pub fn contains(&self, id: ParcelId) -> bool {
        self.index.contains_key(&id)
    }

    /// Parcels in backend order.
    pub fn iter(&self) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter()
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    fn clear_snapshot(&mut self) {
        self.parcels.clear();
        self.index.clear();
    }
}
