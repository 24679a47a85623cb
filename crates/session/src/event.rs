use client::{BackendError, ZoningUpdateRequest};
use foundation::{LatLng, ParcelId};
use parcels::{Parcel, ZoningType};

/// Input to [`crate::Session::dispatch`]: user actions and network completions.
#[derive(Debug)]
pub enum Event {
    /// A parcel polygon was clicked.
    ParcelClicked(ParcelId),
    /// The map was clicked at a position; resolves to the parcel under it.
    MapClicked(LatLng),
    /// The pointer moved over the map.
    PointerMoved(LatLng),
    /// The pointer left the map.
    PointerLeft,
    ZoningChosen(ZoningType),
    ClearRequested,
    SubmitRequested,
    ReloadRequested,
    AutoMoveToggled,
    DarkModeToggled,
    /// Zoom the camera by a number of levels (user wheel).
    Zoomed(f64),
    ParcelsLoaded(Result<Vec<Parcel>, BackendError>),
    SubmitFinished(Result<(), BackendError>),
}

/// Network work requested by the session. Each effect completes with exactly
/// one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Completes with [`Event::ParcelsLoaded`].
    FetchParcels,
    /// Completes with [`Event::SubmitFinished`].
    SubmitZoning(ZoningUpdateRequest),
}
