use client::ZoningUpdateRequest;
use parcels::SelectionModel;
use tracing::debug;

use crate::error::{BusyReason, SessionError, ValidationError};

/// Guards the zoning update request.
///
/// At most one update is in flight; the flag is released by [`finish`]
/// whether the request succeeded or not.
///
/// [`finish`]: ZoningSubmitter::finish
#[derive(Debug, Default, Clone)]
pub struct ZoningSubmitter {
    in_flight: bool,
}

impl ZoningSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validates the selection and builds the request, marking it in flight.
    ///
    /// Nothing is marked when validation fails.
    pub fn begin(&mut self, selection: &SelectionModel) -> Result<ZoningUpdateRequest, SessionError> {
        if self.in_flight {
            return Err(SessionError::Busy(BusyReason::SubmitInFlight));
        }
        let request = validate(selection)?;
        self.in_flight = true;
        debug!(parcels = request.parcel_ids.len(), "zoning update in flight");
        Ok(request)
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

/// Checks that a zoning type is chosen and at least one parcel is selected.
pub fn validate(selection: &SelectionModel) -> Result<ZoningUpdateRequest, ValidationError> {
    let zoning = selection
        .pending_zoning()
        .filter(|z| !z.as_str().trim().is_empty())
        .cloned()
        .ok_or(ValidationError::MissingZoningType)?;
    if selection.is_empty() {
        return Err(ValidationError::EmptySelection);
    }
    Ok(ZoningUpdateRequest::new(selection.selected_ids().to_vec(), zoning))
}
