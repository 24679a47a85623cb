use foundation::ParcelId;
use parcels::ZoningType;
use serde::{Deserialize, Serialize};

pub const PARCELS_PATH: &str = "/api/parcels";
pub const ZONING_UPDATE_PATH: &str = "/api/zoning-update";

/// Body of `POST /api/zoning-update`.
///
/// The new class travels as `zoningType`, the name the backend's request
/// model binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoningUpdateRequest {
    pub parcel_ids: Vec<ParcelId>,
    pub zoning_type: ZoningType,
}

impl ZoningUpdateRequest {
    pub fn new(parcel_ids: Vec<ParcelId>, zoning_type: ZoningType) -> Self {
        Self {
            parcel_ids,
            zoning_type,
        }
    }
}
