use foundation::{LatLng, LatLngBounds, ParcelId};
use serde::{Deserialize, Serialize};

use crate::zoning::{ZoningType, deserialize_optional_zoning};

/// A land parcel as served by `GET /api/parcels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub id: ParcelId,
    /// Boundary ring as `[lat, lng]` pairs.
    pub coordinates: Vec<LatLng>,
    #[serde(default, deserialize_with = "deserialize_optional_zoning")]
    pub zoning_type: Option<ZoningType>,
    /// Square meters.
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub full_address: Option<String>,
    #[serde(default)]
    pub usedesc: Option<String>,
}

impl Parcel {
    pub fn new(id: ParcelId, coordinates: Vec<LatLng>) -> Self {
        Self {
            id,
            coordinates,
            zoning_type: None,
            area: None,
            full_address: None,
            usedesc: None,
        }
    }

    pub fn with_zoning(mut self, zoning: ZoningType) -> Self {
        self.zoning_type = Some(zoning);
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    /// Representative point used for the info panel and camera moves.
    ///
    /// This is the vertex at index `len / 2`, not the polygon centroid. For
    /// small convex parcels it lands on the boundary near the far side.
    pub fn anchor(&self) -> Option<LatLng> {
        self.coordinates.get(self.coordinates.len() / 2).copied()
    }

    /// Area with a missing value counted as zero.
    pub fn area_or_zero(&self) -> f64 {
        self.area.unwrap_or(0.0)
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.coordinates)
    }
}

/// Decodes the body of `GET /api/parcels`.
pub fn decode_parcels(payload: &[u8]) -> Result<Vec<Parcel>, serde_json::Error> {
    serde_json::from_slice(payload)
}
